use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BACKLOG_STATE, DEFAULT_PAGE_SIZE, DEFAULT_SHORTCUT_URL,
    MAX_PAGE_SIZE, MIN_PAGE_SIZE,
};

use serde::Deserialize;

/// Connection settings for the Shortcut REST API
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ShortcutConfig {
    /// API base URL, e.g. https://api.app.shortcut.com/api/v3
    pub url: String,
    /// API token sent in the `Shortcut-Token` header
    pub token: Option<String>,
    /// Workflow state whose stories make up the backlog
    pub backlog_state: String,
    /// Stories requested per search page
    pub page_size: u32,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_SHORTCUT_URL),
            token: None,
            backlog_state: String::from(DEFAULT_BACKLOG_STATE),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ShortcutConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::shortcut(format!(
                "shortcut.url must be an http(s) URL, got {:?}",
                self.url
            )));
        }

        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(ConfigError::shortcut(format!(
                "shortcut.page_size must be {}-{}, got {}",
                MIN_PAGE_SIZE, MAX_PAGE_SIZE, self.page_size
            )));
        }

        if self.backlog_state.trim().is_empty() {
            return Err(ConfigError::shortcut(
                "shortcut.backlog_state must not be empty",
            ));
        }

        Ok(())
    }

    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

// Never print the token
impl std::fmt::Debug for ShortcutConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortcutConfig")
            .field("url", &self.url)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("backlog_state", &self.backlog_state)
            .field("page_size", &self.page_size)
            .finish()
    }
}
