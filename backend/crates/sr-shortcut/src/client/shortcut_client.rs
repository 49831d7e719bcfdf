use crate::client::error::Result as ShortcutResult;
use crate::{
    BacklogSource, RemoteCustomField, RemoteLabel, RemoteStory, ShortcutError, StorySearchResults,
    next_page_token,
};

use sr_config::ShortcutConfig;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, info};
use reqwest::{Client as ReqwestClient, Url};
use serde::de::DeserializeOwned;

const TOKEN_HEADER: &str = "Shortcut-Token";

/// HTTP client for the Shortcut REST API
pub struct ShortcutClient {
    pub base_url: String,
    pub page_size: u32,
    token: Option<String>,
    client: ReqwestClient,
}

impl ShortcutClient {
    pub fn new(config: &ShortcutConfig) -> Self {
        Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
            token: config.token.clone(),
            client: ReqwestClient::new(),
        }
    }

    /// Join `path` onto the base URL and append `query` percent-encoded
    fn url(&self, path: &str, query: &[(&str, &str)]) -> ShortcutResult<Url> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut url = Url::parse(&raw).map_err(|e| ShortcutError::InvalidUrl {
            url: raw.clone(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    /// GET and decode a JSON body. Non-2xx statuses become `Api` errors
    /// carrying the response text.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ShortcutResult<T> {
        let url = self.url(path, query)?;
        debug!("GET {}", url.path());

        let mut req = self.client.get(url);
        if let Some(ref token) = self.token {
            req = req.header(TOKEN_HEADER, token);
        }

        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ShortcutError::api_error(status.as_u16(), body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Non-archived stories in workflow state `state`, in API order.
    ///
    /// A negative `limit` means all of them: the server-reported total
    /// becomes the limit. Otherwise pages are requested until at least
    /// `limit` stories are collected. Either way paging stops when a page
    /// has no next token. Any failed page fails the whole fetch.
    pub async fn fetch_stories(&self, state: &str, limit: i64) -> ShortcutResult<Vec<RemoteStory>> {
        let search = format!("state:\"{state}\" -is:archived");
        let page_size = self.page_size.to_string();
        let first_query = [("query", search.as_str()), ("page_size", page_size.as_str())];

        let mut page: StorySearchResults = self.get("/search/stories", &first_query).await?;
        let limit = if limit < 0 { page.total } else { limit };
        let mut stories = std::mem::take(&mut page.data);
        let mut pages = 1;
        let mut next = next_page_token(page.next.as_deref()).map(str::to_string);

        while (stories.len() as i64) < limit {
            let Some(token) = next.take() else {
                break;
            };

            let query = [
                ("query", search.as_str()),
                ("page_size", page_size.as_str()),
                ("next", token.as_str()),
            ];
            page = self.get("/search/stories", &query).await?;
            stories.append(&mut page.data);
            pages += 1;
            next = next_page_token(page.next.as_deref()).map(str::to_string);
        }

        info!(
            "Fetched {} stories in state {:?} ({} pages)",
            stories.len(),
            state,
            pages
        );

        Ok(stories)
    }

    pub async fn fetch_labels(&self) -> ShortcutResult<Vec<RemoteLabel>> {
        self.get("/labels", &[("slim", "true")]).await
    }

    pub async fn fetch_custom_fields(&self) -> ShortcutResult<Vec<RemoteCustomField>> {
        self.get("/custom-fields", &[]).await
    }
}

#[async_trait]
impl BacklogSource for ShortcutClient {
    async fn fetch_stories(&self, state: &str, limit: i64) -> ShortcutResult<Vec<RemoteStory>> {
        ShortcutClient::fetch_stories(self, state, limit).await
    }

    async fn fetch_labels(&self) -> ShortcutResult<Vec<RemoteLabel>> {
        ShortcutClient::fetch_labels(self).await
    }

    async fn fetch_custom_fields(&self) -> ShortcutResult<Vec<RemoteCustomField>> {
        ShortcutClient::fetch_custom_fields(self).await
    }
}
