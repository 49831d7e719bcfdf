

use tempfile::TempDir;

/// Every variable the loader reads, cleared before each test
const MANAGED_VARS: [&str; 10] = [
    "SR_SERVER_HOST",
    "SR_SERVER_PORT",
    "SR_DATABASE_PATH",
    "SHORTCUT_URL",
    "SHORTCUT_TOKEN",
    "SHORTCUT_BACKLOG_STATE",
    "SHORTCUT_PAGE_SIZE",
    "LOG_LEVEL",
    "SR_LOG_COLORED",
    "SR_LOG_FILE",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: String,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &str, value: &str) -> Self {
        unsafe {
            let original = std::env::var(key).ok();
            std::env::set_var(key, value);
            Self {
                key: key.to_string(),
                original,
            }
        }
    }

    pub(crate) fn remove(key: &str) -> Self {
        unsafe {
            let original = std::env::var(key).ok();
            std::env::remove_var(key);
            Self {
                key: key.to_string(),
                original,
            }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => std::env::set_var(&self.key, val),
                None => std::env::remove_var(&self.key),
            }
        }
    }
}

/// Temp config dir pointed to by SR_CONFIG_DIR, with all overrides cleared
pub(crate) struct TestEnv {
    pub(crate) dir: TempDir,
    _guards: Vec<EnvGuard>,
}

impl TestEnv {
    pub(crate) fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let mut guards = vec![EnvGuard::set(
            "SR_CONFIG_DIR",
            dir.path().to_str().unwrap(),
        )];
        for var in MANAGED_VARS {
            guards.push(EnvGuard::remove(var));
            guards.push(EnvGuard::remove(&format!("{var}_FILE")));
        }
        Self {
            dir,
            _guards: guards,
        }
    }

    pub(crate) fn write_config(&self, contents: &str) {
        std::fs::write(self.dir.path().join("config.toml"), contents).unwrap();
    }

    pub(crate) fn write_secret(&self, name: &str, contents: &str) -> String {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path.to_str().unwrap().to_string()
    }
}
