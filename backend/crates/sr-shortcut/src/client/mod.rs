pub(crate) mod error;
pub(crate) mod next_page_token;
pub(crate) mod shortcut_client;

pub use error::{Result as ShortcutResult, ShortcutError};
pub use next_page_token::next_page_token;
pub use shortcut_client::ShortcutClient;
