use crate::ShortcutClient;

use sr_config::ShortcutConfig;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let config = ShortcutConfig {
        url: "https://api.app.shortcut.com/api/v3/".to_string(),
        ..Default::default()
    };

    let client = ShortcutClient::new(&config);

    assert_eq!(client.base_url, "https://api.app.shortcut.com/api/v3");
}

#[test]
fn test_page_size_taken_from_config() {
    let config = ShortcutConfig {
        page_size: 10,
        ..Default::default()
    };

    let client = ShortcutClient::new(&config);

    assert_eq!(client.page_size, 10);
}
