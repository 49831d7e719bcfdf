use crate::repositories::backlog_repository::escape_like;

#[test]
fn test_escape_like_escapes_wildcards() {
    assert_eq!(escape_like("50%_off"), "50\\%\\_off");
}

#[test]
fn test_escape_like_escapes_escape_char() {
    assert_eq!(escape_like("a\\b"), "a\\\\b");
}

#[test]
fn test_escape_like_leaves_plain_text() {
    assert_eq!(escape_like("Önskemål"), "Önskemål");
}
