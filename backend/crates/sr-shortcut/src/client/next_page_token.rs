/// Pull the `next` token out of a search response's `next` link.
///
/// The link is an encoded path + query such as
/// `/api/v3/search/stories?query=...&next=a8Fz&page_size=25`. The first
/// `&`-separated piece starting with `next=` is taken, and the text between
/// its first and second `=` returned as is (no percent-decoding). An empty
/// token counts as no token.
pub fn next_page_token(next: Option<&str>) -> Option<&str> {
    next?
        .split('&')
        .find(|kv| kv.starts_with("next="))
        .and_then(|kv| kv.split('=').nth(1))
        .filter(|token| !token.is_empty())
}
