//! Text-fragment locators (`#:~:text=start,end`).

/// Highlights with more words than this are located by their first and last
/// few words instead of the whole text.
const FULL_TEXT_MAX_WORDS: usize = 10;
const EDGE_WORDS: usize = 5;

/// Percent-encode a URI component the way browsers' `encodeURIComponent` does.
///
/// Everything except ASCII alphanumerics and `-_.!~*'()` is encoded as
/// uppercase `%XX` bytes of the UTF-8 form.
pub fn encode_uri_component(input: &str) -> String {
    // urlencoding leaves only alphanumerics and `-_.~` bare.
    urlencoding::encode(input)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// Build the fragment payload that follows `#:~:text=`.
///
/// Long highlights (more than 10 words) become `start,end` where each side is
/// five words rejoined by single spaces. Shorter highlights are encoded whole,
/// whitespace untouched.
pub fn locator_fragment(highlight: &str) -> String {
    let words: Vec<&str> = highlight.split_whitespace().collect();
    if words.len() > FULL_TEXT_MAX_WORDS {
        let start = words[..EDGE_WORDS].join(" ");
        let end = words[words.len() - EDGE_WORDS..].join(" ");
        format!(
            "{},{}",
            encode_uri_component(&start),
            encode_uri_component(&end)
        )
    } else {
        encode_uri_component(highlight)
    }
}

/// Deep link that scrolls `url` to the located text.
pub fn text_fragment_url(url: &str, fragment: &str) -> String {
    format!("{}#:~:text={}", url, fragment)
}
