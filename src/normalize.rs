/// Normalize text the way the model expects its input: lowercase, strip
/// punctuation, collapse whitespace.
///
/// Every ASCII punctuation character is replaced by a single space, runs of
/// whitespace collapse to one space, and the result is trimmed. Never fails;
/// punctuation-only input yields an empty string.
pub fn clean_text(text: &str) -> String {
    let spaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect();

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
