//! Word forms for UI labels

/// `word` for a count of exactly one, otherwise `word` with an `s` appended
pub fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
