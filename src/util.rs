/// Render a megabyte count as whole gigabytes, e.g. `4096` -> `4GB`.
#[must_use]
pub fn format_gigabytes(memory_mb: u32) -> String {
    format!("{}GB", memory_mb / 1024)
}

/// Trim a free-text field, falling back to `fallback` when nothing is left.
#[must_use]
pub fn non_empty_or(text: &str, fallback: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        fallback.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Shorten `text` to at most `max_len` characters, appending an ellipsis.
#[must_use]
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(max_len).collect();
    out.push_str("...");
    out
}
