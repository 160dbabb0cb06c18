//! Lenient parsing of the free-text fields the movie source returns.

/// Placeholder the source uses for missing values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Minutes from runtime text such as "136 min".
///
/// Reads the leading digits of the first word, so "136min" and "136 min"
/// both give 136. Anything else (empty, "N/A", negative, overflowing)
/// gives 0.
pub fn runtime_minutes(text: &str) -> u32 {
    let Some(first) = text.split_whitespace().next() else {
        return 0;
    };
    let first = first.strip_prefix('+').unwrap_or(first);
    let digits_end = first
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(first.len());
    first[..digits_end].parse().unwrap_or(0)
}

/// External rating such as "8.2". `None` for "N/A" or garbage.
pub fn rating(text: &str) -> Option<f32> {
    text.trim()
        .parse::<f32>()
        .ok()
        .filter(|r| r.is_finite() && *r >= 0.0)
}

/// `None` for empty or "N/A" text, the trimmed text otherwise.
pub fn available(text: &str) -> Option<&str> {
    let t = text.trim();
    if t.is_empty() || t == NOT_AVAILABLE {
        None
    } else {
        Some(t)
    }
}
