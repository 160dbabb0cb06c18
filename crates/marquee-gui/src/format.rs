//! Display formatting for numbers shown in the UI.

/// Mean rating with two decimals, e.g. `8.00`.
pub fn mean_rating(value: f64) -> String {
    format!("{value:.2}")
}

/// Minutes rounded to the nearest whole minute, e.g. `120 min`.
pub fn minutes(value: f64) -> String {
    format!("{} min", value.round() as u64)
}

/// External rating as published, or a dash when absent.
pub fn imdb_rating(rating: Option<f32>) -> String {
    match rating {
        Some(r) => format!("{r:.1}"),
        None => "\u{2014}".into(),
    }
}

/// Header line for the result count.
pub fn results_found(count: usize) -> String {
    if count == 1 {
        "Found 1 result".into()
    } else {
        format!("Found {count} results")
    }
}

/// Count line for the summary panel.
pub fn movies_count(count: usize) -> String {
    if count == 1 {
        "1 movie".into()
    } else {
        format!("{count} movies")
    }
}

/// Text with a dash fallback for empty / "N/A" values.
pub fn or_dash(value: &str) -> &str {
    marquee_core::parse::available(value).unwrap_or("\u{2014}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_rating_two_decimals() {
        assert_eq!(mean_rating(8.0), "8.00");
        assert_eq!(mean_rating(7.666_666), "7.67");
        assert_eq!(mean_rating(0.0), "0.00");
    }

    #[test]
    fn test_minutes_rounds() {
        assert_eq!(minutes(120.0), "120 min");
        assert_eq!(minutes(120.5), "121 min");
        assert_eq!(minutes(119.4), "119 min");
        assert_eq!(minutes(0.0), "0 min");
    }

    #[test]
    fn test_imdb_rating() {
        assert_eq!(imdb_rating(Some(8.2)), "8.2");
        assert_eq!(imdb_rating(None), "\u{2014}");
    }

    #[test]
    fn test_counts() {
        assert_eq!(results_found(0), "Found 0 results");
        assert_eq!(results_found(1), "Found 1 result");
        assert_eq!(results_found(10), "Found 10 results");
        assert_eq!(movies_count(1), "1 movie");
        assert_eq!(movies_count(3), "3 movies");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash("N/A"), "\u{2014}");
        assert_eq!(or_dash(""), "\u{2014}");
        assert_eq!(or_dash("Christopher Nolan"), "Christopher Nolan");
    }
}
