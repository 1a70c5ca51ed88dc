pub mod debounce;
pub mod sort;

pub use debounce::{Debouncer, MIN_SEARCH_LEN, SEARCH_DEBOUNCE_MS};
pub use sort::{SortDirection, SortState};

/// Returns true if the application is running in development mode.
/// Checks if BACKEND_URL contains "localhost".
pub fn is_dev_mode() -> bool {
    option_env!("BACKEND_URL")
        .map(|url| url.contains("localhost"))
        .unwrap_or(false)
}

/// Hectares with at most two decimals, trailing zeros dropped.
pub fn format_area(value: f64) -> String {
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} ha")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn areas_drop_trailing_zeros() {
        assert_eq!(format_area(12.0), "12 ha");
        assert_eq!(format_area(7.25), "7.25 ha");
        assert_eq!(format_area(0.5), "0.5 ha");
        assert_eq!(format_area(1.005), "1 ha");
    }
}
