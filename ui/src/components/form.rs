//! Reading values out of form events.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub fn input_value<E: TargetCast>(e: &E) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

/// Area typed by the user. Accepts a decimal comma; anything unparsable
/// counts as zero.
pub fn parse_area(text: &str) -> f64 {
    text.trim().replace(',', ".").parse().unwrap_or(0.0)
}

/// Id picked in a select whose empty option means "none".
pub fn parse_id(text: &str) -> Option<i64> {
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn areas_accept_decimal_comma() {
        assert_eq!(parse_area("12,5"), 12.5);
        assert_eq!(parse_area(" 3.25 "), 3.25);
        assert_eq!(parse_area(""), 0.0);
        assert_eq!(parse_area("n/a"), 0.0);
    }

    #[test]
    fn empty_option_is_no_id() {
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("7"), Some(7));
    }
}
