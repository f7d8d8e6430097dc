//! Console pass-through
//!
//! Debug helper for poking at values from a handler; the widget flows do not
//! use it.

use std::fmt::Debug;

const SEPARATOR: &str = "-------------";

/// Log `value`, or a separator line when there is none
pub fn log_value<T: Debug + ?Sized>(value: Option<&T>) {
    log::info!("{}", format_value(value));
}

fn format_value<T: Debug + ?Sized>(value: Option<&T>) -> String {
    match value {
        Some(value) => format!("{:?}", value),
        None => SEPARATOR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_is_separator() {
        assert_eq!(format_value::<str>(None), "-------------");
    }

    #[test]
    fn test_value_uses_debug_form() {
        assert_eq!(format_value(Some("milk")), "\"milk\"");
        assert_eq!(format_value(Some(&[1, 2][..])), "[1, 2]");
    }
}
