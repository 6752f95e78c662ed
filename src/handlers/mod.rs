//! HTTP handlers for the record tables and maintenance.

pub mod admin;
pub mod catalog;
pub mod favorite;
pub use admin::*;
pub use catalog::*;
pub use favorite::*;

/// Integer path id. Anything else is treated like an unknown id.
pub(crate) fn parse_id(id_str: &str) -> Option<i64> {
    id_str.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn parses_integer_ids_only() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("-1"), Some(-1));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("1.5"), None);
    }
}
