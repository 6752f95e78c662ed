//! Response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use std::collections::BTreeMap;

pub type KeyedList<T> = BTreeMap<&'static str, Vec<T>>;

/// `{"<key>": [items...]}` with 200.
pub fn keyed_list<T: Serialize>(key: &'static str, items: Vec<T>) -> (StatusCode, Json<KeyedList<T>>) {
    (StatusCode::OK, Json(BTreeMap::from([(key, items)])))
}

/// A bare JSON string confirmation, e.g. `"Favorite added successfully"`.
pub fn confirmation(message: &'static str) -> (StatusCode, Json<&'static str>) {
    (StatusCode::OK, Json(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_list_wraps_items() {
        let (status, Json(body)) = keyed_list("planets", vec![1, 2, 3]);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({ "planets": [1, 2, 3] })
        );
    }

    #[test]
    fn keyed_list_of_nothing_is_empty_array() {
        let (_, Json(body)) = keyed_list::<u8>("users", Vec::new());
        assert_eq!(serde_json::to_value(body).unwrap(), serde_json::json!({ "users": [] }));
    }

    #[test]
    fn confirmation_is_a_json_string() {
        let (status, Json(msg)) = confirmation("Favorite added successfully");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::to_string(&msg).unwrap(), "\"Favorite added successfully\"");
    }
}
