//! Entity shapes and their JSON serialization contract.

use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::Row;
use std::fmt;

/// Account row. `password` never leaves the process: it is skipped by serde and redacted in `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub is_active: bool,
}

/// `is_active` is read as an integer: SQLite hands booleans back as integers through the `Any` driver.
impl<'r> sqlx::FromRow<'r, AnyRow> for User {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        let is_active: i64 = row.try_get("is_active")?;
        Ok(Self {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            password: row.try_get("password")?,
            is_active: is_active != 0,
        })
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("is_active", &self.is_active)
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub diameter: String,
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    pub population: String,
}

/// Join row linking one user to one planet and one character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub planet_id: i64,
    pub character_id: i64,
}

/// Body of `POST /favorites`. All three keys are required.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewFavorite {
    pub user_id: i64,
    pub planet_id: i64,
    pub character_id: i64,
}

// Insert shapes used by the seeder; ids are generated by the store.

#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCharacter {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPlanet {
    pub name: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub diameter: String,
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    pub population: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_serialization_omits_password() {
        let user = User {
            id: 7,
            email: "leia@alderaan.org".into(),
            password: "hunter2".into(),
            is_active: true,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({ "id": 7, "email": "leia@alderaan.org", "is_active": true })
        );
        assert!(!format!("{:?}", user).contains("hunter2"));
    }

    #[test]
    fn favorite_serializes_all_keys() {
        let fav = Favorite {
            id: 1,
            user_id: 2,
            planet_id: 3,
            character_id: 4,
        };
        assert_eq!(
            serde_json::to_value(fav).unwrap(),
            json!({ "id": 1, "user_id": 2, "planet_id": 3, "character_id": 4 })
        );
    }

    #[test]
    fn character_serializes_every_column() {
        let c = Character {
            id: 1,
            name: "Luke Skywalker".into(),
            height: "172".into(),
            mass: "77".into(),
            hair_color: "blond".into(),
        };
        let value = serde_json::to_value(c).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 5);
        assert!(keys.contains(&"hair_color"));
    }

    #[test]
    fn new_favorite_requires_every_key() {
        let ok: NewFavorite =
            serde_json::from_value(json!({ "user_id": 1, "planet_id": 2, "character_id": 3 })).unwrap();
        assert_eq!(ok.planet_id, 2);
        assert!(serde_json::from_value::<NewFavorite>(json!({ "user_id": 1, "planet_id": 2 })).is_err());
    }

    #[test]
    fn new_user_defaults_to_active() {
        let u: NewUser = serde_json::from_value(json!({ "email": "a@b.c", "password": "x" })).unwrap();
        assert!(u.is_active);
    }
}
