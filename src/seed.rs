//! Startup seeding from a JSON file: `{"users": [...], "characters": [...], "planets": [...]}`.

use crate::error::{AppError, ConfigError};
use crate::records::{NewCharacter, NewPlanet, NewUser};
use crate::service::RecordService;
use serde::Deserialize;
use sqlx::AnyPool;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<NewUser>,
    #[serde(default)]
    pub characters: Vec<NewCharacter>,
    #[serde(default)]
    pub planets: Vec<NewPlanet>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedCounts {
    pub users: usize,
    pub characters: usize,
    pub planets: usize,
}

pub async fn load_seed(path: &Path) -> Result<SeedData, ConfigError> {
    let seed_err = |reason: String| ConfigError::Seed {
        path: path.display().to_string(),
        reason,
    };
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| seed_err(e.to_string()))?;
    serde_json::from_str(&raw).map_err(|e| seed_err(e.to_string()))
}

/// Insert every seed row in one transaction; a single failure (e.g. duplicate email) inserts nothing.
pub async fn apply_seed(pool: &AnyPool, seed: &SeedData) -> Result<SeedCounts, AppError> {
    let mut tx = pool.begin().await?;
    for user in &seed.users {
        RecordService::insert_user(&mut tx, user).await?;
    }
    for character in &seed.characters {
        RecordService::insert_character(&mut tx, character).await?;
    }
    for planet in &seed.planets {
        RecordService::insert_planet(&mut tx, planet).await?;
    }
    tx.commit().await?;
    Ok(SeedCounts {
        users: seed.users.len(),
        characters: seed.characters.len(),
        planets: seed.planets.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn loads_partial_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"characters": [{{"name": "R2-D2", "height": "96", "mass": "32", "hair_color": "n/a"}}]}}"#
        )
        .unwrap();
        let seed = load_seed(file.path()).await.unwrap();
        assert_eq!(seed.characters.len(), 1);
        assert_eq!(seed.characters[0].name, "R2-D2");
        assert!(seed.users.is_empty());
        assert!(seed.planets.is_empty());
    }

    #[tokio::test]
    async fn malformed_seed_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load_seed(file.path()).await.unwrap_err();
        assert!(matches!(err, ConfigError::Seed { .. }));
    }

    #[tokio::test]
    async fn missing_seed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_seed(&dir.path().join("absent.json")).await.unwrap_err();
        assert!(matches!(err, ConfigError::Seed { .. }));
    }
}
