//! Queries and mutations over the four tables. Every call is a single statement, committed on return.

use crate::error::AppError;
use crate::records::{
    Character, Favorite, NewCharacter, NewFavorite, NewPlanet, NewUser, Planet, User,
};
use crate::store::{CHARACTER_TABLE, FAVORITE_TABLE, PLANET_TABLE, USER_TABLE};
use sqlx::{AnyConnection, AnyPool};

/// `is_active` is projected as 0/1 so both backends decode it the same way.
const USER_COLUMNS: &str =
    "id, email, password, CAST(CASE WHEN is_active THEN 1 ELSE 0 END AS BIGINT) AS is_active";
const CHARACTER_COLUMNS: &str = "id, name, height, mass, hair_color";
const PLANET_COLUMNS: &str = "id, name, rotation_period, orbital_period, diameter, climate, gravity, terrain, surface_water, population";
const FAVORITE_COLUMNS: &str = "id, user_id, planet_id, character_id";

/// Foreign key column on `favorite` used by the relationship lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FavoriteKey {
    User,
    Planet,
    Character,
}

impl FavoriteKey {
    fn column(self) -> &'static str {
        match self {
            FavoriteKey::User => "user_id",
            FavoriteKey::Planet => "planet_id",
            FavoriteKey::Character => "character_id",
        }
    }
}

pub struct RecordService;

impl RecordService {
    pub async fn list_characters(pool: &AnyPool) -> Result<Vec<Character>, AppError> {
        let sql = format!("SELECT {CHARACTER_COLUMNS} FROM {CHARACTER_TABLE} ORDER BY id");
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql).fetch_all(pool).await?)
    }

    /// Fetch one character by primary key. Returns None when absent.
    pub async fn get_character(pool: &AnyPool, id: i64) -> Result<Option<Character>, AppError> {
        let sql = format!("SELECT {CHARACTER_COLUMNS} FROM {CHARACTER_TABLE} WHERE id = $1");
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?)
    }

    pub async fn list_planets(pool: &AnyPool) -> Result<Vec<Planet>, AppError> {
        let sql = format!("SELECT {PLANET_COLUMNS} FROM {PLANET_TABLE} ORDER BY id");
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql).fetch_all(pool).await?)
    }

    pub async fn list_users(pool: &AnyPool) -> Result<Vec<User>, AppError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM {USER_TABLE} ORDER BY id");
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql).fetch_all(pool).await?)
    }

    pub async fn list_favorites(pool: &AnyPool) -> Result<Vec<Favorite>, AppError> {
        let sql = format!("SELECT {FAVORITE_COLUMNS} FROM {FAVORITE_TABLE} ORDER BY id");
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql).fetch_all(pool).await?)
    }

    pub async fn get_favorite(pool: &AnyPool, id: i64) -> Result<Option<Favorite>, AppError> {
        let sql = format!("SELECT {FAVORITE_COLUMNS} FROM {FAVORITE_TABLE} WHERE id = $1");
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?)
    }

    pub async fn favorites_by_user(pool: &AnyPool, user_id: i64) -> Result<Vec<Favorite>, AppError> {
        Self::favorites_where(pool, FavoriteKey::User, user_id).await
    }

    pub async fn favorites_by_planet(pool: &AnyPool, planet_id: i64) -> Result<Vec<Favorite>, AppError> {
        Self::favorites_where(pool, FavoriteKey::Planet, planet_id).await
    }

    pub async fn favorites_by_character(
        pool: &AnyPool,
        character_id: i64,
    ) -> Result<Vec<Favorite>, AppError> {
        Self::favorites_where(pool, FavoriteKey::Character, character_id).await
    }

    async fn favorites_where(
        pool: &AnyPool,
        key: FavoriteKey,
        value: i64,
    ) -> Result<Vec<Favorite>, AppError> {
        let sql = format!(
            "SELECT {FAVORITE_COLUMNS} FROM {FAVORITE_TABLE} WHERE {} = $1 ORDER BY id",
            key.column()
        );
        tracing::debug!(sql = %sql, value, "query");
        Ok(sqlx::query_as(&sql).bind(value).fetch_all(pool).await?)
    }

    /// Insert one favorite. Referenced rows are not checked first; the store's foreign keys
    /// reject dangling ids and the error propagates as a storage failure.
    pub async fn add_favorite(pool: &AnyPool, new: &NewFavorite) -> Result<Favorite, AppError> {
        let sql = format!(
            "INSERT INTO {FAVORITE_TABLE} (user_id, planet_id, character_id) VALUES ($1, $2, $3) RETURNING {FAVORITE_COLUMNS}"
        );
        tracing::debug!(sql = %sql, params = ?new, "query");
        let row = sqlx::query_as(&sql)
            .bind(new.user_id)
            .bind(new.planet_id)
            .bind(new.character_id)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Delete one favorite by id. Returns false when no row matched.
    pub async fn delete_favorite(pool: &AnyPool, id: i64) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {FAVORITE_TABLE} WHERE id = $1");
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn insert_user(conn: &mut AnyConnection, new: &NewUser) -> Result<User, AppError> {
        let sql = format!(
            "INSERT INTO {USER_TABLE} (email, password, is_active) VALUES ($1, $2, $3) RETURNING {USER_COLUMNS}"
        );
        tracing::debug!(sql = %sql, email = %new.email, "query (tx)");
        let row = sqlx::query_as(&sql)
            .bind(&new.email)
            .bind(&new.password)
            .bind(new.is_active)
            .fetch_one(&mut *conn)
            .await?;
        Ok(row)
    }

    pub async fn insert_character(
        conn: &mut AnyConnection,
        new: &NewCharacter,
    ) -> Result<Character, AppError> {
        let sql = format!(
            "INSERT INTO {CHARACTER_TABLE} (name, height, mass, hair_color) VALUES ($1, $2, $3, $4) RETURNING {CHARACTER_COLUMNS}"
        );
        tracing::debug!(sql = %sql, params = ?new, "query (tx)");
        let row = sqlx::query_as(&sql)
            .bind(&new.name)
            .bind(&new.height)
            .bind(&new.mass)
            .bind(&new.hair_color)
            .fetch_one(&mut *conn)
            .await?;
        Ok(row)
    }

    pub async fn insert_planet(conn: &mut AnyConnection, new: &NewPlanet) -> Result<Planet, AppError> {
        let sql = format!(
            "INSERT INTO {PLANET_TABLE} (name, rotation_period, orbital_period, diameter, climate, gravity, terrain, surface_water, population) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING {PLANET_COLUMNS}"
        );
        tracing::debug!(sql = %sql, params = ?new, "query (tx)");
        let row = sqlx::query_as(&sql)
            .bind(&new.name)
            .bind(&new.rotation_period)
            .bind(&new.orbital_period)
            .bind(&new.diameter)
            .bind(&new.climate)
            .bind(&new.gravity)
            .bind(&new.terrain)
            .bind(&new.surface_water)
            .bind(&new.population)
            .fetch_one(&mut *conn)
            .await?;
        Ok(row)
    }
}
