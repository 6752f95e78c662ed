//! Table DDL and whole-database wipe. Table names are quoted because `user` is reserved in PostgreSQL.

use crate::db::Backend;
use crate::error::AppError;
use sqlx::{AnyConnection, AnyPool};

pub const USER_TABLE: &str = "\"user\"";
pub const CHARACTER_TABLE: &str = "\"character\"";
pub const PLANET_TABLE: &str = "\"planet\"";
pub const FAVORITE_TABLE: &str = "\"favorite\"";

/// Drop order: referencing table first.
const DROP_ORDER: &[&str] = &[FAVORITE_TABLE, CHARACTER_TABLE, PLANET_TABLE, USER_TABLE];

fn id_column(backend: Backend) -> &'static str {
    match backend {
        Backend::Postgres => "id BIGSERIAL PRIMARY KEY",
        Backend::Sqlite => "id INTEGER PRIMARY KEY AUTOINCREMENT",
    }
}

/// CREATE TABLE statements in dependency order (referenced tables before `favorite`).
fn create_statements(backend: Backend) -> Vec<String> {
    let id = id_column(backend);
    vec![
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {USER_TABLE} (
                {id},
                email VARCHAR(120) NOT NULL UNIQUE,
                password VARCHAR(80) NOT NULL,
                is_active BOOLEAN NOT NULL
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {CHARACTER_TABLE} (
                {id},
                name VARCHAR(120) NOT NULL,
                height VARCHAR(120) NOT NULL,
                mass VARCHAR(120) NOT NULL,
                hair_color VARCHAR(120) NOT NULL
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {PLANET_TABLE} (
                {id},
                name VARCHAR(120) NOT NULL,
                rotation_period VARCHAR(120) NOT NULL,
                orbital_period VARCHAR(120) NOT NULL,
                diameter VARCHAR(120) NOT NULL,
                climate VARCHAR(120) NOT NULL,
                gravity VARCHAR(120) NOT NULL,
                terrain VARCHAR(120) NOT NULL,
                surface_water VARCHAR(120) NOT NULL,
                population VARCHAR(120) NOT NULL
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {FAVORITE_TABLE} (
                {id},
                user_id BIGINT NOT NULL REFERENCES {USER_TABLE}(id),
                planet_id BIGINT NOT NULL REFERENCES {PLANET_TABLE}(id),
                character_id BIGINT NOT NULL REFERENCES {CHARACTER_TABLE}(id)
            )
            "#
        ),
    ]
}

async fn create_tables(conn: &mut AnyConnection, backend: Backend) -> Result<(), AppError> {
    for ddl in create_statements(backend) {
        sqlx::query(&ddl).execute(&mut *conn).await?;
    }
    Ok(())
}

/// Create the four tables if they do not exist. Idempotent.
pub async fn ensure_schema(pool: &AnyPool, backend: Backend) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    create_tables(&mut tx, backend).await?;
    tx.commit().await?;
    Ok(())
}

/// Drop every table and recreate the empty schema in one transaction.
pub async fn wipe_all(pool: &AnyPool, backend: Backend) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for table in DROP_ORDER {
        sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
            .execute(&mut *tx)
            .await?;
    }
    create_tables(&mut tx, backend).await?;
    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favorite_is_created_last_and_dropped_first() {
        let stmts = create_statements(Backend::Sqlite);
        assert!(stmts.last().unwrap().contains(FAVORITE_TABLE));
        assert_eq!(DROP_ORDER[0], FAVORITE_TABLE);
    }

    #[test]
    fn id_ddl_differs_per_backend() {
        let pg = create_statements(Backend::Postgres);
        let lite = create_statements(Backend::Sqlite);
        assert!(pg.iter().all(|s| s.contains("BIGSERIAL PRIMARY KEY")));
        assert!(lite.iter().all(|s| s.contains("INTEGER PRIMARY KEY AUTOINCREMENT")));
    }
}
