//! PostgreSQL connection pool setup.
//!
//! Reads `DATABASE_URL` and runs the bundled migrations before handing the
//! pool out. Only used when the `postgres` store backend is selected.

use sqlx::PgPool;
use std::env;

/// Connects to PostgreSQL and applies pending migrations.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is unset, the connection fails, or a migration
/// cannot be applied. All three are startup-fatal by design.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    pool
}
