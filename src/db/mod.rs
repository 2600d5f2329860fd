//! Database access
//!
//! Connection pooling, startup migrations, and the repository holding the
//! property SQL.

pub mod connection;
pub mod repositories;

use sqlx::PgPool;

pub use connection::connect;

/// Apply pending migrations from `./migrations`
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
