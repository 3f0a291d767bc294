use crate::config::database::PostgresSettings;
use sqlx::{migrate, PgConnection, PgPool};

pub async fn get_postgres_pool(config: PostgresSettings) -> PgPool {
    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Cannot establish postgres connection");
    if config.is_migrating {
        migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Auto migration failed");
    }
    pool
}

/// Borrowed connection paired with a query payload, so related queries can
/// share one acquired connection or transaction.
pub struct PgQuery<'c, T> {
    pub payload: T,
    pub conn: &'c mut PgConnection,
}

impl<'c, T> PgQuery<'c, T> {
    pub fn new(payload: T, conn: &'c mut PgConnection) -> Self {
        Self { payload, conn }
    }
}
