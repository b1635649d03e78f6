use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, warn};

const MAX_CONNECTIONS: u32 = 20;
const MAX_RETRIES: u32 = 5;

/// Connects with a bounded exponential backoff so the API survives the
/// database coming up after it does.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let mut attempt = 0;
    let mut wait = Duration::from_secs(2);

    loop {
        match PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await
        {
            Ok(pool) => {
                info!("Database connection established.");
                return Ok(pool);
            }
            Err(e) if attempt < MAX_RETRIES => {
                attempt += 1;
                warn!(
                    "Database connection failed (attempt {}/{}): {}. Retrying in {:?}...",
                    attempt, MAX_RETRIES, e, wait
                );

                tokio::time::sleep(wait).await;
                wait *= 2;
            }
            Err(e) => return Err(e),
        }
    }
}
