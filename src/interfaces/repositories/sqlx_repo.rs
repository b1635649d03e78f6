use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxHomeRepo {
    pub pool: PgPool,
}
