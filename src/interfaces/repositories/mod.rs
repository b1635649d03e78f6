pub mod home;
pub mod sqlx_repo;
