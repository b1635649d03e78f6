mod domain;
mod infrastructure;
mod interfaces;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, use_cases};
pub use infrastructure::db;
pub use interfaces::{handlers, repositories, routes};

use repositories::sqlx_repo::SqlxHomeRepo;
use use_cases::home::HomeHandler;

pub type AppHomeHandler = HomeHandler<SqlxHomeRepo>;

pub struct AppState {
    pub home_handler: AppHomeHandler,
}

impl AppState {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let home_repo = SqlxHomeRepo::new(pool);
        let home_handler = HomeHandler::new(home_repo);

        AppState { home_handler }
    }
}
