use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::controllers::user::UserController;
use crate::core::error::ConfigError;

#[derive(Clone, Debug)]
pub(crate) struct AppState {
    pub(crate) pool: PgPool,
    pub(crate) user_controller: UserController,
}

impl AppState {
    pub(crate) async fn new(database_url: &str, secret: &str) -> Result<Self, ConfigError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        Ok(AppState {
            pool: pool.clone(),
            user_controller: UserController::new(pool, secret),
        })
    }
}
