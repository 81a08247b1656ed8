use std::sync::Arc;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::jwt::JwtConfig;
use crate::config::store::{StoreBackend, StoreConfig};
use crate::store::UserStore;
use crate::store::memory::InMemoryUserStore;
use crate::store::postgres::PgUserStore;

#[derive(Clone)]
pub struct AppState {
    pub user_store: Arc<dyn UserStore>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    let store_config = StoreConfig::from_env();

    let user_store: Arc<dyn UserStore> = match store_config.backend {
        StoreBackend::Postgres => Arc::new(PgUserStore::new(init_db_pool().await)),
        StoreBackend::Memory => {
            tracing::warn!("running with the in-memory user store; data will not survive restarts");
            Arc::new(InMemoryUserStore::new())
        }
    };

    AppState {
        user_store,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
