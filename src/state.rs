use std::sync::Arc;

use usermgmt_config::{AuthConfig, CorsConfig, UsersConfig};

use crate::modules::users::store::{InMemoryUserStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub users_config: UsersConfig,
    pub auth_config: AuthConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    /// State backed by an empty in-memory store.
    pub fn new(users_config: UsersConfig, auth_config: AuthConfig, cors_config: CorsConfig) -> Self {
        let store = Arc::new(InMemoryUserStore::new(users_config.id_base));
        Self::with_store(store, users_config, auth_config, cors_config)
    }

    pub fn with_store(
        store: Arc<dyn UserStore>,
        users_config: UsersConfig,
        auth_config: AuthConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            store,
            users_config,
            auth_config,
            cors_config,
        }
    }
}

pub fn init_app_state() -> AppState {
    AppState::new(
        UsersConfig::from_env(),
        AuthConfig::from_env(),
        CorsConfig::from_env(),
    )
}
