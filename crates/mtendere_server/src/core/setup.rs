use crate::core::state::AppState;

use anyhow::{Context, Result as AnyhowResult};
use mtendere_auth::auth::AuthManager;
use mtendere_logging::logging::setup_logging;
use mtendere_settings::config::MtendereConfig;
use mtendere_store::{MemoryStore, UserStore};
use mtendere_types::entities::User;
use mtendere_types::enums::UserRole;
use mtendere_utils::color::LogColors;
use std::sync::Arc;
use tracing::{info, warn};

/// Build the application state from a config: auth manager, empty
/// collections, and the bootstrap admin account.
pub async fn build_state(config: MtendereConfig) -> AnyhowResult<Arc<AppState>> {
    let auth_manager = AuthManager::new(&config.jwt_secret, config.token_expiry_hours);
    let store = MemoryStore::new();

    let admin = User::new(
        config.admin_email.clone(),
        config.admin_username.clone(),
        "Admin".to_string(),
        "User".to_string(),
        auth_manager.hash_password(&config.admin_password),
        UserRole::Admin,
    );

    store
        .users
        .insert(admin)
        .await
        .context("Failed to seed bootstrap admin")?;

    Ok(Arc::new(AppState {
        config: Arc::new(config),
        auth_manager,
        store,
    }))
}

pub async fn setup_components() -> AnyhowResult<Arc<AppState>> {
    let config = MtendereConfig::default();

    setup_logging(&config.app_env)
        .await
        .context(LogColors::blue("Failed to setup logging"))?;

    info!("Starting Mtendere back-office server ....");

    if config.using_default_secret() {
        warn!(
            "{}",
            LogColors::alert(
                "MTENDERE_JWT_SECRET is not set; using the development signing secret. \
                 Do not run production this way."
            )
        );
    }

    let state = build_state(config).await?;

    info!(
        "Seeded bootstrap admin {}",
        LogColors::green(&state.config.admin_email)
    );

    Ok(state)
}
