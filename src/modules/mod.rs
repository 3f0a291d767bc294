use self::database::get_postgres_pool;
use crate::config::app::ApplicationSettings;
use crate::config::environment::Environment;
use crate::config::invitation::InvitationConfig;
use crate::config::{get_config, get_invitation_config};
use axum::extract::FromRef;
use core::fmt::Display;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

pub mod database;

pub struct Modules {
    pub app: ApplicationSettings,
    pool: PgPool,
    invitation: Arc<InvitationConfig>,
    environment: Environment,
}

impl Modules {
    pub async fn load_from_settings() -> Self {
        let settings = get_config()
            .map_err(|e| error!("Failed to load settings {e:#?}"))
            .unwrap();
        info!("Settings loaded");
        let invitation = get_invitation_config()
            .map_err(|e| error!("Failed to load invitation content {e:#?}"))
            .unwrap();
        info!("Invitation content loaded");
        let pool = get_postgres_pool(settings.postgres).await;
        info!("Modules loaded");
        Self {
            pool,
            invitation: Arc::new(invitation),
            app: settings.app,
            environment: settings.environment,
        }
    }

    pub fn use_custom(
        pool: PgPool,
        addr: SocketAddr,
        origin: String,
        environment: Environment,
    ) -> Self {
        let invitation = get_invitation_config().expect("Embedded invitation content is invalid");
        Self {
            pool,
            invitation: Arc::new(invitation),
            app: ApplicationSettings::new(addr, origin),
            environment,
        }
    }

    pub fn state(&self) -> AppState {
        AppState::new(self)
    }
}

#[derive(Clone, FromRef)]
pub struct AppState {
    pub environment: Environment,
    pub pool: PgPool,
    pub invitation: Arc<InvitationConfig>,
}

impl AppState {
    fn new(modules: &Modules) -> Self {
        Self {
            environment: modules.environment.clone(),
            pool: modules.pool.clone(),
            invitation: modules.invitation.clone(),
        }
    }
}

impl Display for AppState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "postgres pool, invitation content")
    }
}
