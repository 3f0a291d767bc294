use crate::config::{get_env, try_get_env};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use tracing::info;

pub const NAME_POSTGRES: &str = "DATABASE_URL";

#[derive(Deserialize, Clone)]
pub struct DatabaseFieldsModel {
    username: Option<String>,
    password: Option<String>,
    port: Option<u16>,
    host: Option<String>,
    database_name: Option<String>,
}

impl DatabaseFieldsModel {
    fn to_fields(self) -> DatabaseFields {
        DatabaseFields {
            username: self.username.unwrap_or("postgres".to_string()),
            password: Secret::new(self.password.unwrap_or("".to_string())),
            port: self.port.unwrap_or(5432),
            host: self.host.unwrap_or("localhost".to_string()),
            database_name: self.database_name.unwrap_or("boda".to_string()),
        }
    }
}

#[derive(Deserialize, Clone)]
pub struct DatabaseFields {
    username: String,
    password: Secret<String>,
    port: u16,
    host: String,
    database_name: String,
}

impl DatabaseFields {
    fn compose(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username,
            self.password.expose_secret(),
            self.host,
            self.port,
            self.database_name
        )
    }
}

#[derive(Deserialize, Clone)]
pub struct PostgresSettingsModel {
    database_url: Option<String>,
    fields: Option<DatabaseFieldsModel>,
    is_migrating: Option<bool>,
}

impl PostgresSettingsModel {
    /// Connection info precedence: composed fields, then the `database_url`
    /// setting, then the `DATABASE_URL` environment variable.
    pub fn to_settings(self) -> PostgresSettings {
        let database_url = if let Some(fields_model) = self.fields {
            info!("Using composed postgres url");
            fields_model.to_fields().compose()
        } else if let Some(url) = self.database_url {
            info!("Using postgres url from settings");
            url
        } else {
            info!("Using postgres url from env");
            try_get_env(NAME_POSTGRES).expect("No connection info provided")
        };

        PostgresSettings {
            database_url,
            is_migrating: self.is_migrating.unwrap_or(false),
        }
    }
}

#[derive(Deserialize, Clone)]
pub struct PostgresSettings {
    pub database_url: String,
    pub is_migrating: bool,
}

impl PostgresSettings {
    pub fn from_env() -> Self {
        Self {
            database_url: get_env(NAME_POSTGRES),
            is_migrating: true,
        }
    }
}

impl Default for PostgresSettings {
    fn default() -> Self {
        Self {
            database_url: get_env(NAME_POSTGRES),
            is_migrating: false,
        }
    }
}
