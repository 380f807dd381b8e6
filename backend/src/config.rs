use std::path::PathBuf;
use rocket::figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment, Profile,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Application settings, read from the same figment as Rocket's own
/// (`Rocket.toml`, `ROCKET_*` environment variables).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory of a built frontend. The embedded landing page is served
    /// when it does not exist.
    pub static_dir: PathBuf,
    /// Seed a demo poll with preset votes at startup.
    pub seed_demo_poll: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            seed_demo_poll: true,
        }
    }
}

/// Rocket's own figment layout (`Rocket.toml`, then `ROCKET_*` variables)
/// over this service's defaults, with a bare `PORT` variable honored on top.
pub fn figment() -> Figment {
    let figment = Figment::from(rocket::Config::default())
        .merge(Serialized::defaults(AppConfig::default()))
        .merge(("address", DEFAULT_ADDRESS))
        .merge(("port", DEFAULT_PORT))
        .merge(Toml::file(Env::var_or("ROCKET_CONFIG", "Rocket.toml")).nested())
        .merge(Env::prefixed("ROCKET_").ignore(&["PROFILE"]).global())
        .select(Profile::from_env_or("ROCKET_PROFILE", rocket::Config::DEFAULT_PROFILE));

    match std::env::var("PORT") {
        Ok(port) => match port.parse::<u16>() {
            Ok(port) => figment.merge(("port", port)),
            Err(_) => {
                warn!("Ignoring invalid PORT value: {}", port);
                figment
            }
        },
        Err(_) => figment,
    }
}
