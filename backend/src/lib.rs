pub mod store;
pub mod routes;
pub mod assets;
pub mod config;
pub mod cors;
pub mod error;
pub mod utils;
pub mod catchers;
pub use shared::{models::*, error::*, voter::*};

use rocket::{catchers, fairing::AdHoc, figment::Figment, routes, Build, Rocket};
use tracing::info;
use crate::{
    catchers::{bad_request, internal_error, not_found},
    config::AppConfig,
    cors::CORS,
    routes::MethodNotAllowed,
    store::PollStore,
};

/// Seeds the demo poll shown on a fresh instance.
pub fn seed_demo_poll(store: &PollStore) -> Poll {
    let poll = store.seed_poll(
        "What's your favorite programming language?",
        &[
            ("JavaScript", 12),
            ("Python", 18),
            ("Go", 25),
            ("Rust", 8),
            ("TypeScript", 15),
            ("Java", 10),
        ],
    );
    info!("Seeded default poll: {}", poll.id);
    poll
}

/// Assembles the server around a fresh store. The store is created here,
/// once per server, and handed to every route through Rocket's managed state.
pub fn build_rocket(figment: Figment) -> Rocket<Build> {
    let app_config: AppConfig = match figment.extract() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid application config, using defaults: {}", e);
            AppConfig::default()
        }
    };

    let store = PollStore::new();
    if app_config.seed_demo_poll {
        seed_demo_poll(&store);
    }

    rocket::custom(figment)
        .attach(CORS)
        .attach(AdHoc::on_liftoff("Startup log", |rocket| Box::pin(async move {
            let polls = rocket.state::<PollStore>().map(PollStore::len).unwrap_or(0);
            info!("Poll API running on {}:{} with {} poll(s)", rocket.config().address, rocket.config().port, polls);
        })))
        .manage(store)
        .manage(app_config)
        .mount(
            "/api",
            routes![
                routes::health,
                routes::create_poll,
                routes::list_polls,
                routes::get_poll,
                routes::cast_vote,
                routes::get_results,
                routes::close_poll,
            ],
        )
        .mount("/api", MethodNotAllowed)
        .mount("/", routes![routes::all_options, assets::spa_handler])
        .register(
            "/",
            catchers![
                bad_request,
                internal_error,
                not_found
            ],
        )
}
