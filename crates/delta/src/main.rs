use axum::{extract::FromRef, routing::get, Json, Router};

use marketplace_config::config;
use marketplace_database::{Database, DatabaseInfo};
use tokio::net::TcpListener;
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_scalar::{Scalar, Servable as ScalarServable};

mod routes;

#[derive(Clone)]
pub struct AppState {
    pub database: Database,
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.database.clone()
    }
}

struct TokenAddon;

impl Modify for TokenAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();

        components.add_security_scheme(
            "Session Token",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(
                "X-Session-Token".to_string(),
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&TokenAddon),
    paths(
        routes::root::root,
        routes::onboard::progress::fetch_progress,
        routes::onboard::profile::fetch_profile,
        routes::onboard::submit::submit_step,
    ),
    tags(
        (name = "Misc", description = "Misc routes for the service."),
        (name = "Onboarding", description = "Seller onboarding steps and progress.")
    ),
    components(
        schemas(
            marketplace_result::Error,
            marketplace_result::ErrorType,
        )
    ),
)]
struct ApiDoc;

/// Build the router serving the API on top of a database
pub fn app(database: Database) -> Router {
    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .merge(routes::router())
        .with_state(AppState { database })
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        marketplace_config::capture_error(&error);
    }

    log::info!("Shutting down.");
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Configure logging and environment
    marketplace_config::configure!(api);

    let database = DatabaseInfo::Auto
        .connect()
        .await
        .expect("Unable to connect to database");

    if let Err(error) = database.migrate_database().await {
        marketplace_config::capture_error(&error);
        panic!("Unable to migrate database");
    }

    // Configure TCP listener and bind
    let listen = config().await.api.listen;
    log::info!("Listening on {listen}");
    log::info!("Play around with the API: http://{listen}/scalar");

    let listener = TcpListener::bind(&listen).await?;
    axum::serve(listener, app(database.clone()).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.shutdown().await;
    Ok(())
}
