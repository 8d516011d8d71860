use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Capture crate version from Cargo
static CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize, ToSchema)]
pub struct RootResponse {
    onboarding: &'static str,
    version: &'static str,
}

/// Root response from service
#[utoipa::path(
    get,
    path = "/",
    tag = "Misc",
    responses(
        (status = 200, description = "Root response", body = RootResponse)
    )
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        onboarding: "Seller onboarding is open.",
        version: CRATE_VERSION,
    })
}
