use axum::{extract::State, Json};
use marketplace_database::{Database, SellerProfile, Session};
use marketplace_models::v0;
use marketplace_result::Result;

/// Submit a step form
///
/// Saves the section and marks the step complete, or only saves a draft
/// when `auto_save` is set.
#[utoipa::path(
    post,
    path = "/onboarding/steps",
    tag = "Onboarding",
    security(("Session Token" = [])),
    request_body = v0::DataSubmitStep,
    responses(
        (status = 200, description = "Updated seller profile", body = v0::SellerProfile),
        (status = 400, description = "Invalid step form", body = marketplace_result::Error),
        (status = 401, description = "Not authenticated", body = marketplace_result::Error),
        (status = 500, description = "Failed to update progress", body = marketplace_result::Error),
    )
)]
pub async fn submit_step(
    session: Session,
    State(db): State<Database>,
    Json(data): Json<v0::DataSubmitStep>,
) -> Result<Json<v0::SellerProfile>> {
    SellerProfile::commit_step(&db, &session.user_id, data.payload, data.auto_save)
        .await
        .map(Json)
}
