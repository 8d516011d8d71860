use axum::{extract::State, Json};
use marketplace_database::{Database, ProgressRecord, Session};
use marketplace_models::v0;
use marketplace_result::Result;

/// Fetch onboarding progress of the current user, starting it if needed
#[utoipa::path(
    get,
    path = "/onboarding/progress",
    tag = "Onboarding",
    security(("Session Token" = [])),
    responses(
        (status = 200, description = "Onboarding progress", body = v0::OnboardingProgress),
        (status = 401, description = "Not authenticated", body = marketplace_result::Error),
    )
)]
pub async fn fetch_progress(
    session: Session,
    State(db): State<Database>,
) -> Result<Json<v0::OnboardingProgress>> {
    ProgressRecord::get_or_create(&db, &session.user_id)
        .await
        .map(Into::into)
        .map(Json)
}
