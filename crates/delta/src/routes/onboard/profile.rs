use axum::{extract::State, Json};
use marketplace_database::{Database, SellerProfile, Session};
use marketplace_models::v0;
use marketplace_result::Result;

/// Fetch every saved onboarding section of the current user
#[utoipa::path(
    get,
    path = "/onboarding/profile",
    tag = "Onboarding",
    security(("Session Token" = [])),
    responses(
        (status = 200, description = "Seller profile with progress", body = v0::SellerProfile),
        (status = 401, description = "Not authenticated", body = marketplace_result::Error),
    )
)]
pub async fn fetch_profile(
    session: Session,
    State(db): State<Database>,
) -> Result<Json<v0::SellerProfile>> {
    SellerProfile::fetch_view(&db, &session.user_id)
        .await
        .map(Json)
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use marketplace_database::SellerProfile;
    use marketplace_models::v0::{CategorySelection, StepPayload};

    use crate::routes::test::{harness, send};

    #[tokio::test]
    async fn returns_saved_sections() {
        let (app, db, session) = harness().await;

        let request = || {
            Request::get("/onboarding/profile")
                .header("x-session-token", &session.token)
                .body(Body::empty())
                .unwrap()
        };

        let (response, body) = send(&app, request()).await;
        assert_eq!(response.status(), 200);
        assert!(body.get("category").is_none());
        assert_eq!(body["progress"]["current_step"], "business");

        SellerProfile::commit_step(
            &db,
            "seller",
            StepPayload::Category(CategorySelection {
                categories: vec!["Kitchen".to_string()],
            }),
            false,
        )
        .await
        .unwrap();

        let (_, body) = send(&app, request()).await;
        assert_eq!(body["category"]["categories"][0], "Kitchen");
        assert_eq!(body["progress"]["completed_steps"][0], "category");
        assert_eq!(body["progress"]["current_step"], "addresses");
    }
}
