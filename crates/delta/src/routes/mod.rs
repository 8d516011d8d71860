use axum::routing::{get, post, Router};

use crate::AppState;

pub mod onboard;
pub mod root;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::root))
        .route("/onboarding/progress", get(onboard::progress::fetch_progress))
        .route("/onboarding/profile", get(onboard::profile::fetch_profile))
        .route("/onboarding/steps", post(onboard::submit::submit_step))
}

#[cfg(test)]
pub mod test {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, Response},
        Router,
    };
    use marketplace_database::{Database, ReferenceDb, Session};
    use serde_json::Value;
    use tower::ServiceExt;

    /// Router over a fresh in-memory database with one signed in seller
    pub async fn harness() -> (Router, Database, Session) {
        let db = Database::Reference(ReferenceDb::default());
        let session = Session::create(&db, "seller".to_string(), "Test".to_string())
            .await
            .unwrap();

        (crate::app(db.clone()), db, session)
    }

    pub async fn send(app: &Router, request: Request<Body>) -> (Response<Body>, Value) {
        let mut response = app.clone().oneshot(request).await.unwrap();
        let body = std::mem::take(response.body_mut());
        let bytes = to_bytes(body, usize::MAX).await.unwrap();

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (response, value)
    }
}
