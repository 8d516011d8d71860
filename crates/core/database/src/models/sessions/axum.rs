use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use marketplace_result::{Error, Result};

use crate::{Database, Session};

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for Session
where
    Database: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Session> {
        let token = parts
            .headers
            .get("x-session-token")
            .and_then(|value| value.to_str().ok());

        Session::authenticate(&Database::from_ref(state), token).await
    }
}
