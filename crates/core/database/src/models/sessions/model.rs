use marketplace_result::{ErrorType, Result};
use ulid::Ulid;

use crate::Database;

auto_derived!(
    /// Authenticated session of a user
    pub struct Session {
        /// Session Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the user this session belongs to
        pub user_id: String,
        /// Token sent by clients in `x-session-token`
        pub token: String,
        /// Display name of the session (device or browser)
        pub name: String,
    }
);

impl Session {
    /// Create a new session for a user
    pub async fn create(db: &Database, user_id: String, name: String) -> Result<Session> {
        let session = Session {
            id: Ulid::new().to_string(),
            user_id,
            token: nanoid::nanoid!(64),
            name,
        };

        db.insert_session(&session).await?;
        Ok(session)
    }

    /// Resolve the session behind a token
    ///
    /// A missing token or one that does not belong to any session is
    /// reported as `NotAuthenticated`.
    pub async fn authenticate(db: &Database, token: Option<&str>) -> Result<Session> {
        let Some(token) = token else {
            return Err(create_error!(NotAuthenticated));
        };

        db.fetch_session_by_token(token).await.map_err(|error| {
            if error.error_type == ErrorType::NotFound {
                create_error!(NotAuthenticated)
            } else {
                error
            }
        })
    }

    /// Delete this session
    pub async fn delete(&self, db: &Database) -> Result<()> {
        db.delete_session(&self.id).await
    }
}

#[cfg(test)]
mod tests {
    use marketplace_result::ErrorType;

    use crate::Session;

    #[tokio::test]
    async fn crud() {
        database_test!(|db| async move {
            let session = Session::create(&db, "seller".to_string(), "Firefox".to_string())
                .await
                .unwrap();

            assert_eq!(session.token.len(), 64);

            let fetched = db.fetch_session_by_token(&session.token).await.unwrap();
            assert_eq!(fetched, session);

            session.delete(&db).await.unwrap();
            assert!(db.fetch_session_by_token(&session.token).await.is_err());
        });
    }

    #[tokio::test]
    async fn authenticate_resolves_user() {
        database_test!(|db| async move {
            let session = Session::create(&db, "seller".to_string(), "Firefox".to_string())
                .await
                .unwrap();

            let current = Session::authenticate(&db, Some(&session.token))
                .await
                .unwrap();
            assert_eq!(current.user_id, "seller");

            for token in [None, Some("unknown")] {
                let error = Session::authenticate(&db, token).await.unwrap_err();
                assert_eq!(error.error_type, ErrorType::NotAuthenticated);
            }

            session.delete(&db).await.unwrap();
            let error = Session::authenticate(&db, Some(&session.token))
                .await
                .unwrap_err();
            assert_eq!(error.error_type, ErrorType::NotAuthenticated);
        });
    }
}
