#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

#[cfg(feature = "axum")]
pub mod axum;

/// Result type with custom Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error information
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[derive(Debug, Clone)]
pub struct Error {
    /// Type of error and additional information
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub error_type: ErrorType,

    /// Where this error occurred
    pub location: String,
}

/// Possible error types
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    /// This error was not labeled :(
    LabelMe,

    // ? Onboarding related errors
    ProgressUpdateFailed,

    // ? Session related errors
    NotAuthenticated,

    // ? General errors
    DatabaseError {
        operation: String,
        collection: String,
    },
    InternalError,
    InvalidOperation,
    NotFound,
    FailedValidation {
        error: String,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error_type {
            ErrorType::ProgressUpdateFailed => write!(f, "failed to update progress"),
            ErrorType::NotAuthenticated => write!(f, "not authenticated"),
            ErrorType::DatabaseError {
                operation,
                collection,
            } => write!(f, "database error during {operation} on {collection}"),
            ErrorType::FailedValidation { error } => write!(f, "validation failed: {error}"),
            other => write!(f, "{other:?}"),
        }?;

        write!(f, " ({})", self.location)
    }
}

impl std::error::Error for Error {}

#[macro_export]
macro_rules! create_error {
    ( $error: ident $( $tt:tt )? ) => {
        $crate::Error {
            error_type: $crate::ErrorType::$error $( $tt )?,
            location: format!("{}:{}:{}", file!(), line!(), column!()),
        }
    };
}

#[macro_export]
macro_rules! create_database_error {
    ( $operation: expr, $collection: expr ) => {
        $crate::create_error!(DatabaseError {
            operation: $operation.to_string(),
            collection: $collection.to_string()
        })
    };
}

#[macro_export]
macro_rules! query {
    ( $self: ident, $type: ident, $collection: expr, $($rest:expr),+ ) => {
        $self.$type($collection, $($rest),+).await
            .map_err(|_| $crate::create_database_error!(stringify!($type), $collection))
    };
}

#[cfg(test)]
mod tests {
    use crate::ErrorType;

    #[test]
    fn use_macro_to_construct_error() {
        let error = create_error!(LabelMe);
        assert!(matches!(error.error_type, ErrorType::LabelMe));
        assert!(error.location.contains("lib.rs"));
    }

    #[test]
    fn use_macro_to_construct_complex_error() {
        let error = create_database_error!("find_one", "onboarding_progress");
        assert_eq!(
            error.error_type,
            ErrorType::DatabaseError {
                operation: "find_one".to_string(),
                collection: "onboarding_progress".to_string()
            }
        );
    }

    #[test]
    fn progress_failure_reads_as_generic_message() {
        let error = create_error!(ProgressUpdateFailed);
        assert!(error.to_string().starts_with("failed to update progress"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialises_with_type_tag() {
        let error = create_error!(FailedValidation {
            error: "email: invalid".to_string()
        });

        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["type"], "FailedValidation");
        assert_eq!(value["error"], "email: invalid");
        assert!(value["location"].is_string());
    }
}
