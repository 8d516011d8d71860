mod admin_migrations;
mod onboarding_progress;
mod seller_profiles;
mod sessions;

pub use admin_migrations::*;
pub use onboarding_progress::*;
pub use seller_profiles::*;
pub use sessions::*;

#[cfg(feature = "mongodb")]
use crate::MongoDb;
use crate::{Database, ReferenceDb};

pub trait AbstractDatabase:
    Sync
    + Send
    + admin_migrations::AbstractMigrations
    + onboarding_progress::AbstractOnboardingProgress
    + seller_profiles::AbstractSellerProfiles
    + sessions::AbstractSessions
{
}

impl AbstractDatabase for ReferenceDb {}
#[cfg(feature = "mongodb")]
impl AbstractDatabase for MongoDb {}

impl std::ops::Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match &self {
            Database::Reference(dummy) => dummy,
            #[cfg(feature = "mongodb")]
            Database::MongoDb(mongo) => mongo,
        }
    }
}
