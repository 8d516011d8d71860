use marketplace_models::v0::Step;
use marketplace_result::Result;

use crate::ProgressRecord;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractOnboardingProgress: Sync + Send {
    /// Fetch onboarding progress of a user
    async fn fetch_progress(&self, user_id: &str) -> Result<ProgressRecord>;

    /// Fetch onboarding progress of a user, creating it on the first step if missing
    async fn fetch_or_create_progress(&self, user_id: &str) -> Result<ProgressRecord>;

    /// Add a step to the completed set and move the user to `current_step`,
    /// creating the record if missing
    async fn complete_progress_step(
        &self,
        user_id: &str,
        step: Step,
        current_step: Step,
    ) -> Result<ProgressRecord>;
}
