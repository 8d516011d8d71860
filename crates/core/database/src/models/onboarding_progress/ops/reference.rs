use marketplace_models::v0::Step;
use marketplace_result::Result;

use crate::ProgressRecord;
use crate::ReferenceDb;

use super::AbstractOnboardingProgress;

static COL: &str = "onboarding_progress";

#[async_trait]
impl AbstractOnboardingProgress for ReferenceDb {
    /// Fetch onboarding progress of a user
    async fn fetch_progress(&self, user_id: &str) -> Result<ProgressRecord> {
        let progress = self.onboarding_progress.lock().await;
        progress
            .get(user_id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch onboarding progress of a user, creating it on the first step if missing
    async fn fetch_or_create_progress(&self, user_id: &str) -> Result<ProgressRecord> {
        let mut progress = self.onboarding_progress.lock().await;
        if let Some(record) = progress.get(user_id) {
            return Ok(record.clone());
        }

        self.ensure_writable(COL, user_id).await?;
        let record = ProgressRecord::new(user_id.to_string());
        progress.insert(user_id.to_string(), record.clone());
        Ok(record)
    }

    /// Add a step to the completed set and move the user to `current_step`,
    /// creating the record if missing
    async fn complete_progress_step(
        &self,
        user_id: &str,
        step: Step,
        current_step: Step,
    ) -> Result<ProgressRecord> {
        self.ensure_writable(COL, user_id).await?;

        let mut progress = self.onboarding_progress.lock().await;
        let record = progress
            .entry(user_id.to_string())
            .or_insert_with(|| ProgressRecord::new(user_id.to_string()));

        record.completed_steps.insert(step);
        record.current_step = current_step;
        Ok(record.clone())
    }
}
