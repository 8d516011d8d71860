use ::mongodb::bson::doc;
use marketplace_models::v0::Step;
use marketplace_result::Result;

use crate::MongoDb;
use crate::ProgressRecord;

use super::AbstractOnboardingProgress;

static COL: &str = "onboarding_progress";

#[async_trait]
impl AbstractOnboardingProgress for MongoDb {
    /// Fetch onboarding progress of a user
    async fn fetch_progress(&self, user_id: &str) -> Result<ProgressRecord> {
        query!(self, find_one_by_id, COL, user_id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch onboarding progress of a user, creating it on the first step if missing
    async fn fetch_or_create_progress(&self, user_id: &str) -> Result<ProgressRecord> {
        query!(
            self,
            upsert_one_by_id,
            COL,
            user_id,
            doc! {
                "$setOnInsert": {
                    "completed_steps": [],
                    "current_step": Step::first().as_str(),
                }
            }
        )?
        .ok_or_else(|| create_database_error!("upsert_one_by_id", COL))
    }

    /// Add a step to the completed set and move the user to `current_step`,
    /// creating the record if missing
    async fn complete_progress_step(
        &self,
        user_id: &str,
        step: Step,
        current_step: Step,
    ) -> Result<ProgressRecord> {
        query!(
            self,
            upsert_one_by_id,
            COL,
            user_id,
            doc! {
                "$addToSet": {
                    "completed_steps": step.as_str(),
                },
                "$set": {
                    "current_step": current_step.as_str(),
                }
            }
        )?
        .ok_or_else(|| create_database_error!("upsert_one_by_id", COL))
    }
}
