use std::collections::BTreeSet;

use marketplace_models::v0::Step;
use marketplace_result::Result;

use crate::Database;

auto_derived!(
    /// Onboarding progress of a single user
    pub struct ProgressRecord {
        /// Id of the user
        #[serde(rename = "_id")]
        pub id: String,
        /// Steps the user has submitted
        #[serde(default)]
        pub completed_steps: BTreeSet<Step>,
        /// Step the user should resume on
        pub current_step: Step,
    }
);

impl ProgressRecord {
    /// Progress of a user that has not submitted anything yet
    pub fn new(id: String) -> ProgressRecord {
        ProgressRecord {
            id,
            completed_steps: BTreeSet::new(),
            current_step: Step::first(),
        }
    }

    /// Fetch progress of a user, creating it on first access
    pub async fn get_or_create(db: &Database, user_id: &str) -> Result<ProgressRecord> {
        db.fetch_or_create_progress(user_id).await
    }

    /// Record a submitted step and move the user on to the following one
    ///
    /// Completing the last step leaves the user on it. Persistence failures
    /// are logged and reported as [`ProgressUpdateFailed`], callers retry
    /// the whole submission.
    ///
    /// [`ProgressUpdateFailed`]: marketplace_result::ErrorType::ProgressUpdateFailed
    pub async fn mark_step_complete(
        db: &Database,
        user_id: &str,
        step: Step,
    ) -> Result<ProgressRecord> {
        let current_step = step.next().unwrap_or(step);

        db.complete_progress_step(user_id, step, current_step)
            .await
            .map_err(|error| {
                error!("Failed to mark step `{step}` complete for {user_id}: {error:?}");
                create_error!(ProgressUpdateFailed)
            })
    }

    /// Whether the given step was submitted
    pub fn is_completed(&self, step: Step) -> bool {
        self.completed_steps.contains(&step)
    }

    /// Whether every step was submitted
    pub fn is_finished(&self) -> bool {
        self.is_completed(Step::last())
    }
}
