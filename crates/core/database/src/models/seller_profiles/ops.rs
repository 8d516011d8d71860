use marketplace_models::v0::{Step, StepPayload};
use marketplace_result::Result;

use crate::SellerProfile;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractSellerProfiles: Sync + Send {
    /// Fetch the seller profile of a user
    async fn fetch_seller_profile(&self, user_id: &str) -> Result<SellerProfile>;

    /// Fetch profiles with progress advances still pending
    ///
    /// Ordered by id, starting after the given id.
    async fn fetch_profiles_pending_progress(
        &self,
        after: Option<&str>,
        limit: usize,
    ) -> Result<Vec<SellerProfile>>;

    /// Save the section of a step, creating the profile if missing
    ///
    /// With `mark_pending` the step is added to the pending progress
    /// markers in the same write.
    async fn save_profile_section(
        &self,
        user_id: &str,
        payload: &StepPayload,
        mark_pending: bool,
    ) -> Result<()>;

    /// Remove a step from the pending progress markers
    async fn clear_pending_progress(&self, user_id: &str, step: Step) -> Result<()>;
}
