use marketplace_models::v0::{Step, StepPayload};
use marketplace_result::Result;

use crate::ReferenceDb;
use crate::SellerProfile;

use super::AbstractSellerProfiles;

static COL: &str = "seller_profiles";

#[async_trait]
impl AbstractSellerProfiles for ReferenceDb {
    /// Fetch the seller profile of a user
    async fn fetch_seller_profile(&self, user_id: &str) -> Result<SellerProfile> {
        let profiles = self.seller_profiles.lock().await;
        profiles
            .get(user_id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch profiles with progress advances still pending
    async fn fetch_profiles_pending_progress(
        &self,
        after: Option<&str>,
        limit: usize,
    ) -> Result<Vec<SellerProfile>> {
        let profiles = self.seller_profiles.lock().await;
        let mut pending: Vec<SellerProfile> = profiles
            .values()
            .filter(|profile| !profile.pending_progress.is_empty())
            .filter(|profile| after.map_or(true, |id| profile.id.as_str() > id))
            .cloned()
            .collect();

        pending.sort_by(|a, b| a.id.cmp(&b.id));
        pending.truncate(limit);
        Ok(pending)
    }

    /// Save the section of a step, creating the profile if missing
    async fn save_profile_section(
        &self,
        user_id: &str,
        payload: &StepPayload,
        mark_pending: bool,
    ) -> Result<()> {
        self.ensure_writable(COL, user_id).await?;

        let mut profiles = self.seller_profiles.lock().await;
        let profile = profiles
            .entry(user_id.to_string())
            .or_insert_with(|| SellerProfile::new(user_id.to_string()));

        profile.apply_section(payload.clone());
        if mark_pending {
            profile.pending_progress.insert(payload.step());
        }

        Ok(())
    }

    /// Remove a step from the pending progress markers
    async fn clear_pending_progress(&self, user_id: &str, step: Step) -> Result<()> {
        self.ensure_writable(COL, user_id).await?;

        let mut profiles = self.seller_profiles.lock().await;
        if let Some(profile) = profiles.get_mut(user_id) {
            profile.pending_progress.remove(&step);
        }

        Ok(())
    }
}
