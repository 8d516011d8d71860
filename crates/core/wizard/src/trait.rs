use marketplace_models::v0::{DataSubmitStep, OnboardingProgress, SellerProfile};
use marketplace_result::Result;

#[async_trait]
pub trait OnboardingClient: Send {
    /// Fetch the authoritative onboarding progress
    async fn fetch_progress(&mut self) -> Result<OnboardingProgress>;

    /// Fetch every saved section along with progress
    async fn fetch_profile(&mut self) -> Result<SellerProfile>;

    /// Submit a step form
    async fn submit_step(&mut self, data: DataSubmitStep) -> Result<SellerProfile>;
}
