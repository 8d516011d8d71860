use std::collections::BTreeSet;

use marketplace_models::v0::{
    self, AddressBook, BankDetails, BusinessDetails, CategorySelection, ContactDetails,
    DocumentSet, Step, StepPayload,
};
use marketplace_result::{ErrorType, Result};
use validator::Validate;

use crate::{Database, ProgressRecord};

auto_derived!(
    /// Seller profile, one section per onboarding step
    pub struct SellerProfile {
        /// Id of the user
        #[serde(rename = "_id")]
        pub id: String,

        #[serde(skip_serializing_if = "Option::is_none", default)]
        pub business: Option<BusinessDetails>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        pub contact: Option<ContactDetails>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        pub category: Option<CategorySelection>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        pub addresses: Option<AddressBook>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        pub bank: Option<BankDetails>,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        pub documents: Option<DocumentSet>,

        /// Steps whose payload was saved but whose progress advance
        /// has not been confirmed yet
        #[serde(skip_serializing_if = "BTreeSet::is_empty", default)]
        pub pending_progress: BTreeSet<Step>,
    }
);

impl SellerProfile {
    /// Empty profile of a user
    pub fn new(id: String) -> SellerProfile {
        SellerProfile {
            id,
            business: None,
            contact: None,
            category: None,
            addresses: None,
            bank: None,
            documents: None,
            pending_progress: BTreeSet::new(),
        }
    }

    /// Replace the section a payload belongs to
    pub fn apply_section(&mut self, payload: StepPayload) {
        match payload {
            StepPayload::Business(data) => self.business = Some(data),
            StepPayload::Contact(data) => self.contact = Some(data),
            StepPayload::Category(data) => self.category = Some(data),
            StepPayload::Addresses(data) => self.addresses = Some(data),
            StepPayload::Bank(data) => self.bank = Some(data),
            StepPayload::Documents(data) => self.documents = Some(data),
        }
    }

    /// Fetch the profile of a user, empty if nothing was saved yet
    pub async fn fetch_or_default(db: &Database, user_id: &str) -> Result<SellerProfile> {
        match db.fetch_seller_profile(user_id).await {
            Ok(profile) => Ok(profile),
            Err(error) if error.error_type == ErrorType::NotFound => {
                Ok(SellerProfile::new(user_id.to_string()))
            }
            Err(error) => Err(error),
        }
    }

    /// Save a step form and advance onboarding progress
    ///
    /// The payload and a pending marker for its step are written together,
    /// then progress is advanced and the marker cleared. If the advance
    /// fails the marker stays behind for [`SellerProfile::reconcile_pending`]
    /// and the caller receives `ProgressUpdateFailed`.
    ///
    /// Auto-saves only store the payload.
    pub async fn commit_step(
        db: &Database,
        user_id: &str,
        payload: StepPayload,
        auto_save: bool,
    ) -> Result<v0::SellerProfile> {
        payload.validate().map_err(|error| {
            create_error!(FailedValidation {
                error: error.to_string()
            })
        })?;

        let step = payload.step();
        db.save_profile_section(user_id, &payload, !auto_save).await?;

        if auto_save {
            debug!("Saved draft of `{step}` for {user_id}.");
            return SellerProfile::fetch_view(db, user_id).await;
        }

        ProgressRecord::mark_step_complete(db, user_id, step).await?;

        if let Err(error) = db.clear_pending_progress(user_id, step).await {
            // Progress already moved on, reconciling again is harmless
            warn!("Failed to clear pending `{step}` for {user_id}: {error:?}");
        }

        SellerProfile::fetch_view(db, user_id).await
    }

    /// Apply every pending progress advance of this profile
    ///
    /// Returns the progress after the last applied step, `None` if
    /// nothing was pending.
    pub async fn reconcile(&self, db: &Database) -> Result<Option<ProgressRecord>> {
        let mut progress = None;

        for &step in &self.pending_progress {
            progress = Some(ProgressRecord::mark_step_complete(db, &self.id, step).await?);
            db.clear_pending_progress(&self.id, step).await?;

            info!("Reconciled pending `{step}` for {}.", self.id);
        }

        Ok(progress)
    }

    /// Apply pending progress advances across all profiles
    ///
    /// Profiles are walked in pages of `batch_size` so ones that keep
    /// failing do not hold back the rest. Returns how many profiles were
    /// reconciled; failures are logged and left for the next pass.
    pub async fn reconcile_pending(db: &Database, batch_size: usize) -> Result<usize> {
        let mut reconciled = 0;
        let mut after: Option<String> = None;

        loop {
            let profiles = db
                .fetch_profiles_pending_progress(after.as_deref(), batch_size)
                .await?;

            let Some(last) = profiles.last() else {
                break;
            };

            after = Some(last.id.clone());
            let exhausted = profiles.len() < batch_size;

            for profile in profiles {
                match profile.reconcile(db).await {
                    Ok(_) => reconciled += 1,
                    Err(error) => warn!("Failed to reconcile profile {}: {error:?}", profile.id),
                }
            }

            if exhausted {
                break;
            }
        }

        Ok(reconciled)
    }

    /// Fetch every saved section and progress of a user
    ///
    /// A pending progress advance is applied first so the view never
    /// lags behind saved payloads.
    pub async fn fetch_view(db: &Database, user_id: &str) -> Result<v0::SellerProfile> {
        let profile = SellerProfile::fetch_or_default(db, user_id).await?;

        let progress = match profile.reconcile(db).await {
            Ok(Some(progress)) => progress,
            Ok(None) => ProgressRecord::get_or_create(db, user_id).await?,
            Err(error) => {
                warn!("Pending progress for {user_id} is still unreconciled: {error:?}");
                ProgressRecord::get_or_create(db, user_id).await?
            }
        };

        Ok(profile.into_view(progress))
    }
}
