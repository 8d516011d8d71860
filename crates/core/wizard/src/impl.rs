use marketplace_models::v0::{DataSubmitStep, SellerProfile, Step, StepPayload};
use marketplace_result::Result;
use validator::Validate;

use crate::{FormState, OnboardingClient, StepGate, WizardView};

/// Seller onboarding wizard
///
/// Keeps the active tab, its form and the gate in sync with the backend.
pub struct Wizard<C> {
    client: C,
    gate: StepGate,
    profile: SellerProfile,
    active: Step,
    form: FormState,
}

impl<C: OnboardingClient> Wizard<C> {
    /// Load the profile and resume on the step the user left off at
    pub async fn load(mut client: C) -> Result<Wizard<C>> {
        let profile = client.fetch_profile().await?;
        let active = profile.progress.current_step;

        let mut gate = StepGate::new(profile.progress.clone());
        gate.visit(active);

        Ok(Wizard {
            client,
            gate,
            profile,
            active,
            form: FormState::default(),
        })
    }

    pub fn view(&self) -> WizardView {
        self.gate.view(self.active)
    }

    pub fn active(&self) -> Step {
        self.active
    }

    pub fn gate(&self) -> &StepGate {
        &self.gate
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn profile(&self) -> &SellerProfile {
        &self.profile
    }

    /// Saved payload to prefill the active form with
    pub fn prefill(&self) -> Option<StepPayload> {
        self.profile.section(self.active)
    }

    /// Switch to another tab
    ///
    /// Progress is refetched first so gating reflects the server. Locked
    /// tabs are refused and the active tab stays as it is.
    pub async fn select(&mut self, step: Step) -> Result<WizardView> {
        let progress = self.client.fetch_progress().await?;
        self.profile.progress = progress.clone();
        self.gate.reconcile(progress);

        if !self.gate.is_enabled(step) {
            debug!("Refusing to open locked step `{step}`.");
            return Err(create_error!(InvalidOperation));
        }

        self.gate.visit(step);
        self.active = step;
        self.form = FormState::default();

        Ok(self.view())
    }

    /// Submit the form of the active step and move on to the next one
    ///
    /// Payloads for any other step are refused. Invalid forms fail locally
    /// without a request. Any failure leaves the form editable with the
    /// error attached.
    pub async fn submit(&mut self, payload: StepPayload) -> Result<WizardView> {
        self.ensure_active(&payload)?;

        if !self.form.begin() {
            return Err(create_error!(InvalidOperation));
        }

        match self.try_submit(payload).await {
            Ok(view) => {
                self.form.succeed();
                Ok(view)
            }
            Err(error) => {
                self.form.fail(error.clone());
                Err(error)
            }
        }
    }

    async fn try_submit(&mut self, payload: StepPayload) -> Result<WizardView> {
        payload.validate().map_err(|error| {
            create_error!(FailedValidation {
                error: error.to_string()
            })
        })?;

        self.client
            .submit_step(DataSubmitStep {
                payload,
                auto_save: false,
            })
            .await?;

        self.refresh().await?;
        Ok(self.view())
    }

    /// Persist a draft of the active form
    ///
    /// Progress and form state are left untouched.
    pub async fn auto_save(&mut self, payload: StepPayload) -> Result<()> {
        self.ensure_active(&payload)?;

        payload.validate().map_err(|error| {
            create_error!(FailedValidation {
                error: error.to_string()
            })
        })?;

        let profile = self
            .client
            .submit_step(DataSubmitStep {
                payload,
                auto_save: true,
            })
            .await?;

        self.gate.reconcile(profile.progress.clone());
        self.profile = profile;
        Ok(())
    }

    /// Only the form of the active tab can be sent
    fn ensure_active(&self, payload: &StepPayload) -> Result<()> {
        let step = payload.step();
        if step == self.active {
            Ok(())
        } else {
            debug!("Refusing `{step}` form while `{}` is active.", self.active);
            Err(create_error!(InvalidOperation))
        }
    }

    /// Refetch the full profile and activate the step to resume on
    async fn refresh(&mut self) -> Result<()> {
        let profile = self.client.fetch_profile().await?;

        self.active = profile.progress.current_step;
        self.gate.reconcile(profile.progress.clone());
        self.gate.visit(self.active);
        self.profile = profile;
        Ok(())
    }

    /// Give back the underlying client
    pub fn into_client(self) -> C {
        self.client
    }
}
