use marketplace_database::{Database, ReferenceDb};
use marketplace_models::v0::{
    Address, AddressBook, BankDetails, BusinessDetails, CategorySelection, ContactDetails,
    DataSubmitStep, DocumentKind, DocumentReference, DocumentSet, OnboardingProgress,
    SellerProfile, Step, StepPayload,
};
use marketplace_result::{ErrorType, Result};

use crate::{OnboardingClient, Wizard, WizardView};

/// Client talking straight to an in-memory database
struct Backend {
    db: Database,
    user_id: String,
    requests: usize,
    fail_next_submit: bool,
}

impl Backend {
    fn new() -> Backend {
        Backend {
            db: Database::Reference(ReferenceDb::default()),
            user_id: "seller".to_string(),
            requests: 0,
            fail_next_submit: false,
        }
    }
}

#[async_trait]
impl OnboardingClient for Backend {
    async fn fetch_progress(&mut self) -> Result<OnboardingProgress> {
        self.requests += 1;
        Ok(self.fetch_profile().await?.progress)
    }

    async fn fetch_profile(&mut self) -> Result<SellerProfile> {
        self.requests += 1;
        marketplace_database::SellerProfile::fetch_view(&self.db, &self.user_id).await
    }

    async fn submit_step(&mut self, data: DataSubmitStep) -> Result<SellerProfile> {
        self.requests += 1;

        if self.fail_next_submit {
            self.fail_next_submit = false;
            return Err(create_error!(ProgressUpdateFailed));
        }

        marketplace_database::SellerProfile::commit_step(
            &self.db,
            &self.user_id,
            data.payload,
            data.auto_save,
        )
        .await
    }
}

fn business() -> StepPayload {
    StepPayload::Business(BusinessDetails {
        business_name: "Acme Crafts".to_string(),
        business_type: "sole_proprietor".to_string(),
        registration_number: None,
        description: None,
    })
}

fn contact() -> StepPayload {
    StepPayload::Contact(ContactDetails {
        contact_name: "Asha Rao".to_string(),
        email: "asha@acme.example".to_string(),
        phone: "+91 98765 43210".to_string(),
    })
}

fn category() -> StepPayload {
    StepPayload::Category(CategorySelection {
        categories: vec!["Home".to_string()],
    })
}

fn addresses() -> StepPayload {
    StepPayload::Addresses(AddressBook {
        pickup: Address {
            line1: "12 Market Street".to_string(),
            line2: None,
            city: "Pune".to_string(),
            region: "Maharashtra".to_string(),
            postal_code: "411001".to_string(),
            country: "IN".to_string(),
        },
        return_address: None,
    })
}

fn bank() -> StepPayload {
    StepPayload::Bank(BankDetails {
        account_holder: "Asha Rao".to_string(),
        account_number: "001234567890".to_string(),
        routing_code: "HDFC0001234".to_string(),
        bank_name: "HDFC".to_string(),
    })
}

fn documents() -> StepPayload {
    StepPayload::Documents(DocumentSet {
        documents: vec![DocumentReference {
            kind: DocumentKind::TaxRegistration,
            file_id: "file_01".to_string(),
        }],
    })
}

#[tokio::test]
async fn new_seller_starts_on_first_step() {
    let wizard = Wizard::load(Backend::new()).await.unwrap();

    assert_eq!(wizard.view(), WizardView::Step(Step::Business));
    assert!(wizard.gate().is_enabled(Step::Business));
    assert!(!wizard.gate().is_enabled(Step::Contact));
    assert!(wizard.prefill().is_none());
}

#[tokio::test]
async fn submitting_advances_to_next_tab() {
    let mut wizard = Wizard::load(Backend::new()).await.unwrap();

    let view = wizard.submit(business()).await.unwrap();
    assert_eq!(view, WizardView::Step(Step::Contact));
    assert!(wizard.gate().is_completed(Step::Business));
    assert!(wizard.gate().is_enabled(Step::Contact));
    assert!(!wizard.gate().is_enabled(Step::Category));
    assert!(wizard.form().error().is_none());
    assert!(wizard.profile().business.is_some());
}

#[tokio::test]
async fn locked_tabs_cannot_be_selected() {
    let mut wizard = Wizard::load(Backend::new()).await.unwrap();

    let error = wizard.select(Step::Bank).await.unwrap_err();
    assert_eq!(error.error_type, ErrorType::InvalidOperation);
    assert_eq!(wizard.active(), Step::Business);
}

#[tokio::test]
async fn going_back_keeps_later_tabs_open() {
    let mut wizard = Wizard::load(Backend::new()).await.unwrap();
    wizard.submit(business()).await.unwrap();
    wizard.submit(contact()).await.unwrap();
    assert_eq!(wizard.active(), Step::Category);

    let view = wizard.select(Step::Business).await.unwrap();
    assert_eq!(view, WizardView::Step(Step::Business));
    assert_eq!(wizard.prefill(), Some(business()));

    // Category was reached but never submitted
    assert!(!wizard.gate().is_completed(Step::Category));
    assert!(wizard.gate().is_enabled(Step::Category));

    wizard.select(Step::Category).await.unwrap();
    assert_eq!(wizard.active(), Step::Category);
}

#[tokio::test]
async fn tab_click_refetches_progress() {
    let backend = Backend::new();
    let db = backend.db.clone();

    let mut wizard = Wizard::load(backend).await.unwrap();
    wizard.submit(business()).await.unwrap();

    // Progress moved on from another session
    marketplace_database::SellerProfile::commit_step(&db, "seller", contact(), false)
        .await
        .unwrap();
    assert!(!wizard.gate().is_completed(Step::Contact));

    wizard.select(Step::Business).await.unwrap();
    assert!(wizard.gate().is_completed(Step::Contact));
    assert!(wizard.gate().is_enabled(Step::Contact));
    assert_eq!(wizard.profile().progress.current_step, Step::Category);
}

#[tokio::test]
async fn invalid_form_never_reaches_backend() {
    let mut wizard = Wizard::load(Backend::new()).await.unwrap();

    let error = wizard
        .submit(StepPayload::Business(BusinessDetails {
            business_name: "A".to_string(),
            business_type: "sole_proprietor".to_string(),
            registration_number: None,
            description: None,
        }))
        .await
        .unwrap_err();

    assert!(matches!(
        error.error_type,
        ErrorType::FailedValidation { .. }
    ));
    assert!(wizard.form().error().is_some());
    assert!(!wizard.form().is_submitting());
    assert_eq!(wizard.into_client().requests, 1);
}

#[tokio::test]
async fn failed_submission_keeps_form_editable() {
    let mut backend = Backend::new();
    backend.fail_next_submit = true;

    let mut wizard = Wizard::load(backend).await.unwrap();
    let error = wizard.submit(business()).await.unwrap_err();

    assert_eq!(error.error_type, ErrorType::ProgressUpdateFailed);
    assert_eq!(error.to_string().split(" (").next(), Some("failed to update progress"));
    assert_eq!(wizard.active(), Step::Business);
    assert!(!wizard.gate().is_completed(Step::Business));
    assert!(wizard.form().error().is_some());

    // Retry goes through
    wizard.submit(business()).await.unwrap();
    assert!(wizard.form().error().is_none());
    assert_eq!(wizard.active(), Step::Contact);
}

#[tokio::test]
async fn auto_save_keeps_draft_without_advancing() {
    let mut wizard = Wizard::load(Backend::new()).await.unwrap();

    wizard.auto_save(business()).await.unwrap();
    assert_eq!(wizard.active(), Step::Business);
    assert!(!wizard.gate().is_completed(Step::Business));
    assert_eq!(wizard.prefill(), Some(business()));
}

#[tokio::test]
async fn finishing_documents_shows_success() {
    let mut wizard = Wizard::load(Backend::new()).await.unwrap();

    for payload in [business(), contact(), category(), addresses(), bank()] {
        wizard.submit(payload).await.unwrap();
    }

    assert_eq!(wizard.active(), Step::Documents);
    assert_eq!(wizard.view(), WizardView::Step(Step::Documents));

    let view = wizard.submit(documents()).await.unwrap();
    assert_eq!(view, WizardView::Success);
    assert!(wizard.gate().tabs().all(|(_, enabled)| enabled));

    // Revisiting an earlier step keeps onboarding finished
    wizard.select(Step::Bank).await.unwrap();
    wizard.submit(bank()).await.unwrap();
    assert_eq!(wizard.view(), WizardView::Success);
}

#[tokio::test]
async fn only_active_step_can_be_submitted() {
    let mut wizard = Wizard::load(Backend::new()).await.unwrap();

    let error = wizard.submit(bank()).await.unwrap_err();
    assert_eq!(error.error_type, ErrorType::InvalidOperation);
    assert!(wizard.auto_save(documents()).await.is_err());

    assert_eq!(wizard.active(), Step::Business);
    assert!(!wizard.form().is_submitting());
    assert!(wizard.form().error().is_none());
    assert!(!wizard.gate().is_completed(Step::Bank));
    assert!(!wizard.gate().is_enabled(Step::Bank));

    // Unlocked but inactive steps are refused too
    wizard.submit(business()).await.unwrap();
    wizard.select(Step::Business).await.unwrap();
    assert!(wizard.submit(contact()).await.is_err());

    let backend = wizard.into_client();
    assert!(backend.db.fetch_seller_profile("seller").await.unwrap().bank.is_none());
    assert!(!backend
        .db
        .fetch_progress("seller")
        .await
        .unwrap()
        .is_completed(Step::Contact));
}
