use once_cell::sync::Lazy;
use regex::Regex;

#[cfg(feature = "validator")]
use validator::{Validate, ValidationError};

use super::{OnboardingProgress, Step};

/// Regex for phone numbers
///
/// Digits with optional leading plus, spaces, dashes and brackets
pub static RE_PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9 ()-]{6,20}$").unwrap());

/// Regex for postal codes
pub static RE_POSTAL_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9 -]{3,10}$").unwrap());

/// Regex for bank account numbers
pub static RE_ACCOUNT_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{6,18}$").unwrap());

auto_derived!(
    /// # Business Details
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct BusinessDetails {
        /// Registered name of the business
        #[cfg_attr(feature = "validator", validate(length(min = 2, max = 128)))]
        pub business_name: String,
        /// Kind of business (sole proprietor, partnership, ...)
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 64)))]
        pub business_type: String,
        /// Government registration or tax number
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 64)))]
        pub registration_number: Option<String>,
        /// Short description shown on the storefront
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        #[cfg_attr(feature = "validator", validate(length(max = 2000)))]
        pub description: Option<String>,
    }

    /// # Contact Details
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct ContactDetails {
        /// Person buyers and staff should reach
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 128)))]
        pub contact_name: String,
        /// Contact email address
        #[cfg_attr(feature = "validator", validate(email))]
        pub email: String,
        /// Contact phone number
        #[cfg_attr(feature = "validator", validate(regex = "RE_PHONE"))]
        pub phone: String,
    }

    /// # Category Selection
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct CategorySelection {
        /// Catalog categories the seller will list products in
        #[cfg_attr(
            feature = "validator",
            validate(length(min = 1, max = 10), custom = "validate_categories")
        )]
        pub categories: Vec<String>,
    }

    /// # Address
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct Address {
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 256)))]
        pub line1: String,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        #[cfg_attr(feature = "validator", validate(length(max = 256)))]
        pub line2: Option<String>,
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 128)))]
        pub city: String,
        /// State, province or region
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 128)))]
        pub region: String,
        #[cfg_attr(feature = "validator", validate(regex = "RE_POSTAL_CODE"))]
        pub postal_code: String,
        /// ISO 3166-1 alpha-2 country code
        #[cfg_attr(feature = "validator", validate(length(equal = 2)))]
        pub country: String,
    }

    /// # Address Book
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct AddressBook {
        /// Where orders are picked up from
        #[cfg_attr(feature = "validator", validate)]
        pub pickup: Address,
        /// Where returns are sent, defaults to the pickup address
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        #[cfg_attr(feature = "validator", validate)]
        pub return_address: Option<Address>,
    }

    /// # Bank Details
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct BankDetails {
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 128)))]
        pub account_holder: String,
        #[cfg_attr(feature = "validator", validate(regex = "RE_ACCOUNT_NUMBER"))]
        pub account_number: String,
        /// Branch routing code (IFSC, sort code, routing number)
        #[cfg_attr(feature = "validator", validate(length(min = 4, max = 16)))]
        pub routing_code: String,
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 128)))]
        pub bank_name: String,
    }

    /// # Document Kind
    #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
    pub enum DocumentKind {
        Identity,
        TaxRegistration,
        BusinessLicense,
        BankStatement,
        Other,
    }

    /// # Document Reference
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DocumentReference {
        /// What this document proves
        pub kind: DocumentKind,
        /// Id of the uploaded file
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 128)))]
        pub file_id: String,
    }

    /// # Document Set
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DocumentSet {
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 10)))]
        #[cfg_attr(feature = "validator", validate)]
        pub documents: Vec<DocumentReference>,
    }

    /// # Step Payload
    ///
    /// Form data for exactly one onboarding step
    #[cfg_attr(
        feature = "serde",
        serde(tag = "step", content = "data", rename_all = "lowercase")
    )]
    pub enum StepPayload {
        Business(BusinessDetails),
        Contact(ContactDetails),
        Category(CategorySelection),
        Addresses(AddressBook),
        Bank(BankDetails),
        Documents(DocumentSet),
    }

    /// # Seller Profile
    ///
    /// Every saved step section alongside onboarding progress
    pub struct SellerProfile {
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub business: Option<BusinessDetails>,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub contact: Option<ContactDetails>,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub category: Option<CategorySelection>,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub addresses: Option<AddressBook>,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub bank: Option<BankDetails>,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub documents: Option<DocumentSet>,
        /// Onboarding progress
        pub progress: OnboardingProgress,
    }
);

#[cfg(feature = "validator")]
fn validate_categories(categories: &[String]) -> Result<(), ValidationError> {
    if categories
        .iter()
        .all(|category| !category.trim().is_empty() && category.len() <= 64)
    {
        Ok(())
    } else {
        Err(ValidationError::new("category_name"))
    }
}

impl StepPayload {
    /// Step this payload is submitted for
    pub fn step(&self) -> Step {
        match self {
            StepPayload::Business(_) => Step::Business,
            StepPayload::Contact(_) => Step::Contact,
            StepPayload::Category(_) => Step::Category,
            StepPayload::Addresses(_) => Step::Addresses,
            StepPayload::Bank(_) => Step::Bank,
            StepPayload::Documents(_) => Step::Documents,
        }
    }
}

#[cfg(feature = "validator")]
impl Validate for StepPayload {
    fn validate(&self) -> Result<(), validator::ValidationErrors> {
        match self {
            StepPayload::Business(data) => data.validate(),
            StepPayload::Contact(data) => data.validate(),
            StepPayload::Category(data) => data.validate(),
            StepPayload::Addresses(data) => data.validate(),
            StepPayload::Bank(data) => data.validate(),
            StepPayload::Documents(data) => data.validate(),
        }
    }
}

impl SellerProfile {
    /// Saved payload for a step, if any
    pub fn section(&self, step: Step) -> Option<StepPayload> {
        match step {
            Step::Business => self.business.clone().map(StepPayload::Business),
            Step::Contact => self.contact.clone().map(StepPayload::Contact),
            Step::Category => self.category.clone().map(StepPayload::Category),
            Step::Addresses => self.addresses.clone().map(StepPayload::Addresses),
            Step::Bank => self.bank.clone().map(StepPayload::Bank),
            Step::Documents => self.documents.clone().map(StepPayload::Documents),
        }
    }
}
