use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::StepPayload;

/// # Onboarding Step
///
/// One named stage of seller onboarding.
///
/// Declaration order is the registry order; `Ord` follows it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Business,
    Contact,
    Category,
    Addresses,
    Bank,
    Documents,
}

impl Step {
    /// Every step, in the order a seller completes them
    pub const REGISTRY: [Step; 6] = [
        Step::Business,
        Step::Contact,
        Step::Category,
        Step::Addresses,
        Step::Bank,
        Step::Documents,
    ];

    /// Step every seller starts on
    pub fn first() -> Step {
        Step::REGISTRY[0]
    }

    /// Final step, completing it completes onboarding
    pub fn last() -> Step {
        Step::REGISTRY[Step::REGISTRY.len() - 1]
    }

    /// Position of this step in the registry
    pub fn index(self) -> usize {
        match self {
            Step::Business => 0,
            Step::Contact => 1,
            Step::Category => 2,
            Step::Addresses => 3,
            Step::Bank => 4,
            Step::Documents => 5,
        }
    }

    /// Step at the given registry position
    pub fn from_index(index: usize) -> Option<Step> {
        Step::REGISTRY.get(index).copied()
    }

    /// Step immediately following this one, `None` if this is the last step
    pub fn next(self) -> Option<Step> {
        Step::from_index(self.index() + 1)
    }

    /// Lowercase name used on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            Step::Business => "business",
            Step::Contact => "contact",
            Step::Category => "category",
            Step::Addresses => "addresses",
            Step::Bank => "bank",
            Step::Documents => "documents",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name that does not belong to the step registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStep(pub String);

impl fmt::Display for UnknownStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown onboarding step `{}`", self.0)
    }
}

impl std::error::Error for UnknownStep {}

impl FromStr for Step {
    type Err = UnknownStep;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Step::REGISTRY
            .into_iter()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| UnknownStep(s.to_string()))
    }
}

/// Step following the named step
///
/// Names outside the registry have no next step, same as the last step.
pub fn next_step(current: &str) -> Option<Step> {
    current.parse::<Step>().ok().and_then(Step::next)
}

auto_derived!(
    /// # Onboarding Progress
    pub struct OnboardingProgress {
        /// Id of the user this progress belongs to
        pub user_id: String,
        /// Steps the user has submitted
        pub completed_steps: BTreeSet<Step>,
        /// Step the user should resume on
        pub current_step: Step,
    }

    /// # Step Submission
    pub struct DataSubmitStep {
        /// Form payload, tagged with the step it belongs to
        pub payload: StepPayload,
        /// Persist a draft without advancing progress
        #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "crate::if_false"))]
        pub auto_save: bool,
    }
);

impl OnboardingProgress {
    /// Fresh progress for a user that has not started onboarding
    pub fn new(user_id: String) -> Self {
        OnboardingProgress {
            user_id,
            completed_steps: BTreeSet::new(),
            current_step: Step::first(),
        }
    }

    /// Whether the given step was submitted
    pub fn is_completed(&self, step: Step) -> bool {
        self.completed_steps.contains(&step)
    }

    /// Whether the final step was submitted
    pub fn is_finished(&self) -> bool {
        self.is_completed(Step::last())
    }

    /// Highest registry index among completed steps, 0 if none
    pub fn furthest_completed_index(&self) -> usize {
        self.completed_steps
            .iter()
            .next_back()
            .map(|step| step.index())
            .unwrap_or(0)
    }
}
