use marketplace_models::v0::{OnboardingProgress, Step};

/// What the wizard should render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardView {
    /// Every step is done
    Success,
    /// Form of the given step
    Step(Step),
}

/// Decides which step tabs can be opened
///
/// The high-water mark starts at the furthest completed step of the
/// authoritative record and only ever grows during a session.
#[derive(Debug, Clone)]
pub struct StepGate {
    progress: OnboardingProgress,
    furthest: usize,
}

impl StepGate {
    pub fn new(progress: OnboardingProgress) -> StepGate {
        StepGate {
            furthest: progress.furthest_completed_index(),
            progress,
        }
    }

    /// Last progress record seen from the server
    pub fn progress(&self) -> &OnboardingProgress {
        &self.progress
    }

    /// Furthest step index reached this session
    pub fn furthest(&self) -> usize {
        self.furthest
    }

    pub fn is_completed(&self, step: Step) -> bool {
        self.progress.is_completed(step)
    }

    pub fn is_enabled(&self, step: Step) -> bool {
        self.is_completed(step) || step.index() <= self.furthest
    }

    /// Every step alongside whether its tab is enabled
    pub fn tabs(&self) -> impl Iterator<Item = (Step, bool)> + '_ {
        Step::REGISTRY
            .into_iter()
            .map(|step| (step, self.is_enabled(step)))
    }

    /// Record that the user reached a step
    pub fn visit(&mut self, step: Step) {
        self.furthest = self.furthest.max(step.index());
    }

    /// Adopt a freshly fetched record
    pub fn reconcile(&mut self, progress: OnboardingProgress) {
        self.furthest = self.furthest.max(progress.furthest_completed_index());
        self.progress = progress;
    }

    /// View to render while the given step is active
    pub fn view(&self, active: Step) -> WizardView {
        if self.progress.is_finished() {
            WizardView::Success
        } else {
            WizardView::Step(active)
        }
    }
}
