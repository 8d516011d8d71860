use marketplace_models::v0::*;

impl From<crate::ProgressRecord> for OnboardingProgress {
    fn from(value: crate::ProgressRecord) -> Self {
        OnboardingProgress {
            user_id: value.id,
            completed_steps: value.completed_steps,
            current_step: value.current_step,
        }
    }
}

impl crate::SellerProfile {
    /// Combine this profile with its progress into the API view
    pub fn into_view(self, progress: crate::ProgressRecord) -> SellerProfile {
        #[cfg(debug_assertions)]
        assert_eq!(self.id, progress.id);

        SellerProfile {
            business: self.business,
            contact: self.contact,
            category: self.category,
            addresses: self.addresses,
            bank: self.bank,
            documents: self.documents,
            progress: progress.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use marketplace_models::v0::{self, Step};

    use crate::{ProgressRecord, SellerProfile};

    #[test]
    fn view_carries_progress() {
        let mut progress = ProgressRecord::new("seller".to_string());
        progress.completed_steps.insert(Step::Business);
        progress.current_step = Step::Contact;

        let view = SellerProfile::new("seller".to_string()).into_view(progress);
        assert_eq!(view.progress.user_id, "seller");
        assert_eq!(view.progress.current_step, Step::Contact);
        assert!(view.business.is_none());

        let converted: v0::OnboardingProgress = ProgressRecord::new("other".to_string()).into();
        assert_eq!(converted, v0::OnboardingProgress::new("other".to_string()));
    }
}
