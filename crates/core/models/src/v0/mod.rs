mod onboarding;
mod seller_profiles;

pub use onboarding::*;
pub use seller_profiles::*;
