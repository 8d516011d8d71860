//! Client side of seller onboarding
//!
//! Decides which step tabs are reachable, which view to render and how a
//! step form moves through submission. Talks to the backend only through
//! [`OnboardingClient`].

#[macro_use]
extern crate async_trait;

#[macro_use]
extern crate log;

#[macro_use]
extern crate marketplace_result;

mod form;
mod gate;
mod r#impl;
mod r#trait;

pub use form::*;
pub use gate::*;
pub use r#impl::*;
pub use r#trait::*;

#[cfg(test)]
mod test;
