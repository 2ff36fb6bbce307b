//! Model of the invitation page: the DOM elements the page script relies
//! on, the decorative features wired onto them, and the RSVP form flow.
//!
//! The hosting environment builds one [`InvitationApp`] and calls
//! [`InvitationApp::initialize`] once the page is ready.

pub mod error;
pub mod features;
pub mod lifecycle;
pub mod page;
pub mod settings;

#[cfg(test)]
mod tests;

pub use lifecycle::{FeatureSupervisor, InitReport, InvitationApp, PageFeature};
pub use page::Page;
pub use settings::PageSettings;
