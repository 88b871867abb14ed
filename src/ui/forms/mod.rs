//! Form rendering module
//!
//! - `field_renderer`: text and radio-group field boxes
//! - `onboarding_form`: the onboarding form screen

mod field_renderer;
mod onboarding_form;

pub use onboarding_form::draw as draw_onboarding_form;
