//! Form rendering module
//!
//! - `field_renderer`: field, error line and help text rendering
//! - `signup_form`: the two-step signup form

mod field_renderer;
mod signup_form;

pub use signup_form::draw as draw_signup_form;
