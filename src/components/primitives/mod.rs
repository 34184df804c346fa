//! Primitive Components
//!
//! Small reusable widgets: buttons, inputs, badges, links.

pub mod badge;
pub mod button;
pub mod link;
pub mod segmented;
pub mod text_input;
