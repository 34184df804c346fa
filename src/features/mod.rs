//! Features - Page Slices
//!
//! One module per panel. Each owns its page view and, where it drives
//! services, a controller.

pub mod agreements;
pub mod classification;
pub mod dashboard;
pub mod library;
pub mod news;
pub mod resources;
pub mod simulator;
