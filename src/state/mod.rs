//! State - Entity State Modules
//!
//! Entity-backed application state, one module per concern.

pub mod i18n_state;
pub mod log_state;
pub mod news_state;
pub mod simulator_state;
pub mod tabs_state;
