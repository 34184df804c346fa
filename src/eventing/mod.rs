//! Eventing - Worker to UI Event Flow

pub mod app_event;
