//! Service Layer
//!
//! Background work (file exports, preference writes) runs on a dedicated
//! worker thread owned by the [`service_hub::ServiceHub`]; outcomes flow
//! back to the UI as [`crate::eventing::app_event::AppEvent`]s.

pub mod service_hub;
