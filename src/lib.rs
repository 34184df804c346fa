//! Aranceles GUI Library
//!
//! This crate provides the main application logic for Aranceles, a native
//! dashboard for Colombian customs tariff management: duty simulation,
//! reference tables, trade agreements, and session alerts.

pub mod app;
pub mod components;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
