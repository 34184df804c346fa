//! Domain Layer
//!
//! Tariff data and calculation rules, free of any GPUI types.

pub mod catalog;
pub mod news;
pub mod report;
pub mod tariff;
