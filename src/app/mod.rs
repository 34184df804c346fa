//! Application Layer
//!
//! Bootstrap, shared entities, navigation, and the window shell.

pub mod application;
pub mod entities;
pub mod navigation;
pub mod workspace;
