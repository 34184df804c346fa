//! Components - Reusable UI Building Blocks
//!
//! Nothing in here touches services or the filesystem.

pub mod composite;
pub mod layout;
pub mod primitives;
