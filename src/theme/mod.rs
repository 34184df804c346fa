//! Theme - Shared Palette

pub mod colors;
