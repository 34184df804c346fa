//! Colors - Application Palette
//!
//! Slate chrome with an indigo accent. Every color is an associated
//! function so call sites stay searchable.

use gpui::{rgb, Rgba};

pub struct ArancelColors;

impl ArancelColors {
    // Chrome
    pub fn header_bg() -> Rgba { rgb(0x0f172a) }
    pub fn sidebar_bg() -> Rgba { rgb(0xffffff) }
    pub fn background() -> Rgba { rgb(0xf1f5f9) }
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Dark slate strip hosting the activity feed
    pub fn log_panel_bg() -> Rgba { rgb(0x1e293b) }

    // Accent (indigo) and its wash for active nav rows
    pub fn accent() -> Rgba { rgb(0x4f46e5) }
    pub fn accent_soft() -> Rgba { rgb(0xeef2ff) }

    // Text
    pub fn text_primary() -> Rgba { rgb(0x0f172a) }
    pub fn text_secondary() -> Rgba { rgb(0x64748b) }
    pub fn text_muted() -> Rgba { rgb(0x94a3b8) }
    /// On dark surfaces
    pub fn text_light() -> Rgba { rgb(0xffffff) }
    pub fn text_header() -> Rgba { rgb(0xffffff) }

    // Feedback
    pub fn success() -> Rgba { rgb(0x059669) }
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    pub fn danger() -> Rgba { rgb(0xef4444) }
    pub fn info() -> Rgba { rgb(0x0284c7) }

    // Borders
    pub fn border() -> Rgba { rgb(0xe2e8f0) }
    pub fn border_focus() -> Rgba { rgb(0x4f46e5) }

    // Buttons
    pub fn button_primary_bg() -> Rgba { rgb(0x0f172a) }
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    pub fn button_danger_bg() -> Rgba { rgb(0xef4444) }
    pub fn button_danger_text() -> Rgba { rgb(0xffffff) }
    pub fn button_ghost_text() -> Rgba { rgb(0x64748b) }

    // Tables
    pub fn table_header_bg() -> Rgba { rgb(0xf8fafc) }
    pub fn table_row_hover() -> Rgba { rgb(0xf1f5f9) }
    pub fn table_row_alt() -> Rgba { rgb(0xf8fafc) }

    // Inputs
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    pub fn input_border() -> Rgba { rgb(0xcbd5e1) }
    pub fn input_placeholder() -> Rgba { rgb(0x94a3b8) }

    // Amber badge for official-source tags
    pub fn badge_bg() -> Rgba { rgb(0xfef3c7) }
    pub fn badge_text() -> Rgba { rgb(0x92400e) }
}
