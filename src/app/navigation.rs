//! Navigation - Active Page Selection
//!
//! Defines the panels available in the application sidebar.

/// Available pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePage {
    /// Dashboard with summary figures and quick links
    #[default]
    Dashboard,
    /// Tariff library with the three duty kinds and sector examples
    Library,
    /// Tariff classification structure and code search
    Classification,
    /// Duty calculation simulator
    Simulator,
    /// Trade agreements list
    Agreements,
    /// Session news board
    News,
    /// External resources and legal notes
    Resources,
}

impl ActivePage {
    /// Get the icon glyph for the page
    pub fn icon(&self) -> &'static str {
        match self {
            ActivePage::Dashboard => "📊",
            ActivePage::Library => "📚",
            ActivePage::Classification => "🧭",
            ActivePage::Simulator => "🧮",
            ActivePage::Agreements => "🤝",
            ActivePage::News => "📰",
            ActivePage::Resources => "🔗",
        }
    }

    /// Get the translation key for the page title
    pub fn title_key(&self) -> &'static str {
        match self {
            ActivePage::Dashboard => "nav-dashboard",
            ActivePage::Library => "nav-library",
            ActivePage::Classification => "nav-classification",
            ActivePage::Simulator => "nav-simulator",
            ActivePage::Agreements => "nav-agreements",
            ActivePage::News => "nav-news",
            ActivePage::Resources => "nav-resources",
        }
    }

    /// Stable lowercase identifier, used for element ids
    pub fn slug(&self) -> &'static str {
        // title keys are "nav-<slug>"
        &self.title_key()[4..]
    }

    /// Get all available pages for the sidebar
    pub fn all() -> &'static [ActivePage] {
        &[
            ActivePage::Dashboard,
            ActivePage::Library,
            ActivePage::Classification,
            ActivePage::Simulator,
            ActivePage::Agreements,
            ActivePage::News,
            ActivePage::Resources,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_lists_every_page_once() {
        let pages = ActivePage::all();
        assert_eq!(pages.len(), 7);
        assert_eq!(pages[0], ActivePage::Dashboard);

        let mut keys: Vec<_> = pages.iter().map(|p| p.title_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 7);
    }

    #[test]
    fn slugs_drop_the_nav_prefix() {
        assert_eq!(ActivePage::Dashboard.slug(), "dashboard");
        assert_eq!(ActivePage::Classification.slug(), "classification");
    }
}
