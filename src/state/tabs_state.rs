//! TabsState - Active Panel Selection

use crate::app::navigation::ActivePage;

#[derive(Debug, Default)]
pub struct TabsState {
    pub active_page: ActivePage,
}

impl TabsState {
    pub fn set_active_page(&mut self, page: ActivePage) {
        self.active_page = page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_dashboard() {
        let state = TabsState::default();
        assert_eq!(state.active_page, ActivePage::Dashboard);
    }

    #[test]
    fn switches_pages() {
        let mut state = TabsState::default();
        state.set_active_page(ActivePage::Simulator);
        assert_eq!(state.active_page, ActivePage::Simulator);
    }
}
