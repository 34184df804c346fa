//! AppEntities - Shared Entity Handles
//!
//! One handle per independently-updating piece of state. Splitting by
//! update frequency keeps a keystroke in the simulator from re-rendering
//! the whole window.

use gpui::{App, AppContext, Entity, Global};

use crate::state::{
    i18n_state::I18nState, log_state::LogState, news_state::NewsState,
    simulator_state::SimulatorState, tabs_state::TabsState,
};
use crate::utils::prefs_store::Prefs;

#[derive(Clone)]
pub struct AppEntities {
    /// Activity messages (ring buffer)
    pub logs: Entity<LogState>,
    /// Page navigation state
    pub tabs: Entity<TabsState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
    /// Simulator form state
    pub simulator: Entity<SimulatorState>,
    /// Session news board state
    pub news: Entity<NewsState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from saved preferences
    pub fn init(prefs: &Prefs, cx: &mut App) -> Self {
        let locale = crate::i18n::Locale::from_tag(&prefs.locale);
        let simulator = SimulatorState::from_prefs(&prefs.simulator);

        Self {
            logs: cx.new(|_| LogState::new(500)),
            tabs: cx.new(|_| TabsState::default()),
            i18n: cx.new(move |_| I18nState { locale }),
            simulator: cx.new(move |_| simulator),
            news: cx.new(|_| NewsState::default()),
        }
    }
}
