//! Workspace - Window Shell and Event Pump
//!
//! Holds the header, nav rail, active panel, footer, and activity feed.
//! Also pumps worker events into the UI and persists preferences whenever
//! the locale or simulator parameters change.

use chrono::Datelike;
use gpui::{
    div, prelude::*, AnyElement, App, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::components::layout::header::Header;
use crate::components::layout::log_panel::LogPanel;
use crate::components::layout::sidebar::Sidebar;
use crate::eventing::app_event::AppEvent;
use crate::features::agreements::page::AgreementsPage;
use crate::features::classification::page::ClassificationPage;
use crate::features::dashboard::page::DashboardPage;
use crate::features::library::page::LibraryPage;
use crate::features::news::page::NewsPage;
use crate::features::resources::page::ResourcesPage;
use crate::features::simulator::page::SimulatorPage;
use crate::i18n::t;
use crate::services::service_hub::ServiceHub;
use crate::state::log_state::{LogEntry, LogLevel};
use crate::theme::colors::ArancelColors;
use crate::utils::prefs_store::Prefs;

/// Panel views, built on first visit and kept for the session so each
/// panel retains its form and search state across navigation.
#[derive(Default)]
struct PageCache {
    dashboard: Option<Entity<DashboardPage>>,
    library: Option<Entity<LibraryPage>>,
    classification: Option<Entity<ClassificationPage>>,
    simulator: Option<Entity<SimulatorPage>>,
    agreements: Option<Entity<AgreementsPage>>,
    news: Option<Entity<NewsPage>>,
    resources: Option<Entity<ResourcesPage>>,
}

impl PageCache {
    fn view(
        &mut self,
        page: ActivePage,
        entities: &AppEntities,
        cx: &mut Context<Workspace>,
    ) -> AnyElement {
        let entities = entities.clone();
        match page {
            ActivePage::Dashboard => self
                .dashboard
                .get_or_insert_with(|| cx.new(|cx| DashboardPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Library => self
                .library
                .get_or_insert_with(|| cx.new(|cx| LibraryPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Classification => self
                .classification
                .get_or_insert_with(|| cx.new(|cx| ClassificationPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Simulator => self
                .simulator
                .get_or_insert_with(|| cx.new(|cx| SimulatorPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Agreements => self
                .agreements
                .get_or_insert_with(|| cx.new(|cx| AgreementsPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActivePage::News => self
                .news
                .get_or_insert_with(|| cx.new(|cx| NewsPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Resources => self
                .resources
                .get_or_insert_with(|| cx.new(|cx| ResourcesPage::new(entities, cx)))
                .clone()
                .into_any_element(),
        }
    }
}

pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    log_panel: Entity<LogPanel>,
    pages: PageCache,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        cx: &mut Context<Self>,
    ) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));
        let log_panel = cx.new(|cx| LogPanel::new(entities.clone(), cx));

        // The dashboard is the landing panel, build it up front
        let pages = PageCache {
            dashboard: Some(cx.new(|cx| DashboardPage::new(entities.clone(), cx))),
            ..PageCache::default()
        };

        Self::pump_events(event_rx, entities.clone(), cx);

        cx.observe(&entities.tabs, |_this, _, cx| {
            cx.notify();
        })
        .detach();

        // Locale and simulator edits are saved as they happen
        cx.observe(&entities.i18n, |this, _, cx| {
            persist_prefs(&this.entities, cx);
            cx.notify();
        })
        .detach();
        cx.observe(&entities.simulator, |this, _, cx| {
            persist_prefs(&this.entities, cx);
        })
        .detach();

        Self {
            entities,
            header,
            sidebar,
            log_panel,
            pages,
        }
    }

    /// Forward worker events into entity updates on the UI thread
    fn pump_events(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
        .detach();
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let active_page = self.entities.tabs.read(cx).active_page;
        let entities = self.entities.clone();
        let content = self.pages.view(active_page, &entities, cx);

        let footer = div()
            .w_full()
            .py_2()
            .px_4()
            .text_xs()
            .text_color(ArancelColors::text_muted())
            .child(format!(
                "© {} {}",
                chrono::Local::now().year(),
                t(locale, "app-footer")
            ));

        let content_column = div()
            .flex_1()
            .flex()
            .flex_col()
            .overflow_hidden()
            .bg(ArancelColors::background())
            .child(div().flex_1().overflow_hidden().child(content))
            .child(footer);

        let main_row = div()
            .flex_1()
            .flex()
            .flex_row()
            .overflow_hidden()
            .child(self.sidebar.clone())
            .child(content_column);

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(ArancelColors::background())
            .child(self.header.clone())
            .child(main_row)
            .child(self.log_panel.clone())
    }
}

/// Funnel a worker event into the activity feed, logging export outcomes
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    let entry = match event {
        AppEvent::Log(entry) => entry,
        AppEvent::ExportCompleted { path } => {
            tracing::info!(path = %path.display(), "simulation exported");
            LogEntry::now(
                LogLevel::Info,
                format!("Simulación exportada: {}", path.display()),
            )
        }
        AppEvent::ExportFailed { message } => {
            tracing::warn!(error = %message, "simulation export failed");
            LogEntry::now(
                LogLevel::Error,
                format!("Error al exportar la simulación: {message}"),
            )
        }
    };

    entities.logs.update(cx, |logs, cx| {
        logs.push(entry);
        cx.notify();
    });
}

/// Snapshot locale and simulator parameters and persist them off-thread
fn persist_prefs(entities: &AppEntities, cx: &mut App) {
    let prefs = Prefs {
        locale: entities.i18n.read(cx).locale.as_tag().to_string(),
        simulator: entities.simulator.read(cx).to_prefs(),
    };

    if let Some(hub) = cx.try_global::<ServiceHub>() {
        hub.save_prefs(prefs);
    }
}
