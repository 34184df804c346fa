//! Application - Bootstrap and Main Window
//!
//! Global registration, window options, and quit handling.

use gpui::{
    actions, point, px, size, App, AppContext, Application, Bounds, SharedString,
    TitlebarOptions, WindowBounds, WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::eventing::app_event::AppEvent;
use crate::services::service_hub::ServiceHub;
use crate::utils::prefs_store;

actions!(arancel, [Quit]);

const WINDOW_TITLE: &str = "Aranceles – Gestión Aduanera";
const WINDOW_SIZE: (f32, f32) = (1400.0, 900.0);

fn main_window_options(cx: &mut App) -> WindowOptions {
    let (width, height) = WINDOW_SIZE;
    let bounds = Bounds::centered(None, size(px(width), px(height)), cx);

    WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(SharedString::from(WINDOW_TITLE)),
            appears_transparent: true,
            traffic_light_position: Some(point(px(9.0), px(9.0))),
        }),
        ..Default::default()
    }
}

/// Run the tariff dashboard application
pub fn run_app() {
    Application::new().run(|cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit once the last window closes (macOS keeps apps alive otherwise)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Restore saved preferences before any entity reads them
        let prefs = prefs_store::load_prefs();
        let entities = AppEntities::init(&prefs, cx);
        cx.set_global(entities.clone());

        // Worker events flow back to the workspace over this channel
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();
        cx.set_global(ServiceHub::new(event_tx));

        let options = main_window_options(cx);
        cx.open_window(options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), event_rx, cx))
        })
        .expect("failed to open the main window");

        cx.activate(true);
    });
}
