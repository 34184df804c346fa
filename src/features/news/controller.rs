//! News Controller
//!
//! Handles publishing session alerts.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::eventing::app_event::AppEvent;
use crate::services::service_hub::ServiceHub;

/// News page controller
pub struct NewsController {
    entities: AppEntities,
}

impl NewsController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Publish the current draft; returns whether it was accepted
    pub fn publish(&self, cx: &mut App) -> bool {
        let title = self.entities.news.read(cx).draft.title.trim().to_string();

        let published = self.entities.news.update(cx, |state, cx| {
            let published = state.publish();
            if published {
                cx.notify();
            }
            published
        });

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            if published {
                hub.log(AppEvent::info(format!("Alerta publicada: {title}")));
            } else {
                hub.log(AppEvent::warn("La alerta necesita un título"));
            }
        }

        published
    }
}
