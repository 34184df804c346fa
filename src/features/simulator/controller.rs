//! Simulator Controller
//!
//! Bridges the simulator form to the export service.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::report::SimulationReport;
use crate::eventing::app_event::AppEvent;
use crate::services::service_hub::ServiceHub;

/// Simulator page controller
pub struct SimulatorController {
    entities: AppEntities,
}

impl SimulatorController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Export the current simulation as a TXT report
    pub fn export(&self, cx: &mut App) {
        let report = {
            let state = self.entities.simulator.read(cx);
            SimulationReport::new(state.request(), state.result())
        };

        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.log(AppEvent::info(format!(
                "Exportando simulación ({})",
                report.request.kind.label()
            )));
            hub.export_simulation(report);
        }
    }
}
