//! ServiceHub - Background Export and Preference Worker
//!
//! Commands go in over a flume channel, outcomes come back to the UI
//! as [`AppEvent`]s on the shared event channel.

use std::path::PathBuf;
use std::sync::Arc;

use gpui::Global;
use parking_lot::RwLock;

use crate::domain::report::{SimulationReport, EXPORT_FILE_NAME};
use crate::error::{Error, Result};
use crate::eventing::app_event::AppEvent;
use crate::utils::fs::export_dir;
use crate::utils::prefs_store::{save_prefs, Prefs};

#[derive(Debug, Clone)]
pub enum ServiceCommand {
    /// Write a simulation report to the export directory
    ExportSimulation(SimulationReport),
    /// Persist user preferences
    SavePrefs(Prefs),
}

/// Handle to the background worker, installed as a GPUI global.
pub struct ServiceHub {
    event_tx: flume::Sender<AppEvent>,
    command_tx: flume::Sender<ServiceCommand>,
    /// True while an export is in flight
    exporting: Arc<RwLock<bool>>,
}

impl Global for ServiceHub {}

impl ServiceHub {
    pub fn new(event_tx: flume::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = flume::unbounded::<ServiceCommand>();
        let exporting = Arc::new(RwLock::new(false));

        spawn_worker(command_rx, exporting.clone(), event_tx.clone());
        let _ = event_tx.send(AppEvent::debug("ServiceHub inicializado"));

        Self {
            event_tx,
            command_tx,
            exporting,
        }
    }

    /// Queue a simulation export
    pub fn export_simulation(&self, report: SimulationReport) {
        let _ = self
            .command_tx
            .send(ServiceCommand::ExportSimulation(report));
    }

    /// Queue a preference write
    pub fn save_prefs(&self, prefs: Prefs) {
        let _ = self.command_tx.send(ServiceCommand::SavePrefs(prefs));
    }

    /// Check if an export is in flight
    pub fn is_exporting(&self) -> bool {
        *self.exporting.read()
    }

    /// Send a log event to the UI
    pub fn log(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}

/// Run the command loop on its own thread with a dedicated Tokio runtime.
fn spawn_worker(
    command_rx: flume::Receiver<ServiceCommand>,
    exporting: Arc<RwLock<bool>>,
    event_tx: flume::Sender<AppEvent>,
) {
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to create Tokio runtime");

        rt.block_on(async move {
            while let Ok(cmd) = command_rx.recv_async().await {
                handle_command(cmd, &exporting, &event_tx).await;
            }
        });
    });
}

async fn handle_command(
    cmd: ServiceCommand,
    exporting: &RwLock<bool>,
    event_tx: &flume::Sender<AppEvent>,
) {
    match cmd {
        ServiceCommand::ExportSimulation(report) => {
            *exporting.write() = true;

            let event = match write_report(&report).await {
                Ok(path) => AppEvent::ExportCompleted { path },
                Err(err) => AppEvent::ExportFailed {
                    message: err.to_string(),
                },
            };
            let _ = event_tx.send(event);

            *exporting.write() = false;
        }
        ServiceCommand::SavePrefs(prefs) => {
            if let Err(err) = save_prefs(&prefs) {
                let _ = event_tx.send(AppEvent::warn(format!(
                    "No se pudieron guardar las preferencias: {err}"
                )));
            }
        }
    }
}

async fn write_report(report: &SimulationReport) -> Result<PathBuf> {
    let path = export_dir()?.join(EXPORT_FILE_NAME);
    tokio::fs::write(&path, report.to_text())
        .await
        .map_err(|source| Error::Export {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tariff::{calculate, TariffRequest};

    #[test]
    fn export_writes_the_report_text() {
        let request = TariffRequest::default();
        let report = SimulationReport::new(request, calculate(&request));

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("build runtime");
        let path = rt.block_on(write_report(&report)).expect("write report");

        assert!(path.ends_with(EXPORT_FILE_NAME));
        let written = std::fs::read_to_string(&path).expect("read exported file");
        assert_eq!(written, report.to_text());
        let _ = std::fs::remove_file(&path);
    }
}
