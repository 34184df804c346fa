//! Report - Simulation Export

use serde::{Deserialize, Serialize};

use crate::domain::tariff::{TariffRequest, TariffResult};

/// File name the exported simulation is written under
pub const EXPORT_FILE_NAME: &str = "simulacion_arancel.txt";

/// Snapshot of a simulation, ready to be written to disk
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub request: TariffRequest,
    pub result: TariffResult,
}

impl SimulationReport {
    pub fn new(request: TariffRequest, result: TariffResult) -> Self {
        Self { request, result }
    }

    /// Plain-text rendering: a header, the parameters, then the results.
    ///
    /// Values are written unrounded; the kind is written as its wire id.
    pub fn to_text(&self) -> String {
        format!(
            "Simulación de arancel\n\n\
             Tipo: {}\n\
             Valor CIF: {}\n\
             Unidades: {}\n\
             Tasa ad valorem: {}\n\
             Tasa específica: {}\n\
             Reducción TLC: {}\n\n\
             Base: {}\n\
             Descuento: {}\n\
             Total: {}\n",
            self.request.kind.id(),
            self.request.cif_value,
            self.request.units,
            self.request.ad_valorem_rate,
            self.request.specific_rate,
            self.request.preferential_reduction,
            self.result.base,
            self.result.discount,
            self.result.total,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tariff::{calculate, TariffKind};

    #[test]
    fn report_text_lists_parameters_and_results() {
        let request = TariffRequest {
            kind: TariffKind::AdValorem,
            cif_value: 10000.0,
            units: 100.0,
            ad_valorem_rate: 0.1,
            specific_rate: 2.0,
            preferential_reduction: 0.0,
        };
        let report = SimulationReport::new(request, calculate(&request));
        let text = report.to_text();

        assert!(text.starts_with("Simulación de arancel\n\n"));
        assert!(text.contains("Tipo: ad_valorem\n"));
        assert!(text.contains("Valor CIF: 10000\n"));
        assert!(text.contains("Unidades: 100\n"));
        assert!(text.contains("Tasa ad valorem: 0.1\n"));
        assert!(text.contains("Tasa específica: 2\n"));
        assert!(text.contains("Reducción TLC: 0\n"));
        assert!(text.contains("Base: 1000\n"));
        assert!(text.contains("Descuento: 0\n"));
        assert!(text.ends_with("Total: 1000\n"));
    }

    #[test]
    fn report_text_keeps_fractional_values_unrounded() {
        let request = TariffRequest {
            kind: TariffKind::Specific,
            cif_value: 0.0,
            units: 3.0,
            ad_valorem_rate: 0.0,
            specific_rate: 0.35,
            preferential_reduction: 0.0,
        };
        let report = SimulationReport::new(request, calculate(&request));
        let text = report.to_text();

        assert!(text.contains("Tasa específica: 0.35\n"));
        assert!(text.contains(&format!("Total: {}\n", 0.35_f64 * 3.0)));
    }
}
