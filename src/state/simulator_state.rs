//! SimulatorState - Duty Simulator Form State

use crate::domain::tariff::{calculate, TariffKind, TariffRequest, TariffResult};
use crate::utils::prefs_store::SimulatorPrefs;

/// Form state behind the simulator panel.
///
/// Field text is kept verbatim as typed; parsing happens on every read, with
/// anything non-numeric coercing to zero. Rate fields hold percent text
/// (0..100) and are stored as 0..=1 fractions.
#[derive(Debug, Clone)]
pub struct SimulatorState {
    pub kind: TariffKind,
    pub cif_text: String,
    pub units_text: String,
    pub ad_valorem_text: String,
    pub specific_text: String,
    pub preference_text: String,
}

impl Default for SimulatorState {
    fn default() -> Self {
        Self::from_prefs(&SimulatorPrefs::default())
    }
}

fn parse_or_zero(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn display_number(value: f64) -> String {
    format!("{value}")
}

impl SimulatorState {
    /// Restore the form from persisted parameters
    pub fn from_prefs(prefs: &SimulatorPrefs) -> Self {
        let kind = match prefs.kind.as_str() {
            "especifico" => TariffKind::Specific,
            "mixto" => TariffKind::Mixed,
            _ => TariffKind::AdValorem,
        };
        Self {
            kind,
            cif_text: display_number(prefs.cif_value),
            units_text: display_number(prefs.units),
            ad_valorem_text: display_number(prefs.ad_valorem_rate * 100.0),
            specific_text: display_number(prefs.specific_rate),
            preference_text: display_number(prefs.preferential_reduction * 100.0),
        }
    }

    /// Snapshot the form for persistence
    pub fn to_prefs(&self) -> SimulatorPrefs {
        let request = self.request();
        SimulatorPrefs {
            kind: request.kind.id().to_string(),
            cif_value: request.cif_value,
            units: request.units,
            ad_valorem_rate: request.ad_valorem_rate,
            specific_rate: request.specific_rate,
            preferential_reduction: request.preferential_reduction,
        }
    }

    pub fn set_kind(&mut self, kind: TariffKind) {
        self.kind = kind;
    }

    /// Parse the form into a calculation request
    pub fn request(&self) -> TariffRequest {
        TariffRequest {
            kind: self.kind,
            cif_value: parse_or_zero(&self.cif_text),
            units: parse_or_zero(&self.units_text),
            ad_valorem_rate: parse_or_zero(&self.ad_valorem_text) / 100.0,
            specific_rate: parse_or_zero(&self.specific_text),
            preferential_reduction: parse_or_zero(&self.preference_text) / 100.0,
        }
    }

    /// Current calculation outcome; recomputed on each call
    pub fn result(&self) -> TariffResult {
        calculate(&self.request())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_matches_initial_parameters() {
        let state = SimulatorState::default();
        assert_eq!(state.kind, TariffKind::AdValorem);
        assert_eq!(state.cif_text, "10000");
        assert_eq!(state.units_text, "100");
        assert_eq!(state.ad_valorem_text, "10");
        assert_eq!(state.specific_text, "2");
        assert_eq!(state.preference_text, "0");

        let result = state.result();
        assert_eq!(result.base, 1000.0);
        assert_eq!(result.total, 1000.0);
    }

    #[test]
    fn percent_text_becomes_a_fraction() {
        let mut state = SimulatorState::default();
        state.ad_valorem_text = "25".to_string();
        assert_eq!(state.request().ad_valorem_rate, 0.25);

        state.preference_text = "100".to_string();
        assert_eq!(state.request().preferential_reduction, 1.0);
        assert_eq!(state.result().total, 0.0);
    }

    #[test]
    fn garbage_text_counts_as_zero() {
        let mut state = SimulatorState::default();
        state.cif_text = "abc".to_string();
        state.units_text = String::new();
        state.ad_valorem_text = "  ".to_string();
        state.specific_text = "inf".to_string();
        state.preference_text = "NaN".to_string();

        let request = state.request();
        assert_eq!(request.cif_value, 0.0);
        assert_eq!(request.units, 0.0);
        assert_eq!(request.ad_valorem_rate, 0.0);
        assert_eq!(request.specific_rate, 0.0);
        assert_eq!(request.preferential_reduction, 0.0);

        let result = state.result();
        assert_eq!(result.base, 0.0);
        assert_eq!(result.discount, 0.0);
        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn scientific_notation_parses() {
        let mut state = SimulatorState::default();
        state.cif_text = "1e4".to_string();
        assert_eq!(state.request().cif_value, 10000.0);
    }

    #[test]
    fn result_follows_kind_changes() {
        let mut state = SimulatorState::default();
        assert_eq!(state.result().base, 1000.0);

        state.set_kind(TariffKind::Specific);
        assert_eq!(state.result().base, 200.0);

        state.set_kind(TariffKind::Mixed);
        assert_eq!(state.result().base, 1200.0);
    }

    #[test]
    fn prefs_round_trip_preserves_the_request() {
        let mut state = SimulatorState::default();
        state.set_kind(TariffKind::Mixed);
        state.cif_text = "5000".to_string();
        state.ad_valorem_text = "5".to_string();
        state.preference_text = "50".to_string();

        let restored = SimulatorState::from_prefs(&state.to_prefs());
        assert_eq!(restored.request(), state.request());
    }
}
