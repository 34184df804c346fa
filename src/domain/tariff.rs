//! Tariff - Duty Calculation Types and Rules

use serde::{Deserialize, Serialize};

/// How a duty is assessed for a subheading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TariffKind {
    /// Percentage over the CIF value
    #[default]
    #[serde(rename = "ad_valorem")]
    AdValorem,
    /// Fixed amount per physical unit
    #[serde(rename = "especifico")]
    Specific,
    /// Ad valorem plus a fixed amount per unit
    #[serde(rename = "mixto")]
    Mixed,
    /// Unrecognized kind; assessed with a zero base rather than rejected
    #[serde(other, rename = "desconocido")]
    Unknown,
}

impl TariffKind {
    /// Wire/export identifier
    pub fn id(&self) -> &'static str {
        match self {
            TariffKind::AdValorem => "ad_valorem",
            TariffKind::Specific => "especifico",
            TariffKind::Mixed => "mixto",
            TariffKind::Unknown => "desconocido",
        }
    }

    /// Human-facing name
    pub fn label(&self) -> &'static str {
        match self {
            TariffKind::AdValorem => "Ad Valorem",
            TariffKind::Specific => "Específico",
            TariffKind::Mixed => "Mixto",
            TariffKind::Unknown => "Desconocido",
        }
    }

    /// The kinds a user can pick in the simulator
    pub fn all() -> &'static [TariffKind] {
        &[TariffKind::AdValorem, TariffKind::Specific, TariffKind::Mixed]
    }

    /// Whether the ad valorem rate participates in the calculation
    pub fn uses_ad_valorem(&self) -> bool {
        matches!(self, TariffKind::AdValorem | TariffKind::Mixed)
    }

    /// Whether the specific rate participates in the calculation
    pub fn uses_specific(&self) -> bool {
        matches!(self, TariffKind::Specific | TariffKind::Mixed)
    }
}

/// Input parameters for a duty calculation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TariffRequest {
    /// Duty kind
    pub kind: TariffKind,
    /// Customs value in USD (cost + insurance + freight)
    pub cif_value: f64,
    /// Physical unit count (liters, kilograms, items)
    pub units: f64,
    /// Ad valorem rate as a 0..=1 fraction
    pub ad_valorem_rate: f64,
    /// Specific rate in USD per unit
    pub specific_rate: f64,
    /// Preferential reduction as a 0..=1 fraction (1 = full exemption)
    pub preferential_reduction: f64,
}

/// Outcome of a duty calculation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TariffResult {
    /// Duty before preferences
    pub base: f64,
    /// Amount discounted by the preference
    pub discount: f64,
    /// Duty after preferences, never negative
    pub total: f64,
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Compute the duty for a request.
///
/// Never fails: non-finite inputs count as zero and an unrecognized kind
/// yields a zero base. No rounding is applied; rendering decides precision.
pub fn calculate(request: &TariffRequest) -> TariffResult {
    let cif_value = finite_or_zero(request.cif_value);
    let units = finite_or_zero(request.units);
    let ad_valorem_rate = finite_or_zero(request.ad_valorem_rate);
    let specific_rate = finite_or_zero(request.specific_rate);
    let preferential_reduction = finite_or_zero(request.preferential_reduction);

    let base = match request.kind {
        TariffKind::AdValorem => cif_value * ad_valorem_rate,
        TariffKind::Specific => specific_rate * units,
        TariffKind::Mixed => cif_value * ad_valorem_rate + specific_rate * units,
        TariffKind::Unknown => 0.0,
    };

    let discount = base * preferential_reduction;
    let total = (base - discount).max(0.0);

    TariffResult { base, discount, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ad_valorem_base_is_cif_times_rate() {
        let result = calculate(&TariffRequest {
            kind: TariffKind::AdValorem,
            cif_value: 10000.0,
            units: 0.0,
            ad_valorem_rate: 0.10,
            specific_rate: 0.0,
            preferential_reduction: 0.0,
        });
        assert_eq!(result.base, 1000.0);
        assert_eq!(result.discount, 0.0);
        assert_eq!(result.total, 1000.0);
    }

    #[test]
    fn specific_base_is_rate_times_units() {
        let result = calculate(&TariffRequest {
            kind: TariffKind::Specific,
            cif_value: 0.0,
            units: 100.0,
            ad_valorem_rate: 0.0,
            specific_rate: 5.0,
            preferential_reduction: 0.0,
        });
        assert_eq!(result.base, 500.0);
        assert_eq!(result.total, 500.0);
    }

    #[test]
    fn mixed_base_sums_both_components() {
        let result = calculate(&TariffRequest {
            kind: TariffKind::Mixed,
            cif_value: 10000.0,
            units: 100.0,
            ad_valorem_rate: 0.05,
            specific_rate: 2.0,
            preferential_reduction: 0.0,
        });
        assert_eq!(result.base, 700.0);
        assert_eq!(result.total, 700.0);
    }

    #[test]
    fn full_preference_zeroes_the_total() {
        let result = calculate(&TariffRequest {
            kind: TariffKind::Mixed,
            cif_value: 10000.0,
            units: 100.0,
            ad_valorem_rate: 0.05,
            specific_rate: 2.0,
            preferential_reduction: 1.0,
        });
        assert_eq!(result.base, 700.0);
        assert_eq!(result.discount, 700.0);
        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn partial_preference_discounts_the_base() {
        let result = calculate(&TariffRequest {
            kind: TariffKind::AdValorem,
            cif_value: 10000.0,
            units: 0.0,
            ad_valorem_rate: 0.10,
            specific_rate: 0.0,
            preferential_reduction: 0.5,
        });
        assert_eq!(result.base, 1000.0);
        assert_eq!(result.discount, 500.0);
        assert_eq!(result.total, 500.0);
    }

    #[test]
    fn zeroed_request_yields_zeroes() {
        let result = calculate(&TariffRequest::default());
        assert_eq!(result, TariffResult { base: 0.0, discount: 0.0, total: 0.0 });
    }

    #[test]
    fn non_finite_inputs_count_as_zero() {
        let result = calculate(&TariffRequest {
            kind: TariffKind::Mixed,
            cif_value: f64::NAN,
            units: f64::INFINITY,
            ad_valorem_rate: 0.10,
            specific_rate: 2.0,
            preferential_reduction: f64::NAN,
        });
        assert_eq!(result, TariffResult { base: 0.0, discount: 0.0, total: 0.0 });
    }

    #[test]
    fn unknown_kind_yields_zero_base() {
        let result = calculate(&TariffRequest {
            kind: TariffKind::Unknown,
            cif_value: 10000.0,
            units: 100.0,
            ad_valorem_rate: 0.10,
            specific_rate: 5.0,
            preferential_reduction: 0.2,
        });
        assert_eq!(result, TariffResult { base: 0.0, discount: 0.0, total: 0.0 });
    }

    #[test]
    fn reduction_above_one_clamps_total_at_zero() {
        let result = calculate(&TariffRequest {
            kind: TariffKind::AdValorem,
            cif_value: 1000.0,
            units: 0.0,
            ad_valorem_rate: 0.10,
            specific_rate: 0.0,
            preferential_reduction: 1.5,
        });
        assert_eq!(result.base, 100.0);
        assert_eq!(result.discount, 150.0);
        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn irrelevant_fields_are_ignored_per_kind() {
        // Specific ignores CIF and the ad valorem rate
        let result = calculate(&TariffRequest {
            kind: TariffKind::Specific,
            cif_value: 99999.0,
            units: 10.0,
            ad_valorem_rate: 0.99,
            specific_rate: 1.0,
            preferential_reduction: 0.0,
        });
        assert_eq!(result.base, 10.0);
    }

    #[test]
    fn kind_decodes_from_wire_ids() {
        let kind: TariffKind = serde_json::from_str("\"especifico\"").expect("decode kind");
        assert_eq!(kind, TariffKind::Specific);

        let kind: TariffKind = serde_json::from_str("\"algo_raro\"").expect("decode unknown kind");
        assert_eq!(kind, TariffKind::Unknown);
    }

    #[test]
    fn kind_ids_round_trip() {
        for kind in TariffKind::all() {
            let json = serde_json::to_string(kind).expect("encode kind");
            assert_eq!(json, format!("\"{}\"", kind.id()));
        }
    }
}
