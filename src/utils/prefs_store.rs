//! PrefsStore - Local Preference Storage

use std::fs;

use anyhow::Result;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::i18n::Locale;
use crate::utils::fs::get_or_create_config_dir;

/// File name for the persisted preferences
pub const PREFS_FILE: &str = "prefs.json";

/// Persisted user preferences: UI locale and the last simulation parameters,
/// restored as form defaults on the next launch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prefs {
    pub locale: String,
    pub simulator: SimulatorPrefs,
}

/// Last-used simulator parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorPrefs {
    pub kind: String,
    pub cif_value: f64,
    pub units: f64,
    pub ad_valorem_rate: f64,
    pub specific_rate: f64,
    pub preferential_reduction: f64,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            locale: "es-CO".to_string(),
            simulator: SimulatorPrefs::default(),
        }
    }
}

impl Default for SimulatorPrefs {
    fn default() -> Self {
        Self {
            kind: "ad_valorem".to_string(),
            cif_value: 10000.0,
            units: 100.0,
            ad_valorem_rate: 0.1,
            specific_rate: 2.0,
            preferential_reduction: 0.0,
        }
    }
}

/// Load a JSON config file from the config directory
pub fn load_config<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    let path = get_or_create_config_dir()?.join(filename);

    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(&path)?;
    let config: T = serde_json::from_str(&content)?;
    Ok(config)
}

/// Save a JSON config file to the config directory
pub fn save_config<T: Serialize>(filename: &str, config: &T) -> Result<()> {
    let path = get_or_create_config_dir()?.join(filename);
    let content = serde_json::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}

/// Load the persisted preferences, falling back to defaults.
/// On a first run with no file yet, the locale follows the OS.
pub fn load_prefs() -> Prefs {
    let has_file = get_or_create_config_dir()
        .map(|dir| dir.join(PREFS_FILE).exists())
        .unwrap_or(false);

    if !has_file {
        return Prefs {
            locale: Locale::from_system().as_tag().to_string(),
            ..Prefs::default()
        };
    }

    load_config(PREFS_FILE).unwrap_or_default()
}

/// Persist the preferences
pub fn save_prefs(prefs: &Prefs) -> Result<()> {
    save_config(PREFS_FILE, prefs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefs_match_form_defaults() {
        let prefs = Prefs::default();
        assert_eq!(prefs.locale, "es-CO");
        assert_eq!(prefs.simulator.kind, "ad_valorem");
        assert_eq!(prefs.simulator.cif_value, 10000.0);
        assert_eq!(prefs.simulator.units, 100.0);
        assert_eq!(prefs.simulator.ad_valorem_rate, 0.1);
        assert_eq!(prefs.simulator.specific_rate, 2.0);
        assert_eq!(prefs.simulator.preferential_reduction, 0.0);
    }

    #[test]
    fn prefs_round_trip_through_json() {
        let prefs = Prefs {
            locale: "en-US".to_string(),
            simulator: SimulatorPrefs {
                kind: "mixto".to_string(),
                cif_value: 5000.0,
                units: 10.0,
                ad_valorem_rate: 0.05,
                specific_rate: 2.0,
                preferential_reduction: 1.0,
            },
        };

        let json = serde_json::to_string(&prefs).expect("serialize prefs");
        let back: Prefs = serde_json::from_str(&json).expect("deserialize prefs");
        assert_eq!(back.locale, "en-US");
        assert_eq!(back.simulator.kind, "mixto");
        assert_eq!(back.simulator.preferential_reduction, 1.0);
    }
}
