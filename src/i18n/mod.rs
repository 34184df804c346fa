//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Spanish (Colombia)
    #[default]
    EsCo,
    /// English (US)
    EnUs,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EsCo => "Español",
            Locale::EnUs => "English",
        }
    }

    /// BCP 47 tag, used for persisted preferences
    pub fn as_tag(&self) -> &'static str {
        match self {
            Locale::EsCo => "es-CO",
            Locale::EnUs => "en-US",
        }
    }

    /// Parse a BCP 47 tag; anything Spanish-ish maps to `EsCo`
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.to_lowercase();
        if tag.starts_with("en") {
            Locale::EnUs
        } else {
            Locale::EsCo
        }
    }

    /// Detect the locale from the OS environment
    pub fn from_system() -> Self {
        Self::from_tag(&locale_config::Locale::current().to_string())
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (es, en))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Aranceles – Gestión Aduanera", "Tariffs – Customs Management"));
    map.insert("app-subtitle", ("Colombia · Módulo especializado", "Colombia · Specialized module"));
    map.insert("app-tagline", (
        "Basado en lineamientos del documento interno de aranceles",
        "Based on the internal tariff guidelines document",
    ));
    map.insert("app-footer", (
        "Módulo Aranceles. Esta es una base técnica de referencia. Verifique siempre la norma vigente y la subpartida exacta en fuentes oficiales.",
        "Tariff Module. This is a technical reference base. Always verify current regulations and the exact subheading in official sources.",
    ));

    // Navigation
    map.insert("nav-dashboard", ("Dashboard", "Dashboard"));
    map.insert("nav-library", ("Tipos de Arancel", "Tariff Types"));
    map.insert("nav-classification", ("Clasificación", "Classification"));
    map.insert("nav-simulator", ("Simulador", "Simulator"));
    map.insert("nav-agreements", ("Tratados y exenciones", "Treaties & Exemptions"));
    map.insert("nav-news", ("Noticias y alertas", "News & Alerts"));
    map.insert("nav-resources", ("Recursos", "Resources"));

    // Dashboard
    map.insert("dash-summary", ("Resumen", "Summary"));
    map.insert("dash-stat-kinds", ("Tipos de arancel", "Tariff kinds"));
    map.insert("dash-stat-sectors", ("Sectores ejemplo", "Example sectors"));
    map.insert("dash-stat-range", ("Rango legal", "Legal range"));
    map.insert("dash-stat-agreements", ("TLC registrados", "Registered FTAs"));
    map.insert("dash-distribution", ("Distribución de tipos (ilustrativa)", "Kind distribution (illustrative)"));
    map.insert("dash-range-chart", ("Rango legal (0–40% ad valorem)", "Legal range (0–40% ad valorem)"));
    map.insert("dash-range-min", ("Mínimo legal", "Legal minimum"));
    map.insert("dash-range-max", ("Máximo legal", "Legal maximum"));
    map.insert("dash-quick-links", ("Accesos rápidos", "Quick links"));

    // Tariff library
    map.insert("lib-search-placeholder", (
        "Buscar tipo, descripción o uso...",
        "Search kind, description or usage...",
    ));
    map.insert("lib-sector-examples", ("Ejemplos por sector", "Examples by sector"));

    // Classification
    map.insert("class-structure", ("Cómo se estructura el código", "How the code is structured"));
    map.insert("class-official", ("Consulta oficial:", "Official lookup:"));
    map.insert("class-search-title", ("Buscador (dataset de ejemplo)", "Search (example dataset)"));
    map.insert("class-search-placeholder", (
        "Código (ej. 2203) o descripción (ej. cerveza)",
        "Code (e.g. 2203) or description (e.g. beer)",
    ));

    // Table columns
    map.insert("col-kind", ("Tipo", "Kind"));
    map.insert("col-description", ("Descripción", "Description"));
    map.insert("col-basis", ("Base de cálculo", "Calculation basis"));
    map.insert("col-example", ("Ejemplo", "Example"));
    map.insert("col-usage", ("Uso", "Usage"));
    map.insert("col-code", ("Código", "Code"));
    map.insert("col-unit", ("Unidad", "Unit"));
    map.insert("col-ad-valorem", ("Tarifa Ad Valorem", "Ad Valorem Rate"));
    map.insert("col-specific", ("Tarifa Específica", "Specific Rate"));

    // Simulator
    map.insert("sim-parameters", ("Parámetros", "Parameters"));
    map.insert("sim-result", ("Resultado", "Result"));
    map.insert("sim-kind", ("Tipo de arancel", "Tariff kind"));
    map.insert("sim-cif", ("Valor CIF (USD)", "CIF value (USD)"));
    map.insert("sim-units", ("Unidades físicas", "Physical units"));
    map.insert("sim-ad-valorem", ("Tasa ad valorem (%)", "Ad valorem rate (%)"));
    map.insert("sim-specific", ("Tasa específica (USD / unidad)", "Specific rate (USD / unit)"));
    map.insert("sim-preference", ("Reducción por TLC (%)", "FTA reduction (%)"));
    map.insert("sim-preference-hint", (
        "Ej.: 100 = exención total; 0 = sin preferencia",
        "E.g.: 100 = full exemption; 0 = no preference",
    ));
    map.insert("sim-base", ("Base calculada", "Calculated base"));
    map.insert("sim-discount", ("Descuento TLC", "FTA discount"));
    map.insert("sim-total", ("Total a pagar", "Total due"));
    map.insert("sim-export", ("Exportar TXT", "Export TXT"));

    // Agreements
    map.insert("agr-search-placeholder", ("Buscar tratado o país...", "Search treaty or country..."));
    map.insert("agr-countries", ("Países: ", "Countries: "));
    map.insert("agr-benefit", ("Beneficio: ", "Benefit: "));
    map.insert("agr-origin-note", (
        "Aplica según reglas de origen y subpartida.",
        "Applies per rules of origin and subheading.",
    ));

    // News
    map.insert("news-publish", ("Publicar alerta", "Publish alert"));
    map.insert("news-list", ("Noticias y alertas", "News & alerts"));
    map.insert("news-date-placeholder", ("Fecha (YYYY-MM-DD)", "Date (YYYY-MM-DD)"));
    map.insert("news-title-placeholder", ("Título", "Title"));
    map.insert("news-detail-placeholder", ("Detalle", "Detail"));
    map.insert("news-source-placeholder", ("Fuente", "Source"));
    map.insert("news-url-placeholder", ("URL (opcional)", "URL (optional)"));
    map.insert("news-publish-button", ("Publicar", "Publish"));
    map.insert("news-no-date", ("Sin fecha", "No date"));
    map.insert("news-view-source", ("Ver fuente", "View source"));

    // Resources
    map.insert("res-guides", ("Guías y documentación", "Guides & documentation"));
    map.insert("res-notes", ("Notas clave", "Key notes"));
    map.insert("res-disclaimer", (
        "*Verifica siempre la norma vigente y la subpartida exacta.",
        "*Always verify current regulations and the exact subheading.",
    ));
    map.insert("res-note-range", (
        "Los aranceles pueden ir de 0% a 40% (según subpartida).",
        "Tariffs can range from 0% to 40% (per subheading).",
    ));
    map.insert("res-note-cif", (
        "La base ad valorem es el valor CIF: Costo + Seguro + Flete.",
        "The ad valorem base is the CIF value: Cost + Insurance + Freight.",
    ));
    map.insert("res-note-unit", (
        "En específico/mixto, define la unidad (L, kg, unidad, etc.).",
        "For specific/mixed, define the unit (L, kg, unit, etc.).",
    ));
    map.insert("res-note-origin", (
        "Las preferencias dependen del origen y reglas de cada acuerdo.",
        "Preferences depend on origin and the rules of each agreement.",
    ));

    // Log panel
    map.insert("log-title", ("Actividad", "Activity"));
    map.insert("log-clear", ("Limpiar", "Clear"));

    // Table
    map.insert("table-no-data", ("Sin datos", "No data"));
    map.insert("table-loading", ("Cargando...", "Loading..."));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(es, en)) = translations().get(key) {
        match locale {
            Locale::EsCo => SharedString::from(es),
            Locale::EnUs => SharedString::from(en),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_by_locale() {
        assert_eq!(t(Locale::EsCo, "sim-total"), "Total a pagar");
        assert_eq!(t(Locale::EnUs, "sim-total"), "Total due");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::EsCo, "missing-key"), "missing-key");
    }

    #[test]
    fn tag_round_trip() {
        assert_eq!(Locale::from_tag(Locale::EsCo.as_tag()), Locale::EsCo);
        assert_eq!(Locale::from_tag(Locale::EnUs.as_tag()), Locale::EnUs);
        assert_eq!(Locale::from_tag("fr-FR"), Locale::EsCo);
    }
}
