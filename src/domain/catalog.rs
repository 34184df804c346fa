//! Catalog - Seed Reference Data
//!
//! Static datasets behind the library, classification, agreement, and
//! resource panels. Sourced from the internal tariff guidelines document;
//! replace with live feeds if an official integration ever lands.

use crate::domain::tariff::TariffKind;

/// One tariff kind as presented in the library table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TariffTypeInfo {
    pub kind: TariffKind,
    pub name: &'static str,
    pub description: &'static str,
    pub basis: &'static str,
    pub example: &'static str,
    pub usage: &'static str,
}

/// Sector with representative products
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorExample {
    pub sector: &'static str,
    pub products: &'static [&'static str],
    pub observation: &'static str,
}

/// One level of the 10-digit classification code
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationLevel {
    pub label: &'static str,
    pub value: &'static str,
}

/// Example subheading with its rates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TariffCode {
    pub code: &'static str,
    pub description: &'static str,
    pub unit: &'static str,
    pub kind: TariffKind,
    pub ad_valorem_rate: f64,
    pub specific_rate: f64,
}

/// Preferential trade agreement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeAgreement {
    pub id: &'static str,
    pub name: &'static str,
    pub countries: &'static [&'static str],
    pub benefit: &'static str,
}

/// External reference link
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Legal ad valorem bounds, in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegalRange {
    pub min: u8,
    pub max: u8,
}

/// Colombian legal ad valorem range
pub const LEGAL_RANGE: LegalRange = LegalRange { min: 0, max: 40 };

pub static TARIFF_TYPES: &[TariffTypeInfo] = &[
    TariffTypeInfo {
        kind: TariffKind::AdValorem,
        name: "Arancel Ad Valorem",
        description: "Tarifa expresada como porcentaje sobre el valor comercial (CIF) del producto importado.",
        basis: "% sobre valor CIF (Costo + Seguro + Flete)",
        example: "10% sobre CIF de 10.000 USD => 1.000 USD",
        usage: "Más común; mayoría de productos",
    },
    TariffTypeInfo {
        kind: TariffKind::Specific,
        name: "Arancel Específico",
        description: "Tarifa fija por unidad física (peso, volumen, cantidad).",
        basis: "Monto fijo por unidad física",
        example: "5 USD por unidad; 100 und => 500 USD",
        usage: "Frecuente en agro, combustibles, algunos textiles",
    },
    TariffTypeInfo {
        kind: TariffKind::Mixed,
        name: "Arancel Mixto",
        description: "Combinación de ad valorem + específico por unidad.",
        basis: "% sobre CIF + monto fijo por unidad",
        example: "5% CIF (10.000 => 500) + 2 USD x 100 und => 200; total 700 USD",
        usage: "Menos frecuente; productos sensibles",
    },
];

pub static SECTOR_EXAMPLES: &[SectorExample] = &[
    SectorExample {
        sector: "Agropecuario",
        products: &["Arroz", "Leche", "Maíz blanco", "Carne de res", "Azúcar"],
        observation: "Pueden tener tarifas específicas o franjas arancelarias",
    },
    SectorExample {
        sector: "Automotriz",
        products: &["Vehículos", "Partes y repuestos"],
        observation: "Aranceles variables ~5%–35% según subpartida",
    },
    SectorExample {
        sector: "Bebidas alcohólicas",
        products: &["Cerveza", "Fermentados"],
        observation: "Aranceles específicos por litro o ad valorem por graduación",
    },
    SectorExample {
        sector: "Perfumería y cosméticos",
        products: &["Perfumes", "Cosméticos"],
        observation: "Tarifa por kg o ad valorem, según clasificación",
    },
];

pub static CLASSIFICATION_LEVELS: &[ClassificationLevel] = &[
    ClassificationLevel {
        label: "Sistema Armonizado (SA)",
        value: "Base internacional (OMA), 6 dígitos",
    },
    ClassificationLevel {
        label: "NANDINA (Com. Andina)",
        value: "Dígitos 7-8",
    },
    ClassificationLevel {
        label: "Arancel Colombiano",
        value: "Dígitos 9-10 (nacionales)",
    },
    ClassificationLevel {
        label: "Importancia",
        value: "La correcta clasificación determina el arancel y evita sanciones",
    },
];

pub static TARIFF_CODES: &[TariffCode] = &[
    TariffCode {
        code: "2203.00.00.00",
        description: "Cerveza de malta",
        unit: "L",
        kind: TariffKind::Specific,
        ad_valorem_rate: 0.0,
        specific_rate: 0.35,
    },
    TariffCode {
        code: "8703.23.90.00",
        description: "Vehículos turismos, cilindrada 1500-3000cc, otros",
        unit: "Unidad",
        kind: TariffKind::AdValorem,
        ad_valorem_rate: 0.25,
        specific_rate: 0.0,
    },
    TariffCode {
        code: "3303.00.00.00",
        description: "Perfumes y aguas de tocador",
        unit: "kg",
        kind: TariffKind::Mixed,
        ad_valorem_rate: 0.05,
        specific_rate: 2.0,
    },
];

pub static TRADE_AGREEMENTS: &[TradeAgreement] = &[
    TradeAgreement {
        id: "can",
        name: "Comunidad Andina (CAN)",
        countries: &["Bolivia", "Colombia", "Ecuador", "Perú"],
        benefit: "Preferencias arancelarias según reglas de origen",
    },
    TradeAgreement {
        id: "ap",
        name: "Alianza del Pacífico",
        countries: &["Chile", "Colombia", "México", "Perú"],
        benefit: "Desgravación progresiva para múltiples subpartidas",
    },
    TradeAgreement {
        id: "usa",
        name: "Estados Unidos (TLC)",
        countries: &["Colombia", "Estados Unidos"],
        benefit: "Reducciones/eliminaciones por capítulo con origen calificado",
    },
    TradeAgreement {
        id: "ue",
        name: "Unión Europea (Acuerdo)",
        countries: &["Colombia", "UE"],
        benefit: "Preferencias por sectores (agro, industria)",
    },
];

/// Quick links shown on the dashboard
pub static QUICK_LINKS: &[ResourceLink] = &[
    ResourceLink {
        label: "Consulta Arancelaria DIAN",
        url: "https://muisca.dian.gov.co/WebArancel/DefMenuConsultas.faces",
    },
    ResourceLink {
        label: "Guía MinCIT – Importar a Colombia",
        url: "https://www.mincit.gov.co/mincomercioexterior/como-importar-a-colombia",
    },
    ResourceLink {
        label: "Arancel – Legis",
        url: "https://arancel.legis.com.co",
    },
];

/// Guides listed on the resources panel
pub static RESOURCE_GUIDES: &[ResourceLink] = &[
    ResourceLink {
        label: "DIAN – Web Arancel (consulta oficial)",
        url: "https://muisca.dian.gov.co/WebArancel/DefMenuConsultas.faces",
    },
    ResourceLink {
        label: "Política arancelaria – Bancolombia",
        url: "https://www.bancolombia.com/negocios/actualizate/comercio-internacional/politica-arancelaria-colombia",
    },
    ResourceLink {
        label: "Cómo importar – MinCIT",
        url: "https://www.mincit.gov.co/mincomercioexterior/como-importar-a-colombia",
    },
];

/// Official classification lookup, linked from the classification panel
pub const DIAN_LOOKUP: ResourceLink = ResourceLink {
    label: "DIAN – Web Arancel",
    url: "https://muisca.dian.gov.co/WebArancel/DefMenuConsultas.faces",
};

/// Case-insensitive library filter over name, description, and usage
pub fn filter_tariff_types(query: &str) -> Vec<&'static TariffTypeInfo> {
    let q = query.to_lowercase();
    TARIFF_TYPES
        .iter()
        .filter(|t| {
            t.name.to_lowercase().contains(&q)
                || t.description.to_lowercase().contains(&q)
                || t.usage.to_lowercase().contains(&q)
        })
        .collect()
}

/// Subheading search over code and description; a blank query returns all rows
pub fn filter_tariff_codes(query: &str) -> Vec<&'static TariffCode> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return TARIFF_CODES.iter().collect();
    }
    TARIFF_CODES
        .iter()
        .filter(|c| c.code.to_lowercase().contains(&q) || c.description.to_lowercase().contains(&q))
        .collect()
}

/// Agreement search over name and member countries; a blank query returns all
pub fn filter_agreements(query: &str) -> Vec<&'static TradeAgreement> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return TRADE_AGREEMENTS.iter().collect();
    }
    TRADE_AGREEMENTS
        .iter()
        .filter(|a| {
            a.name.to_lowercase().contains(&q) || a.countries.join(",").to_lowercase().contains(&q)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_queries_return_everything() {
        assert_eq!(filter_tariff_types("").len(), TARIFF_TYPES.len());
        assert_eq!(filter_tariff_codes("  ").len(), TARIFF_CODES.len());
        assert_eq!(filter_agreements("").len(), TRADE_AGREEMENTS.len());
    }

    #[test]
    fn library_filter_matches_any_text_field() {
        let by_name = filter_tariff_types("mixto");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].kind, TariffKind::Mixed);

        let by_usage = filter_tariff_types("agro");
        assert_eq!(by_usage.len(), 1);
        assert_eq!(by_usage[0].kind, TariffKind::Specific);
    }

    #[test]
    fn library_filter_is_case_insensitive() {
        // Matches the ad valorem entry by name and the mixed entry by description
        assert_eq!(filter_tariff_types("AD VALOREM").len(), 2);
    }

    #[test]
    fn code_search_matches_code_prefix_or_description() {
        let by_code = filter_tariff_codes("2203");
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].description, "Cerveza de malta");

        let by_description = filter_tariff_codes("cerveza");
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].code, "2203.00.00.00");
    }

    #[test]
    fn code_search_trims_whitespace() {
        assert_eq!(filter_tariff_codes("  perfumes ").len(), 1);
    }

    #[test]
    fn agreement_search_matches_countries() {
        let by_country = filter_agreements("méxico");
        assert_eq!(by_country.len(), 1);
        assert_eq!(by_country[0].id, "ap");

        let by_name = filter_agreements("unión");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "ue");
    }

    #[test]
    fn unmatched_query_returns_empty() {
        assert!(filter_tariff_codes("9999").is_empty());
        assert!(filter_agreements("japón").is_empty());
    }

    #[test]
    fn seed_counts_match_the_source_document() {
        assert_eq!(TARIFF_TYPES.len(), 3);
        assert_eq!(SECTOR_EXAMPLES.len(), 4);
        assert_eq!(CLASSIFICATION_LEVELS.len(), 4);
        assert_eq!(TARIFF_CODES.len(), 3);
        assert_eq!(TRADE_AGREEMENTS.len(), 4);
        assert_eq!(LEGAL_RANGE.min, 0);
        assert_eq!(LEGAL_RANGE.max, 40);
    }
}
