//! I18nState - Active Locale Selection
//!
//! Locale state behind the header toggle.

use crate::i18n::Locale;

#[derive(Debug, Clone, Default)]
pub struct I18nState {
    pub locale: Locale,
}

impl I18nState {
    /// Flip between Spanish and English
    pub fn toggle_locale(&mut self) {
        self.locale = match self.locale {
            Locale::EsCo => Locale::EnUs,
            Locale::EnUs => Locale::EsCo,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_spanish() {
        assert_eq!(I18nState::default().locale, Locale::EsCo);
    }

    #[test]
    fn toggles_between_locales() {
        let mut state = I18nState::default();
        state.toggle_locale();
        assert_eq!(state.locale, Locale::EnUs);
        state.toggle_locale();
        assert_eq!(state.locale, Locale::EsCo);
    }
}
