//! Configuration types for Peloton registration.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources. Every field is optional in the source and falls back to
//! the built-in registration rules.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining validation and registration settings.
//! - [`ValidationSection`] - Email domain and categories accepted by the validator.
//! - [`RegistrationSection`] - How participant codes are formatted.
//!
//! # Example
//!
//! ```
//! # use peloton::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.registration().code_width(), 3);
//! assert_eq!(config.validation_config().email_domain(), "@gmail.com");
//! ```

use serde::Deserialize;

use peloton_parser::ValidationConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Validation rules section.
    #[serde(default)]
    validation: ValidationSection,

    /// Participant registration section.
    #[serde(default)]
    registration: RegistrationSection,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(validation: ValidationSection, registration: RegistrationSection) -> Self {
        Self {
            validation,
            registration,
        }
    }

    /// Returns the validation section.
    pub fn validation(&self) -> &ValidationSection {
        &self.validation
    }

    /// Returns the registration section.
    pub fn registration(&self) -> &RegistrationSection {
        &self.registration
    }

    /// Resolve the validation section into the rules the validator applies.
    pub fn validation_config(&self) -> ValidationConfig {
        let defaults = ValidationConfig::default();
        let email_domain = self
            .validation
            .email_domain
            .as_deref()
            .unwrap_or(defaults.email_domain());
        let categories = self
            .validation
            .categories
            .clone()
            .unwrap_or_else(|| defaults.categories().to_vec());

        ValidationConfig::new(email_domain, categories)
    }
}

/// Overrides for the semantic validation rules.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationSection {
    /// Suffix every email address must end with.
    #[serde(default)]
    email_domain: Option<String>,

    /// Accepted category names.
    #[serde(default)]
    categories: Option<Vec<String>>,
}

impl ValidationSection {
    /// Creates a section overriding the given rules.
    pub fn new(email_domain: Option<String>, categories: Option<Vec<String>>) -> Self {
        Self {
            email_domain,
            categories,
        }
    }

    pub fn email_domain(&self) -> Option<&str> {
        self.email_domain.as_deref()
    }

    pub fn categories(&self) -> Option<&[String]> {
        self.categories.as_deref()
    }
}

/// Participant code settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrationSection {
    /// Digits the sequence number is zero-padded to. Values outside `u16`
    /// are rejected when the configuration is loaded.
    #[serde(default = "RegistrationSection::default_code_width")]
    code_width: u16,
}

impl RegistrationSection {
    const DEFAULT_CODE_WIDTH: u16 = 3;

    /// Creates a section with the given code width.
    pub fn new(code_width: u16) -> Self {
        Self { code_width }
    }

    /// Returns the zero-padding width of participant codes.
    pub fn code_width(&self) -> u16 {
        self.code_width
    }

    fn default_code_width() -> u16 {
        Self::DEFAULT_CODE_WIDTH
    }
}

impl Default for RegistrationSection {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CODE_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        let rules = config.validation_config();

        assert_eq!(rules.email_domain(), "@gmail.com");
        assert_eq!(rules.categories(), ["Elite", "Aficionado", "Juvenil"]);
        assert_eq!(config.registration().code_width(), 3);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: AppConfig = toml::from_str(
            r#"
            [validation]
            email_domain = "@club.mx"
            "#,
        )
        .unwrap();

        let rules = config.validation_config();
        assert_eq!(rules.email_domain(), "@club.mx");
        assert_eq!(rules.categories().len(), 3);
        assert_eq!(config.registration().code_width(), 3);
    }

    #[test]
    fn test_deserialize_full() {
        let config: AppConfig = toml::from_str(
            r#"
            [validation]
            email_domain = "@club.mx"
            categories = ["Master", "Open"]

            [registration]
            code_width = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.validation().categories().map(<[String]>::len), Some(2));
        assert_eq!(config.validation_config().categories(), ["Master", "Open"]);
        assert_eq!(config.registration().code_width(), 5);
    }

    #[test]
    fn test_code_width_out_of_range_rejected() {
        let result = toml::from_str::<AppConfig>("[registration]\ncode_width = 70000\n");
        assert!(result.is_err());

        let result = toml::from_str::<AppConfig>("[registration]\ncode_width = -1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = toml::from_str::<AppConfig>("[registration]\nwidth = 4\n");
        assert!(result.is_err());
    }
}
