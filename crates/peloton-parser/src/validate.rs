//! Semantic validation of a parsed registration.
//!
//! ## Validations Performed
//!
//! 1. **Required fields**: `name`, `paternal_surname`, `email`, `sex` and
//!    `category` must be present. Missing fields are reported one by one and
//!    no further rule runs.
//! 2. **Email domain**: `email` must be a string ending with the configured
//!    domain (`@gmail.com` by default).
//! 3. **Sex**: `sex` must be the string `M` or `F`.
//! 4. **Category**: `category` must be one of the configured categories.
//! 5. **Payment consistency**: when `payment_completed` is `true`,
//!    `payment_receipt_path` must be a non-empty string.
//!
//! Rules 2 to 5 all run and their diagnostics accumulate.

use log::debug;

use crate::{
    attributes::{Attributes, Value},
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    fields,
    span::Span,
};

/// Configurable parts of the registration rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    email_domain: String,
    categories: Vec<String>,
}

impl ValidationConfig {
    pub const DEFAULT_EMAIL_DOMAIN: &'static str = "@gmail.com";
    pub const DEFAULT_CATEGORIES: [&'static str; 3] = ["Elite", "Aficionado", "Juvenil"];

    /// Create a configuration.
    ///
    /// # Arguments
    ///
    /// * `email_domain` - Suffix every email address must end with
    /// * `categories` - Accepted category names, compared case-sensitively
    pub fn new(email_domain: impl Into<String>, categories: Vec<String>) -> Self {
        Self {
            email_domain: email_domain.into(),
            categories,
        }
    }

    pub fn email_domain(&self) -> &str {
        &self.email_domain
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    fn accepts_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_EMAIL_DOMAIN,
            Self::DEFAULT_CATEGORIES.map(String::from).to_vec(),
        )
    }
}

/// Validate with the default rules.
///
/// Returns the semantic diagnostics in rule order; an empty vector means the
/// registration is valid.
pub fn validate(attributes: &Attributes) -> Vec<Diagnostic> {
    validate_with(attributes, &ValidationConfig::default())
}

/// Validate with the given rules.
pub fn validate_with(attributes: &Attributes, config: &ValidationConfig) -> Vec<Diagnostic> {
    let mut validator = Validator::new(attributes, config);
    validator.run();
    validator.finish()
}

struct Validator<'a> {
    attributes: &'a Attributes,
    config: &'a ValidationConfig,
    diagnostics: DiagnosticCollector,
}

impl<'a> Validator<'a> {
    fn new(attributes: &'a Attributes, config: &'a ValidationConfig) -> Self {
        Self {
            attributes,
            config,
            diagnostics: DiagnosticCollector::new(),
        }
    }

    fn run(&mut self) {
        if !self.check_required_fields() {
            debug!(missing = self.diagnostics.len(); "Required fields missing, skipping remaining rules");
            return;
        }

        self.check_email();
        self.check_sex();
        self.check_category();
        self.check_payment();
    }

    fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics.into_diagnostics()
    }

    /// Report every missing required field. Returns `true` if none is missing.
    fn check_required_fields(&mut self) -> bool {
        for field in fields::REQUIRED {
            if !self.attributes.contains(field) {
                self.diagnostics.emit(
                    Diagnostic::error(format!("required field '{field}' was not found"))
                        .with_code(ErrorCode::E200)
                        .with_help(format!("add a statement such as `{field}: \"...\";`")),
                );
            }
        }
        self.diagnostics.is_empty()
    }

    /// Fetch a field that must hold a string, reporting it if it does not.
    ///
    /// Returns `None` for absent or mistyped fields.
    fn string_field(&mut self, field: &str) -> Option<&'a str> {
        let attribute = self.attributes.attribute(field)?;
        match attribute.value() {
            Value::String(s) => Some(s.as_str()),
            Value::Boolean(_) => {
                self.diagnostics.emit(
                    Diagnostic::error(format!("field '{field}' must be a string"))
                        .with_code(ErrorCode::E201)
                        .with_label(attribute.span(), "boolean given here")
                        .with_help("wrap the value in double quotes"),
                );
                None
            }
        }
    }

    fn check_email(&mut self) {
        let Some(email) = self.string_field(fields::EMAIL) else {
            return;
        };

        let domain = self.config.email_domain();
        if !email.ends_with(domain) {
            let span = self.span_of(fields::EMAIL);
            self.diagnostics.emit(
                Diagnostic::error(format!("email address must end with '{domain}'"))
                    .with_code(ErrorCode::E202)
                    .with_label(span, "declared here")
                    .with_help(format!("register with an address ending in '{domain}'")),
            );
        }
    }

    fn check_sex(&mut self) {
        let Some(sex) = self.string_field(fields::SEX) else {
            return;
        };

        if sex != "M" && sex != "F" {
            let span = self.span_of(fields::SEX);
            self.diagnostics.emit(
                Diagnostic::error("value of 'sex' must be 'M' or 'F'")
                    .with_code(ErrorCode::E203)
                    .with_label(span, "declared here"),
            );
        }
    }

    fn check_category(&mut self) {
        let Some(category) = self.string_field(fields::CATEGORY) else {
            return;
        };

        if !self.config.accepts_category(category) {
            let span = self.span_of(fields::CATEGORY);
            let accepted = self.config.categories().join(", ");
            self.diagnostics.emit(
                Diagnostic::error(format!("category '{category}' is not valid"))
                    .with_code(ErrorCode::E204)
                    .with_label(span, "unknown category")
                    .with_help(format!("expected one of: {accepted}")),
            );
        }
    }

    /// A completed payment needs a receipt. Mistyped payment fields are not
    /// reported here; only a boolean `true` triggers the rule.
    fn check_payment(&mut self) {
        let Some(payment) = self.attributes.attribute(fields::PAYMENT_COMPLETED) else {
            return;
        };
        if payment.value().as_bool() != Some(true) {
            return;
        }

        let receipt = self.attributes.attribute(fields::PAYMENT_RECEIPT_PATH);
        let has_receipt = receipt
            .and_then(|r| r.value().as_str())
            .is_some_and(|path| !path.is_empty());
        if has_receipt {
            return;
        }

        let mut diagnostic = Diagnostic::error(
            "if 'payment_completed' is true, 'payment_receipt_path' must not be empty",
        )
        .with_code(ErrorCode::E205)
        .with_label(payment.span(), "payment marked as completed here")
        .with_help("add `payment_receipt_path: \"...\";` pointing at the receipt");
        if let Some(receipt) = receipt {
            diagnostic = diagnostic.with_secondary_label(receipt.span(), "receipt given here");
        }
        self.diagnostics.emit(diagnostic);
    }

    fn span_of(&self, field: &str) -> Span {
        self.attributes.span(field).unwrap_or_default()
    }
}
