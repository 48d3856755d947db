//! Peloton - registration records for cycling events.
//!
//! Parses the Peloton registration language, applies the registration rules,
//! and turns accepted source into [`Participant`] records with assigned
//! [`ParticipantCode`]s.

pub mod config;

mod error;
mod participant;

pub use peloton_parser::{Attributes, Value, ValueKind};

pub use error::{PelotonError, RecordError};
pub use participant::{Participant, ParticipantCode};

use log::{debug, info, trace};

use peloton_parser::{ValidationConfig, fields};

use config::AppConfig;

/// Builder for parsing and registering participants.
///
/// # Examples
///
/// ```rust
/// use peloton::{Registrar, config::AppConfig};
///
/// let source = r#"
///     name: "Ana";
///     paternal_surname: "Pérez";
///     email: "ana@gmail.com";
///     sex: "F";
///     category: "Elite";
/// "#;
///
/// let registrar = Registrar::new(AppConfig::default());
///
/// // Parse and validate only
/// let attributes = registrar.parse(source).expect("Failed to parse");
/// assert_eq!(attributes.len(), 5);
///
/// // Or build the participant record
/// let participant = registrar.register(source, 1).expect("Failed to register");
/// assert_eq!(participant.participant_code().as_str(), "ELI-001");
/// ```
#[derive(Debug, Default)]
pub struct Registrar {
    config: AppConfig,
    rules: ValidationConfig,
}

impl Registrar {
    /// Create a new registrar with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including validation and code settings
    pub fn new(config: AppConfig) -> Self {
        let rules = config.validation_config();
        Self { config, rules }
    }

    /// Returns the configuration this registrar was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse and validate source text into an attribute mapping.
    ///
    /// # Errors
    ///
    /// Returns [`PelotonError::Parse`] holding the syntax diagnostics, or the
    /// semantic diagnostics if the source is well-formed.
    pub fn parse(&self, source: &str) -> Result<Attributes, PelotonError> {
        info!("Parsing registration");

        let attributes = peloton_parser::parse(source, &self.rules)
            .map_err(|err| PelotonError::new_parse_error(err, source))?;

        debug!(fields = attributes.len(); "Registration parsed successfully");
        trace!(attributes:?; "Parsed attributes");

        Ok(attributes)
    }

    /// Parse, validate and populate a participant record.
    ///
    /// # Arguments
    ///
    /// * `source` - Registration source text
    /// * `sequence` - Ordinal of this participant within its category, used
    ///   for the participant code
    ///
    /// # Errors
    ///
    /// Returns [`PelotonError::Parse`] for syntax or validation failures, and
    /// [`PelotonError::Record`] if a field the validator does not type-check
    /// holds the wrong kind of value (e.g. `name: true;`).
    pub fn register(&self, source: &str, sequence: u32) -> Result<Participant, PelotonError> {
        let attributes = self.parse(source)?;

        let category = attributes
            .get_str(fields::CATEGORY)
            .map_err(RecordError::from)?
            .ok_or(RecordError::Missing(fields::CATEGORY))?;
        let code = ParticipantCode::generate(
            category,
            sequence,
            self.config.registration().code_width(),
        );

        let participant = Participant::from_attributes(&attributes, code)?;
        info!(code:% = participant.participant_code(); "Participant registered");

        Ok(participant)
    }
}
