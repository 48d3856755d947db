//! Participant records built from validated registration attributes.

use std::fmt;

use serde::Serialize;

use peloton_parser::{Attributes, fields};

use crate::error::RecordError;

/// Identifier assigned to a registered participant, e.g. `ELI-001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ParticipantCode(String);

impl ParticipantCode {
    /// Prefix used when the category is too short to provide one.
    pub const FALLBACK_PREFIX: &'static str = "GEN";

    const PREFIX_LEN: usize = 3;

    /// Build the code for the `sequence`-th participant of `category`.
    ///
    /// The prefix is the first three characters of the category upper-cased,
    /// or [`Self::FALLBACK_PREFIX`] for shorter categories. The sequence
    /// number is zero-padded to `width` digits and is never truncated.
    /// `width` is a `u16` because that is the widest padding the formatter
    /// accepts.
    ///
    /// ```
    /// # use peloton::ParticipantCode;
    /// assert_eq!(ParticipantCode::generate("Elite", 1, 3).as_str(), "ELI-001");
    /// assert_eq!(ParticipantCode::generate("U", 42, 4).as_str(), "GEN-0042");
    /// ```
    pub fn generate(category: &str, sequence: u32, width: u16) -> Self {
        let prefix = if category.chars().count() < Self::PREFIX_LEN {
            Self::FALLBACK_PREFIX.to_string()
        } else {
            category
                .chars()
                .take(Self::PREFIX_LEN)
                .flat_map(char::to_uppercase)
                .collect()
        };

        let width = usize::from(width);
        Self(format!("{prefix}-{sequence:0width$}"))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    name: String,
    paternal_surname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    maternal_surname: Option<String>,
    email: String,
    sex: String,
    category: String,
    payment_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    id_document_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payment_receipt_path: Option<String>,
    participant_code: ParticipantCode,
}

impl Participant {
    /// Populate a participant from an attribute mapping.
    ///
    /// Fields not part of the record are ignored. `payment_completed`
    /// defaults to `false` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Missing`] if a required field is absent and
    /// [`RecordError::TypeMismatch`] if any known field has the wrong value
    /// type. The validator type-checks only `email`, `sex` and `category`,
    /// so a validated mapping can still fail here, e.g. with a boolean
    /// `name`.
    pub fn from_attributes(
        attributes: &Attributes,
        participant_code: ParticipantCode,
    ) -> Result<Self, RecordError> {
        let required = |field: &'static str| -> Result<String, RecordError> {
            attributes
                .get_str(field)?
                .map(str::to_string)
                .ok_or(RecordError::Missing(field))
        };
        let optional = |field: &'static str| -> Result<Option<String>, RecordError> {
            Ok(attributes.get_str(field)?.map(str::to_string))
        };

        Ok(Self {
            name: required(fields::NAME)?,
            paternal_surname: required(fields::PATERNAL_SURNAME)?,
            maternal_surname: optional(fields::MATERNAL_SURNAME)?,
            email: required(fields::EMAIL)?,
            sex: required(fields::SEX)?,
            category: required(fields::CATEGORY)?,
            payment_completed: attributes
                .get_bool(fields::PAYMENT_COMPLETED)?
                .unwrap_or(false),
            id_document_path: optional(fields::ID_DOCUMENT_PATH)?,
            payment_receipt_path: optional(fields::PAYMENT_RECEIPT_PATH)?,
            participant_code,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn paternal_surname(&self) -> &str {
        &self.paternal_surname
    }

    pub fn maternal_surname(&self) -> Option<&str> {
        self.maternal_surname.as_deref()
    }

    /// Full name in `name paternal [maternal]` order.
    pub fn full_name(&self) -> String {
        let mut full = format!("{} {}", self.name, self.paternal_surname);
        if let Some(maternal) = &self.maternal_surname {
            full.push(' ');
            full.push_str(maternal);
        }
        full
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn sex(&self) -> &str {
        &self.sex
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn payment_completed(&self) -> bool {
        self.payment_completed
    }

    pub fn id_document_path(&self) -> Option<&str> {
        self.id_document_path.as_deref()
    }

    pub fn payment_receipt_path(&self) -> Option<&str> {
        self.payment_receipt_path.as_deref()
    }

    pub fn participant_code(&self) -> &ParticipantCode {
        &self.participant_code
    }
}
