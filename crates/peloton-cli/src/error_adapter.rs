//! Bridges [`PelotonError`] to miette's graphical reports.
//!
//! A [`PelotonError::Parse`] carries every syntax or semantic diagnostic
//! found in one run; each becomes its own [`Reportable`] so the CLI prints
//! them all, each with a snippet of the registration source.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceCode, SourceSpan};

use peloton::PelotonError;
use peloton_parser::{Span, error::Diagnostic};

/// One error the CLI renders as a separate report.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A located diagnostic and the source it points into.
    Diagnostic { diag: &'a Diagnostic, src: &'a str },
    /// A failure with no source location: I/O, configuration, record or export.
    Error(&'a PelotonError),
}

impl Reportable<'_> {
    fn error_code(err: &PelotonError) -> Option<&'static str> {
        match err {
            PelotonError::Io(_) => Some("peloton::io"),
            PelotonError::Parse { .. } => None,
            PelotonError::Record(_) => Some("peloton::record"),
            PelotonError::Config(_) => Some("peloton::config"),
            PelotonError::Export(_) => Some("peloton::export"),
        }
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Diagnostic { diag, .. } => f.write_str(diag.message()),
            Self::Error(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Diagnostic { .. } => None,
            Self::Error(err) => err.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Self::Diagnostic { diag, .. } => diag
                .code()
                .map(|code| Box::new(code) as Box<dyn fmt::Display>),
            Self::Error(err) => {
                Self::error_code(err).map(|code| Box::new(code) as Box<dyn fmt::Display>)
            }
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Self::Diagnostic { diag, .. } => diag
                .help()
                .map(|help| Box::new(help) as Box<dyn fmt::Display + 'a>),
            Self::Error(_) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self {
            Self::Diagnostic { src, .. } => Some(src as &dyn SourceCode),
            Self::Error(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let Self::Diagnostic { diag, .. } = self else {
            return None;
        };
        if diag.labels().is_empty() {
            return None;
        }

        Some(Box::new(diag.labels().iter().map(|label| {
            let message = Some(label.message().to_string());
            let span = to_source_span(label.span());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

fn to_source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Split a [`PelotonError`] into the reports the CLI prints, one per
/// diagnostic for parse failures and a single one otherwise.
pub fn to_reportables(err: &PelotonError) -> Vec<Reportable<'_>> {
    match err {
        PelotonError::Parse { err, src } => err
            .diagnostics()
            .iter()
            .map(|diag| Reportable::Diagnostic { diag, src })
            .collect(),
        other => vec![Reportable::Error(other)],
    }
}

#[cfg(test)]
mod tests {
    use peloton::{RecordError, Registrar};
    use peloton_parser::error::{ErrorCode, ParseError};

    use super::*;

    fn rendered(reportable: &Reportable<'_>) -> String {
        let mut out = String::new();
        miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor())
            .render_report(&mut out, reportable)
            .unwrap();
        out
    }

    #[test]
    fn test_single_diagnostic() {
        let diag = Diagnostic::error("unterminated string literal")
            .with_code(ErrorCode::E001)
            .with_label(Span::new(6..10), "string starts here")
            .with_help("add closing `\"`");
        let err = PelotonError::new_parse_error(ParseError::from(diag), "name: \"Ana");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        let reportable = &reportables[0];
        assert!(matches!(reportable, Reportable::Diagnostic { .. }));
        assert_eq!(reportable.to_string(), "unterminated string literal");
        assert_eq!(reportable.code().map(|c| c.to_string()).as_deref(), Some("E001"));
        assert_eq!(
            reportable.help().map(|h| h.to_string()).as_deref(),
            Some("add closing `\"`")
        );
        assert!(reportable.source_code().is_some());

        let report = rendered(reportable);
        assert!(report.contains("string starts here"), "{report}");
        assert!(report.contains("name: \"Ana"), "{report}");
    }

    #[test]
    fn test_every_validation_diagnostic_is_reported() {
        let source = r#"
            name: "A";
            paternal_surname: "B";
            email: "a@yahoo.com";
            sex: "X";
            category: "Pro";
        "#;
        let err = Registrar::default().register(source, 1).unwrap_err();

        let messages: Vec<_> = to_reportables(&err).iter().map(|r| r.to_string()).collect();
        assert_eq!(
            messages,
            [
                "email address must end with '@gmail.com'",
                "value of 'sex' must be 'M' or 'F'",
                "category 'Pro' is not valid",
            ]
        );
    }

    #[test]
    fn test_non_parse_error() {
        let err = PelotonError::from(RecordError::Missing("email"));

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        let reportable = &reportables[0];
        assert!(matches!(reportable, Reportable::Error(_)));
        assert_eq!(reportable.to_string(), "Record error: field 'email' is missing");
        assert_eq!(
            reportable.code().map(|c| c.to_string()).as_deref(),
            Some("peloton::record")
        );
        assert!(reportable.labels().is_none());
        assert!(reportable.source_code().is_none());
    }

    #[test]
    fn test_primary_and_secondary_labels() {
        let diag = Diagnostic::error("receipt missing")
            .with_label(Span::new(0..5), "payment marked complete here")
            .with_secondary_label(Span::new(10..15), "receipt is empty");
        let reportable = Reportable::Diagnostic {
            diag: &diag,
            src: "some source code",
        };

        let labels: Vec<_> = reportable.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].label(), Some("payment marked complete here"));
        assert!(labels[0].primary());
        assert_eq!(labels[1].offset(), 10);
        assert_eq!(labels[1].len(), 5);
        assert!(!labels[1].primary());
    }

    #[test]
    fn test_diagnostic_without_labels() {
        let diag = Diagnostic::error("no location");
        let reportable = Reportable::Diagnostic { diag: &diag, src: "" };

        assert!(reportable.labels().is_none());
        assert!(reportable.code().is_none());
    }
}
