//! Source annotations attached to a [`Diagnostic`](crate::error::Diagnostic).

use crate::span::Span;

/// Whether a label marks the offending text or only related context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Primary,
    Secondary,
}

/// A message pinned to a span of registration source.
///
/// A diagnostic normally has one primary label on the statement or token at
/// fault. Secondary labels point elsewhere, e.g. at the
/// `payment_receipt_path` statement when `payment_completed: true;` is the
/// one being reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
    role: Role,
}

impl Label {
    /// Label the text at fault.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self::with_role(span, message, Role::Primary)
    }

    /// Label related text that helps explain the problem.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self::with_role(span, message, Role::Secondary)
    }

    fn with_role(span: Span, message: impl Into<String>, role: Role) -> Self {
        Self {
            span,
            message: message.into(),
            role,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.role == Role::Primary
    }

    pub fn is_secondary(&self) -> bool {
        self.role == Role::Secondary
    }
}
