//! Broadcast-compliance rules for tag metadata

pub mod engine;
pub mod genre;
pub mod message;

use serde::Serialize;

pub use engine::evaluate;
pub use message::ValidationMessage;

/// Errors and warnings produced by one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub errors: Vec<ValidationMessage>,
    pub warnings: Vec<ValidationMessage>,
}

impl ValidationResult {
    /// Result of a file that carries no tag at all.
    pub fn no_metadata() -> Self {
        Self {
            errors: vec![ValidationMessage::NoMetadata],
            warnings: Vec::new(),
        }
    }

    /// Valid iff no rule produced an error. Warnings don't count.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn push(&mut self, as_error: bool, message: ValidationMessage) {
        if as_error {
            self.errors.push(message);
        } else {
            self.warnings.push(message);
        }
    }
}
