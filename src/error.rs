//! Error types for CPE parsing and validation

use thiserror::Error;

/// Result type alias using the crate Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by parsing, rendering, and attribute mutation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // === Envelope errors ===
    #[error("WFN must be enclosed in 'wfn:[' and ']'")]
    WfnEnvelope,

    #[error("URI must start with 'cpe:/'")]
    UriEnvelope,

    #[error("formatted string must start with 'cpe:2.3:'")]
    FormattedEnvelope,

    #[error("expected {expected} components, found {found}")]
    ComponentCount { expected: usize, found: usize },

    #[error("packed edition group must have 6 tilde-separated fields, found {found}")]
    EditionGroup { found: usize },

    #[error("attribute segment '{0}' is not a single name=value pair")]
    MalformedPair(String),

    #[error("unrecognized CPE format: {0}")]
    UnknownFormat(String),

    // === Attribute errors ===
    #[error("'{value}' is not a valid {attribute} value")]
    InvalidAttribute {
        attribute: &'static str,
        value: String,
    },

    #[error("'{0}' is not a valid part")]
    InvalidPart(String),

    #[error("invalid percent escape '{0}'")]
    InvalidPercentEscape(String),
}

impl Error {
    /// True for errors about the overall shape of the input rather than
    /// a single attribute value
    pub fn is_envelope(&self) -> bool {
        matches!(
            self,
            Error::WfnEnvelope
                | Error::UriEnvelope
                | Error::FormattedEnvelope
                | Error::ComponentCount { .. }
                | Error::EditionGroup { .. }
                | Error::MalformedPair(_)
                | Error::UnknownFormat(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_classification() {
        assert!(Error::WfnEnvelope.is_envelope());
        assert!(Error::ComponentCount {
            expected: 11,
            found: 9
        }
        .is_envelope());
        assert!(!Error::InvalidAttribute {
            attribute: "vendor",
            value: "mic**roso".to_string()
        }
        .is_envelope());
        assert!(!Error::InvalidPart("x".to_string()).is_envelope());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::FormattedEnvelope.to_string(),
            "formatted string must start with 'cpe:2.3:'"
        );
        assert_eq!(
            Error::ComponentCount {
                expected: 11,
                found: 9
            }
            .to_string(),
            "expected 11 components, found 9"
        );
    }
}
