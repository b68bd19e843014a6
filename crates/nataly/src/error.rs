use thiserror::Error;

/// Errors raised at the boundary of the classification layer.
///
/// Resolution and detection functions are total over well-formed input, so
/// these only surface where raw provider data or configuration enters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NatalyError {
    #[error("Invalid longitude or cusp input: {message}")]
    Domain { message: String },
    #[error("Position unavailable for {body}: {message}")]
    PositionUnavailable { body: String, message: String },
    #[error("No orb configured for {aspect} in category {category}")]
    Configuration { category: String, aspect: String },
    #[error("Invalid position snapshot: {0}")]
    InvalidSnapshot(String),
}

impl NatalyError {
    pub fn domain(message: impl Into<String>) -> Self {
        NatalyError::Domain {
            message: message.into(),
        }
    }

    pub fn position_unavailable(body: impl Into<String>, message: impl Into<String>) -> Self {
        NatalyError::PositionUnavailable {
            body: body.into(),
            message: message.into(),
        }
    }
}
