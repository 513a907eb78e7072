use crate::{config::ConfigError, types::IdentifierError, value::DecodeError};
use derive_more::Display;
use thiserror::Error as ThisError;
use waapi_kit_schema::build::BuildError;

///
/// ErrorClass
///
/// Coarse classification used by callers that route on failure kind.
/// `Remote` only occurs when the client is configured to raise.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum ErrorClass {
    Configuration,
    Decode,
    Remote,
    Validation,
}

///
/// Error
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum Error {
    #[error("remote call '{endpoint}' failed")]
    CallFailed { endpoint: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    #[error("subscription to '{topic}' has no decoder")]
    MissingDecoder { topic: String },

    #[error("subscription to '{topic}' has no dispatch target")]
    MissingDispatchTarget { topic: String },

    #[error(transparent)]
    Schema(#[from] BuildError),

    #[error("subscribe to '{topic}' failed")]
    SubscribeFailed { topic: String },

    #[error("kind '{kind}' declares no property '{attribute}'")]
    UnknownProperty { kind: String, attribute: String },
}

impl Error {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::CallFailed { .. } | Self::SubscribeFailed { .. } => ErrorClass::Remote,
            Self::Config(_)
            | Self::MissingDecoder { .. }
            | Self::MissingDispatchTarget { .. }
            | Self::Schema(_) => ErrorClass::Configuration,
            Self::Decode(_) => ErrorClass::Decode,
            Self::Identifier(_) | Self::UnknownProperty { .. } => ErrorClass::Validation,
        }
    }

    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self.class(), ErrorClass::Remote)
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}: {self}", self.class())
    }
}

///
/// TESTS
///
