use std::path::PathBuf;

use der::asn1::ObjectIdentifier;
use thiserror::Error;

/// Errors produced while generating, decoding, or encoding key material.
#[derive(Error, Debug)]
pub enum Error {
    /// The randomness source or the underlying key primitive failed
    #[error("Key generation error: {0}")]
    Generation(String),

    /// The input did not structurally parse as the attempted DER schema
    #[error("Malformed DER: {0}")]
    MalformedDer(#[from] der::Error),

    /// A structurally valid schema carried the wrong algorithm identifier
    #[error("Algorithm OID mismatch: expected {expected}, got {actual}")]
    OidMismatch {
        expected: ObjectIdentifier,
        actual: ObjectIdentifier,
    },

    /// Every schema attempt was exhausted; carries the last failure
    #[error("Unsupported key type: {0}")]
    UnsupportedKeyType(#[source] Box<Error>),

    /// Key file missing, unreadable, or empty
    #[error("Key file unavailable: {}", path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Text-level encoding error (base64 body and the like)
    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
