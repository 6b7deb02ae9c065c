//! Ed25519 key-material interchange.
//!
//! This library generates Ed25519 key pairs and moves them in and out of
//! the standard interchange formats defined by RFC 8410: PKCS#8
//! `PrivateKeyInfo` and `SubjectPublicKeyInfo`, DER-encoded and optionally
//! PEM-armored. Loading accepts PEM text, bare base64, or raw DER; the
//! serialized text for a loaded key reproduces the input byte-for-byte.

pub mod codec;
pub mod error;
pub mod key;
pub mod pem;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use key::KeyMaterial;
pub use pem::KeyKind;
