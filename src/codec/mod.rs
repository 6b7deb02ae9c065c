//! DER codec for the two RFC 8410 interchange schemas.
//!
//! `decode` runs an ordered list of schema matchers: `SubjectPublicKeyInfo`
//! first, then PKCS#8 `PrivateKeyInfo`. The first matcher that both parses
//! structurally and carries the Ed25519 algorithm identifier wins; when
//! every matcher fails the most specific failure is reported wrapped in
//! [`Error::UnsupportedKeyType`].

use der::{
    asn1::{BitStringRef, ObjectIdentifier, OctetStringRef},
    Decode, Encode, Sequence, Tag,
};

use crate::{
    error::{Error, Result},
    key::KeyMaterial,
};

/// id-Ed25519 (1.3.101.112), the only algorithm this codec accepts
pub const ED25519_OID: ObjectIdentifier = const_oid::db::rfc8410::ID_ED_25519;

/// AlgorithmIdentifier with the parameters field absent, as RFC 8410
/// requires for Ed25519.
#[derive(Clone, Copy, Debug, Sequence)]
struct AlgorithmIdentifier {
    oid: ObjectIdentifier,
}

/// SubjectPublicKeyInfo: SEQUENCE { SEQUENCE { OID }, BIT STRING }
#[derive(Clone, Debug, Sequence)]
struct SubjectPublicKeyInfo<'a> {
    algorithm: AlgorithmIdentifier,
    subject_public_key: BitStringRef<'a>,
}

/// PKCS#8 PrivateKeyInfo: SEQUENCE { INTEGER, SEQUENCE { OID }, OCTET STRING }
///
/// The private_key octet string itself wraps a nested OCTET STRING holding
/// the 32-byte CurvePrivateKey seed (RFC 8410 double wrapping).
#[derive(Clone, Debug, Sequence)]
struct PrivateKeyInfo<'a> {
    version: u8,
    algorithm: AlgorithmIdentifier,
    private_key: OctetStringRef<'a>,
}

fn check_oid(oid: ObjectIdentifier) -> Result<()> {
    if oid != ED25519_OID {
        return Err(Error::OidMismatch {
            expected: ED25519_OID,
            actual: oid,
        });
    }
    Ok(())
}

fn key_bytes(raw: &[u8], tag: Tag) -> Result<[u8; 32]> {
    raw.try_into()
        .map_err(|_| Error::MalformedDer(tag.length_error()))
}

/// Schema matcher for SubjectPublicKeyInfo.
fn decode_spki(der_bytes: &[u8]) -> Result<KeyMaterial> {
    let spki = SubjectPublicKeyInfo::from_der(der_bytes)?;
    check_oid(spki.algorithm.oid)?;
    let raw = spki
        .subject_public_key
        .as_bytes()
        .ok_or_else(|| Error::MalformedDer(Tag::BitString.value_error()))?;
    let public_key = key_bytes(raw, Tag::BitString)?;
    Ok(KeyMaterial::from_parts(public_key, None))
}

/// Schema matcher for PKCS#8 PrivateKeyInfo; re-derives the public key
/// from the extracted seed.
fn decode_pkcs8(der_bytes: &[u8]) -> Result<KeyMaterial> {
    let info = PrivateKeyInfo::from_der(der_bytes)?;
    if info.version != 0 {
        return Err(Error::MalformedDer(Tag::Integer.value_error()));
    }
    check_oid(info.algorithm.oid)?;
    let curve_private_key = OctetStringRef::from_der(info.private_key.as_bytes())?;
    let seed = key_bytes(curve_private_key.as_bytes(), Tag::OctetString)?;
    Ok(KeyMaterial::from_seed(&seed))
}

/// Ordered schema matchers; tried front to back.
const SCHEMAS: [fn(&[u8]) -> Result<KeyMaterial>; 2] = [decode_spki, decode_pkcs8];

/// Decode DER bytes into key material.
///
/// Tries SubjectPublicKeyInfo, then PKCS#8 PrivateKeyInfo. The failure
/// carried by the resulting [`Error::UnsupportedKeyType`] is the last one
/// encountered, except that an OID mismatch on a structurally valid schema
/// is never displaced by a later structural failure.
pub fn decode(der_bytes: &[u8]) -> Result<KeyMaterial> {
    let mut last = Error::MalformedDer(Tag::Sequence.value_error());
    for matcher in SCHEMAS {
        match matcher(der_bytes) {
            Ok(material) => return Ok(material),
            Err(e) => {
                let keep_prior = matches!(last, Error::OidMismatch { .. })
                    && matches!(e, Error::MalformedDer(_));
                if !keep_prior {
                    last = e;
                }
            }
        }
    }
    Err(Error::UnsupportedKeyType(Box::new(last)))
}

/// Encode key material as PKCS#8 PrivateKeyInfo when a seed is present,
/// SubjectPublicKeyInfo otherwise.
pub fn encode(material: &KeyMaterial) -> Result<Vec<u8>> {
    let algorithm = AlgorithmIdentifier { oid: ED25519_OID };
    match material.private_seed() {
        Some(seed) => {
            let curve_private_key = OctetStringRef::new(seed)?.to_der()?;
            let info = PrivateKeyInfo {
                version: 0,
                algorithm,
                private_key: OctetStringRef::new(&curve_private_key)?,
            };
            Ok(info.to_der()?)
        }
        None => {
            let spki = SubjectPublicKeyInfo {
                algorithm,
                subject_public_key: BitStringRef::from_bytes(material.public_key())?,
            };
            Ok(spki.to_der()?)
        }
    }
}
