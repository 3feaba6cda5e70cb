//! Compact HS256 encoding of [`Claims`].
//!
//! A token is `base64url(header).base64url(payload).base64url(signature)`
//! with an HMAC-SHA256 signature over the first two segments. Signing and
//! the constant-time signature comparison are delegated to `jsonwebtoken`.
//!
//! Decoding runs a strict structural pass first so that every shape problem
//! (segment count, empty segment, bad base64url, wrong signature length)
//! surfaces as [`AuthError::MalformedToken`]. Only a well-formed token whose
//! MAC does not match yields [`AuthError::InvalidSignature`]. Expiry is not
//! checked here.

use std::collections::HashSet;
use std::fmt;

use data_encoding::BASE64URL_NOPAD;
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use gatekeeper_config::SigningKey;

use crate::claims::Claims;
use crate::error::AuthError;

pub const ALGORITHM: Algorithm = Algorithm::HS256;

/// Length in bytes of an HMAC-SHA256 tag.
pub const SIGNATURE_LEN: usize = 32;

#[derive(Clone)]
pub struct ClaimsCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
}

impl ClaimsCodec {
    pub fn new(key: &SigningKey) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims = HashSet::new();
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(key.as_bytes()),
            decoding_key: DecodingKey::from_secret(key.as_bytes()),
            header: Header::new(ALGORITHM),
            validation,
        }
    }

    pub fn encode(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&self.header, claims, &self.encoding_key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    /// Checks structure and signature, then deserializes the payload.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        check_structure(token)?;

        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(classify)
    }
}

impl fmt::Debug for ClaimsCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaimsCodec")
            .field("algorithm", &self.header.alg)
            .finish_non_exhaustive()
    }
}

fn check_structure(token: &str) -> Result<(), AuthError> {
    let mut segments = token.split('.');
    let (Some(header), Some(payload), Some(signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(AuthError::MalformedToken);
    };

    for segment in [header, payload] {
        if segment.is_empty() {
            return Err(AuthError::MalformedToken);
        }
        BASE64URL_NOPAD
            .decode(segment.as_bytes())
            .map_err(|_| AuthError::MalformedToken)?;
    }

    let signature = BASE64URL_NOPAD
        .decode(signature.as_bytes())
        .map_err(|_| AuthError::MalformedToken)?;
    if signature.len() != SIGNATURE_LEN {
        return Err(AuthError::MalformedToken);
    }

    Ok(())
}

fn classify(err: JwtError) -> AuthError {
    match err.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => AuthError::InvalidSignature,
        ErrorKind::ExpiredSignature => AuthError::Expired,
        _ => AuthError::MalformedToken,
    }
}
