//! JSON tokens to and from [`Opt`].
//!
//! `null` (in any ASCII case) decodes to `Opt::None`; anything else must be a
//! valid JSON encoding of the wrapped type.

use alloc::string::String;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{CodecError, Opt};

const NULL_LITERAL: &str = "null";

/// Returns true if `token` is the null literal, ignoring ASCII case and
/// surrounding whitespace.
pub fn is_null_literal(token: &str) -> bool {
    token.trim().eq_ignore_ascii_case(NULL_LITERAL)
}

pub fn decode<T: DeserializeOwned>(token: &str) -> Result<Opt<T>, CodecError> {
    if is_null_literal(token) {
        log::trace!(target: "opt::json", "null literal decoded as None");
        return Ok(Opt::None);
    }
    match serde_json::from_str::<T>(token) {
        Ok(val) => {
            log::trace!(target: "opt::json", "decoded {} byte token as Some", token.len());
            Ok(Opt::Some(val))
        }
        Err(err) => {
            log::debug!(target: "opt::json", "rejecting token {:?}: {}", token, err);
            Err(CodecError::Decode(err))
        }
    }
}

/// Decodes `token` into `target`, leaving `target` untouched on failure.
pub fn decode_into<T: DeserializeOwned>(target: &mut Opt<T>, token: &str) -> Result<(), CodecError> {
    *target = decode(token)?;
    Ok(())
}

pub fn encode<T: Serialize>(opt: &Opt<T>) -> Result<String, CodecError> {
    let out = serde_json::to_string(opt).map_err(|err| {
        log::debug!(target: "opt::json", "failed to encode: {}", err);
        CodecError::Encode(err)
    })?;
    log::trace!(target: "opt::json", "encoded {} as {}", if opt.is_empty() { "None" } else { "Some" }, out);
    Ok(out)
}
