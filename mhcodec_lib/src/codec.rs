//! Multihash encode/decode
//!
//! Wire layout:
//!
//! ```text
//! [varint function code][varint digest length][digest bytes]
//! ```
//!
//! There is no magic number, version or checksum. Decode is the only place the format
//! invariants are checked, and it is all-or-nothing.

use log::{debug, trace};

use crate::{
    error::{MultihashError, Result},
    registry::{self, HashFunction},
    varint::{read_varint, varint_len, write_varint},
};

/// Largest digest accepted by [`encode`]. Keeps the length field a single varint byte.
pub const MAX_DIGEST_LEN: usize = 127;

/// Smallest buffer [`decode`] will look at.
pub const MIN_BUFFER_LEN: usize = 3;

/// Upper bound on the declared length during decode.
pub const MAX_DECLARED_LEN: u64 = i32::MAX as u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMultihash {
    pub code: u64,
    /// `None` for application codes that have no registry name.
    pub name: Option<&'static str>,
    pub length: u64,
    pub digest: Vec<u8>,
}

impl DecodedMultihash {
    pub fn hash_function(&self) -> Option<HashFunction> {
        HashFunction::from_code(self.code)
    }
}

/// Encodes `digest` under function `code`.
///
/// With `custom_length`, the digest is cut down to at most that many leading bytes. A
/// digest that is already shorter is used as is.
pub fn encode(digest: &[u8], code: u64, custom_length: Option<usize>) -> Result<Vec<u8>> {
    if !registry::is_valid(code) {
        return Err(MultihashError::UnknownCode);
    }

    let digest = match custom_length {
        Some(n) if n < digest.len() => &digest[..n],
        _ => digest,
    };
    if digest.len() > MAX_DIGEST_LEN {
        return Err(MultihashError::HashTooLong);
    }

    let mut out = Vec::with_capacity(varint_len(code) + 1 + digest.len());
    write_varint(code, &mut out);
    write_varint(digest.len() as u64, &mut out);
    out.extend_from_slice(digest);

    trace!("encoded multihash code=0x{:x} len={}", code, digest.len());
    Ok(out)
}

/// Like [`encode`], with the function given by its registry name (e.g. `sha2-256`).
pub fn encode_named(digest: &[u8], name: &str, custom_length: Option<usize>) -> Result<Vec<u8>> {
    encode(digest, registry::code_for_name(name)?, custom_length)
}

pub fn decode(buf: &[u8]) -> Result<DecodedMultihash> {
    decode_inner(buf).map_err(|e| {
        debug!("rejected multihash of {} bytes: {}", buf.len(), e);
        e
    })
}

fn decode_inner(buf: &[u8]) -> Result<DecodedMultihash> {
    if buf.len() < MIN_BUFFER_LEN {
        return Err(MultihashError::HashTooShort);
    }

    let (code, code_len) = read_varint(buf)?;
    let rest = &buf[code_len..];
    let (length, length_len) = read_varint(rest)?;
    let digest = &rest[length_len..];

    if length > MAX_DECLARED_LEN {
        return Err(MultihashError::HashTooLong);
    }
    if digest.len() as u64 != length {
        return Err(MultihashError::InconsistentLength(length));
    }

    let name = registry::name_for(code)?;

    Ok(DecodedMultihash { code, name, length, digest: digest.to_vec() })
}
