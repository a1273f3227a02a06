//! Multihash type
//!
//! An owned multihash buffer that is checked once at construction. The code and the digest
//! position are kept from that check; [`Multihash::decode`] returns all the parts at once.

use std::fmt;

use crate::{
    codec::{self, DecodedMultihash},
    error::Result,
    hasher,
    registry::{self, HashFunction},
    text::{self, Base},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multihash {
    bytes: Vec<u8>,
    code: u64,
    // Start of the digest, i.e. the length of both header varints.
    digest_offset: usize,
}

impl Multihash {
    /// Takes ownership of an encoded multihash after checking that it decodes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Multihash> {
        let decoded = codec::decode(&bytes)?;
        let digest_offset = bytes.len() - decoded.digest.len();
        Ok(Multihash { bytes, code: decoded.code, digest_offset })
    }

    pub fn wrap(code: u64, digest: &[u8]) -> Result<Multihash> {
        Self::wrap_truncated(code, digest, None)
    }

    // Encoder output still goes through decode: an empty digest encodes fine but is below
    // the minimum buffer size.
    pub fn wrap_truncated(code: u64, digest: &[u8], length: Option<usize>) -> Result<Multihash> {
        Self::from_bytes(codec::encode(digest, code, length)?)
    }

    /// Hashes `input` and wraps the digest, keeping at most `length` bytes of it.
    pub fn hash(function: HashFunction, input: &[u8], length: Option<usize>) -> Result<Multihash> {
        Self::from_bytes(hasher::hash_and_wrap(input, function.code(), length)?)
    }

    pub fn from_hex(s: &str) -> Result<Multihash> {
        Self::from_bytes(text::decode(Base::Base16, s)?)
    }

    pub fn from_base58(s: &str) -> Result<Multihash> {
        Self::from_bytes(text::decode(Base::Base58Btc, s)?)
    }

    /// Parses a multibase string holding a whole multihash, e.g. `f1114...`.
    pub fn from_multibase(s: &str) -> Result<Multihash> {
        let (_, bytes) = text::from_multibase(s)?;
        Self::from_bytes(bytes)
    }

    /// Parses a multibase string holding a bare digest and wraps it under `function`.
    pub fn from_multibase_digest(s: &str, function: HashFunction) -> Result<Multihash> {
        let (_, digest) = text::from_multibase(s)?;
        Self::wrap(function.code(), &digest)
    }

    pub fn decode(&self) -> Result<DecodedMultihash> {
        codec::decode(&self.bytes)
    }

    pub fn code(&self) -> u64 { self.code }

    pub fn name(&self) -> Option<&'static str> {
        registry::name_for(self.code()).ok().flatten()
    }

    pub fn hash_function(&self) -> Option<HashFunction> {
        HashFunction::from_code(self.code())
    }

    /// The digest bytes, without the code and length prefix.
    pub fn digest(&self) -> &[u8] { &self.bytes[self.digest_offset..] }

    pub fn as_bytes(&self) -> &[u8] { &self.bytes }
    pub fn into_bytes(self) -> Vec<u8> { self.bytes }

    pub fn to_hex(&self) -> String { text::encode(Base::Base16, &self.bytes) }
    pub fn to_base58(&self) -> String { text::encode(Base::Base58Btc, &self.bytes) }

    /// The whole buffer in `base`, without a multibase prefix.
    pub fn to_string_in(&self, base: Base) -> String { text::encode(base, &self.bytes) }

    pub fn to_multibase(&self, base: Base) -> String { text::to_multibase(base, &self.bytes) }
}

impl AsRef<[u8]> for Multihash {
    fn as_ref(&self) -> &[u8] { &self.bytes }
}

impl TryFrom<Vec<u8>> for Multihash {
    type Error = crate::error::MultihashError;

    fn try_from(bytes: Vec<u8>) -> Result<Self> { Multihash::from_bytes(bytes) }
}

impl TryFrom<&[u8]> for Multihash {
    type Error = crate::error::MultihashError;

    fn try_from(bytes: &[u8]) -> Result<Self> { Multihash::from_bytes(bytes.to_vec()) }
}

// Implement Hash manually: two multihashes are the same key iff their bytes are
impl std::hash::Hash for Multihash {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl fmt::Display for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Multihash: {} 0x{:X} {} {}",
            self.name().unwrap_or("unknown"),
            self.code(),
            self.digest().len(),
            hex::encode(self.digest())
        )
    }
}
