//! Digest producers for the registry's hash functions, and the hash-then-wrap helper built
//! on top of [`crate::codec::encode`].

use sha2::Digest;
use sha3::{Keccak224, Keccak256, Keccak384, Keccak512, Sha3_224, Sha3_256, Sha3_384, Sha3_512};

use crate::{
    codec,
    error::{MultihashError, Result},
    registry::HashFunction,
};

fn digest_with<D: Digest>(input: &[u8]) -> Vec<u8> {
    D::digest(input).to_vec()
}

impl HashFunction {
    /// Full-length digest of `input`. Identity returns the input unchanged.
    pub fn digest(&self, input: &[u8]) -> Vec<u8> {
        match self {
            HashFunction::Identity => input.to_vec(),
            HashFunction::Md5 => digest_with::<md5::Md5>(input),
            HashFunction::Sha1 => digest_with::<sha1::Sha1>(input),
            HashFunction::Sha2_256 => digest_with::<sha2::Sha256>(input),
            HashFunction::Sha2_512 => digest_with::<sha2::Sha512>(input),
            HashFunction::Sha3_224 => digest_with::<Sha3_224>(input),
            HashFunction::Sha3_256 => digest_with::<Sha3_256>(input),
            HashFunction::Sha3_384 => digest_with::<Sha3_384>(input),
            HashFunction::Sha3_512 => digest_with::<Sha3_512>(input),
            HashFunction::Keccak224 => digest_with::<Keccak224>(input),
            HashFunction::Keccak256 => digest_with::<Keccak256>(input),
            HashFunction::Keccak384 => digest_with::<Keccak384>(input),
            HashFunction::Keccak512 => digest_with::<Keccak512>(input),
        }
    }
}

/// Hashes `input` with the function registered under `code` and encodes the (optionally
/// truncated) digest as a multihash.
pub fn hash_and_wrap(input: &[u8], code: u64, custom_length: Option<usize>) -> Result<Vec<u8>> {
    let function = HashFunction::from_code(code).ok_or_else(|| {
        if crate::registry::is_valid(code) {
            MultihashError::UnsupportedHashFunction(code)
        } else {
            MultihashError::UnknownCode
        }
    })?;
    codec::encode(&function.digest(input), code, custom_length)
}
