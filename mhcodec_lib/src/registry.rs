//! Function-code registry
//!
//! Multihash codes come from the multicodec table. Codes below 0x10 are reserved for
//! applications and are always accepted, named or not. Above that range only the hash
//! functions listed in [`HASH_FUNCTIONS`] are accepted.

use std::{fmt, str::FromStr};

use crate::error::{MultihashError, Result};

/// Exclusive upper bound of the application-reserved code range.
pub const APPLICATION_RANGE_END: u64 = 0x10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFunction {
    Identity,
    Md5,
    Sha1,
    Sha2_256,
    Sha2_512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Keccak224,
    Keccak256,
    Keccak384,
    Keccak512,
}

pub struct RegistryEntry {
    pub function: HashFunction,
    pub code: u64,
    pub name: &'static str,
    pub default_length: Option<usize>,
}

const fn entry(
    function: HashFunction,
    code: u64,
    name: &'static str,
    default_length: Option<usize>,
) -> RegistryEntry {
    RegistryEntry { function, code, name, default_length }
}

pub static HASH_FUNCTIONS: &[RegistryEntry] = &[
    entry(HashFunction::Identity, 0x00, "identity", None),
    entry(HashFunction::Md5, 0xd5, "md5", Some(16)),
    entry(HashFunction::Sha1, 0x11, "sha1", Some(20)),
    entry(HashFunction::Sha2_256, 0x12, "sha2-256", Some(32)),
    entry(HashFunction::Sha2_512, 0x13, "sha2-512", Some(64)),
    entry(HashFunction::Sha3_224, 0x17, "sha3-224", Some(28)),
    entry(HashFunction::Sha3_256, 0x16, "sha3-256", Some(32)),
    entry(HashFunction::Sha3_384, 0x15, "sha3-384", Some(48)),
    entry(HashFunction::Sha3_512, 0x14, "sha3-512", Some(64)),
    entry(HashFunction::Keccak224, 0x1a, "keccak-224", Some(28)),
    entry(HashFunction::Keccak256, 0x1b, "keccak-256", Some(32)),
    entry(HashFunction::Keccak384, 0x1c, "keccak-384", Some(48)),
    entry(HashFunction::Keccak512, 0x1d, "keccak-512", Some(64)),
];

fn lookup_code(code: u64) -> Option<&'static RegistryEntry> {
    HASH_FUNCTIONS.iter().find(|e| e.code == code)
}

fn lookup_name(name: &str) -> Option<&'static RegistryEntry> {
    HASH_FUNCTIONS.iter().find(|e| e.name == name)
}

impl HashFunction {
    pub fn from_code(code: u64) -> Option<HashFunction> {
        lookup_code(code).map(|e| e.function)
    }

    pub fn from_name(name: &str) -> Option<HashFunction> {
        lookup_name(name).map(|e| e.function)
    }

    pub fn all() -> impl Iterator<Item = HashFunction> {
        HASH_FUNCTIONS.iter().map(|e| e.function)
    }

    // Table rows are in declaration order.
    fn entry(&self) -> &'static RegistryEntry { &HASH_FUNCTIONS[*self as usize] }

    pub fn code(&self) -> u64 { self.entry().code }
    pub fn name(&self) -> &'static str { self.entry().name }

    /// Digest size in bytes at full strength, `None` for identity.
    pub fn default_length(&self) -> Option<usize> { self.entry().default_length }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashFunction {
    type Err = MultihashError;

    fn from_str(s: &str) -> Result<Self> {
        HashFunction::from_name(s).ok_or_else(|| MultihashError::UnknownName(s.to_string()))
    }
}

impl TryFrom<u64> for HashFunction {
    type Error = MultihashError;

    fn try_from(code: u64) -> Result<Self> {
        HashFunction::from_code(code).ok_or(MultihashError::UnknownCode)
    }
}

pub fn is_application_code(code: u64) -> bool {
    code < APPLICATION_RANGE_END
}

pub fn is_recognized_hash_code(code: u64) -> bool {
    lookup_code(code).is_some()
}

pub fn is_valid(code: u64) -> bool {
    is_application_code(code) || is_recognized_hash_code(code)
}

/// Symbolic name of a valid code.
///
/// Application codes without a registry entry resolve to `Ok(None)`; codes that are not
/// valid at all are an error.
pub fn name_for(code: u64) -> Result<Option<&'static str>> {
    if !is_valid(code) {
        return Err(MultihashError::UnknownCode);
    }
    Ok(lookup_code(code).map(|e| e.name))
}

pub fn code_for_name(name: &str) -> Result<u64> {
    lookup_name(name)
        .map(|e| e.code)
        .ok_or_else(|| MultihashError::UnknownName(name.to_string()))
}

pub fn default_digest_length(code: u64) -> Option<usize> {
    lookup_code(code).and_then(|e| e.default_length)
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_range_always_valid() {
        for code in 0..APPLICATION_RANGE_END {
            assert!(is_application_code(code));
            assert!(is_valid(code));
        }
        assert!(!is_application_code(0x10));
        assert!(!is_valid(0x10));
    }

    #[test]
    fn test_recognized_codes() {
        for code in [0x00, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x1a, 0x1b, 0x1c, 0x1d, 0xd5] {
            assert!(is_recognized_hash_code(code), "0x{code:x}");
            assert!(is_valid(code));
        }
        for code in [0x18, 0x19, 0x1e, 0x20, 0xb220, u64::MAX] {
            assert!(!is_recognized_hash_code(code), "0x{code:x}");
            assert!(!is_valid(code));
        }
    }

    #[test]
    fn test_name_for() {
        assert_eq!(name_for(0x11), Ok(Some("sha1")));
        assert_eq!(name_for(0x12), Ok(Some("sha2-256")));
        assert_eq!(name_for(0x00), Ok(Some("identity")));
        assert_eq!(name_for(0x05), Ok(None));
        assert_eq!(name_for(0x30), Err(MultihashError::UnknownCode));
    }

    #[test]
    fn test_default_lengths() {
        assert_eq!(default_digest_length(0x11), Some(20));
        assert_eq!(default_digest_length(0x12), Some(32));
        assert_eq!(default_digest_length(0x14), Some(64));
        assert_eq!(default_digest_length(0xd5), Some(16));
        assert_eq!(default_digest_length(0x00), None);
        assert_eq!(default_digest_length(0x07), None);
    }

    #[test]
    fn test_table_matches_enum_order() {
        for (i, e) in HASH_FUNCTIONS.iter().enumerate() {
            assert_eq!(e.function as usize, i);
        }
    }

    #[test]
    fn test_names_round_trip() {
        for f in HashFunction::all() {
            assert_eq!(f.name().parse::<HashFunction>(), Ok(f));
            assert_eq!(HashFunction::try_from(f.code()), Ok(f));
            assert_eq!(code_for_name(f.name()), Ok(f.code()));
        }
        assert_eq!(
            "sha2-1024".parse::<HashFunction>(),
            Err(MultihashError::UnknownName("sha2-1024".to_string()))
        );
    }
}
