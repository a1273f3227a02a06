//! Text encodings for multihash buffers, with and without the multibase prefix character.
//!
//! The alphabets and prefixes come from the `multibase` crate; [`Base`] names the subset
//! this library hands out and accepts.

use std::{fmt, str::FromStr};

use crate::error::{MultihashError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    Base16,
    Base16Upper,
    Base32,
    Base32Upper,
    Base32Pad,
    Base32PadUpper,
    Base58Btc,
    Base64,
    Base64Pad,
    Base64Url,
    Base64UrlPad,
}

impl Base {
    pub const ALL: [Base; 11] = [
        Base::Base16,
        Base::Base16Upper,
        Base::Base32,
        Base::Base32Upper,
        Base::Base32Pad,
        Base::Base32PadUpper,
        Base::Base58Btc,
        Base::Base64,
        Base::Base64Pad,
        Base::Base64Url,
        Base::Base64UrlPad,
    ];

    fn multibase(&self) -> multibase::Base {
        match self {
            Base::Base16 => multibase::Base::Base16Lower,
            Base::Base16Upper => multibase::Base::Base16Upper,
            Base::Base32 => multibase::Base::Base32Lower,
            Base::Base32Upper => multibase::Base::Base32Upper,
            Base::Base32Pad => multibase::Base::Base32PadLower,
            Base::Base32PadUpper => multibase::Base::Base32PadUpper,
            Base::Base58Btc => multibase::Base::Base58Btc,
            Base::Base64 => multibase::Base::Base64,
            Base::Base64Pad => multibase::Base::Base64Pad,
            Base::Base64Url => multibase::Base::Base64Url,
            Base::Base64UrlPad => multibase::Base::Base64UrlPad,
        }
    }

    /// Multibase prefix character.
    pub fn prefix(&self) -> char {
        self.multibase().code()
    }

    pub fn from_prefix(c: char) -> Option<Base> {
        Base::ALL.into_iter().find(|b| b.prefix() == c)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Base::Base16 => "base16",
            Base::Base16Upper => "base16upper",
            Base::Base32 => "base32",
            Base::Base32Upper => "base32upper",
            Base::Base32Pad => "base32pad",
            Base::Base32PadUpper => "base32padupper",
            Base::Base58Btc => "base58btc",
            Base::Base64 => "base64",
            Base::Base64Pad => "base64pad",
            Base::Base64Url => "base64url",
            Base::Base64UrlPad => "base64urlpad",
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Base {
    type Err = MultihashError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hex" => Ok(Base::Base16),
            "b58" | "base58" => Ok(Base::Base58Btc),
            _ => Base::ALL
                .into_iter()
                .find(|b| b.name() == s)
                .ok_or_else(|| MultihashError::TextEncoding(format!("unknown base {s}"))),
        }
    }
}

fn text_error(what: impl fmt::Display, e: multibase::Error) -> MultihashError {
    MultihashError::TextEncoding(format!("invalid {what}: {e}"))
}

pub fn encode(base: Base, bytes: &[u8]) -> String {
    base.multibase().encode(bytes)
}

pub fn decode(base: Base, text: &str) -> Result<Vec<u8>> {
    base.multibase().decode(text).map_err(|e| text_error(base, e))
}

pub fn to_multibase(base: Base, bytes: &[u8]) -> String {
    multibase::encode(base.multibase(), bytes)
}

pub fn from_multibase(text: &str) -> Result<(Base, Vec<u8>)> {
    let (inner, bytes) = multibase::decode(text).map_err(|e| text_error("multibase", e))?;
    let base = Base::from_prefix(inner.code()).ok_or_else(|| {
        MultihashError::TextEncoding(format!("unsupported multibase prefix {:?}", inner.code()))
    })?;
    Ok((base, bytes))
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;

    const SHA1_MH: &str = "111488c2f11fb2ce392acb5b2986e640211c4690073e";
    const SHA256_MH: &str = "12209cbc07c3f991725836a3aa2a581ca2029198aa420b9d99bc0e131d9f3e2cbe47";

    #[test]
    fn test_known_encodings() {
        let bytes = hex::decode(SHA1_MH).unwrap();
        assert_eq!(encode(Base::Base58Btc, &bytes), "5dsgvJGnvAfiR3K6HCBc4hcokSfmjj");
        assert_eq!(encode(Base::Base64Pad, &bytes), "ERSIwvEfss45KstbKYbmQCEcRpAHPg==");
        assert_eq!(encode(Base::Base64, &bytes), "ERSIwvEfss45KstbKYbmQCEcRpAHPg");
        assert_eq!(to_multibase(Base::Base16, &bytes), format!("f{SHA1_MH}"));
    }

    #[test]
    fn test_base32_vectors() {
        let sha1 = hex::decode(SHA1_MH).unwrap();
        assert_eq!(encode(Base::Base32PadUpper, &sha1), "CEKIRQXRD6ZM4OJKZNNSTBXGIAQRYRUQA47A====");
        assert_eq!(encode(Base::Base32, &sha1), "cekirqxrd6zm4ojkznnstbxgiaqryruqa47a");
        assert_eq!(
            from_multibase("CCEKIRQXRD6ZM4OJKZNNSTBXGIAQRYRUQA47A====").unwrap(),
            (Base::Base32PadUpper, sha1.clone())
        );
        assert_eq!(
            from_multibase("bcekirqxrd6zm4ojkznnstbxgiaqryruqa47a").unwrap(),
            (Base::Base32, sha1)
        );

        let sha256 = hex::decode(SHA256_MH).unwrap();
        assert_eq!(
            encode(Base::Base32PadUpper, &sha256),
            "CIQJZPAHYP4ZC4SYG2R2UKSYDSRAFEMYVJBAXHMZXQHBGHM7HYWL4RY="
        );
    }

    #[test]
    fn test_multibase_round_trip_all_bases() {
        let bytes = hex::decode(SHA1_MH).unwrap();
        for base in Base::ALL {
            let s = to_multibase(base, &bytes);
            assert!(s.starts_with(base.prefix()), "{base}");
            assert_eq!(from_multibase(&s).unwrap(), (base, bytes.clone()), "{base}");
        }
    }

    #[test]
    fn test_bad_input() {
        assert!(matches!(from_multibase(""), Err(MultihashError::TextEncoding(_))));
        assert!(matches!(from_multibase("Xabc"), Err(MultihashError::TextEncoding(_))));
        assert!(matches!(from_multibase("fxyz"), Err(MultihashError::TextEncoding(_))));
        // base36 is a valid multibase but not one handed out here
        assert!(matches!(from_multibase("k2"), Err(MultihashError::TextEncoding(_))));
        assert!(matches!(decode(Base::Base58Btc, "0OIl"), Err(MultihashError::TextEncoding(_))));
    }

    #[test]
    fn test_parse_base_names() {
        assert_eq!("hex".parse::<Base>(), Ok(Base::Base16));
        assert_eq!("base58btc".parse::<Base>(), Ok(Base::Base58Btc));
        assert_eq!("base64pad".parse::<Base>(), Ok(Base::Base64Pad));
        assert_eq!("base32padupper".parse::<Base>(), Ok(Base::Base32PadUpper));
        assert!("base36".parse::<Base>().is_err());
    }
}
