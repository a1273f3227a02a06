use thiserror::Error;

pub type Result<T> = std::result::Result<T, MultihashError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MultihashError {
    #[error("Unknown multihash code.")]
    UnknownCode,
    #[error("Unknown multihash function name: {0}")]
    UnknownName(String),
    #[error("Multihash too short. Must be at least 3 bytes")]
    HashTooShort,
    #[error("Multihash too long. Digest must be at most 127 bytes")]
    HashTooLong,
    #[error("Unsigned variable integer buffer too short.")]
    VarIntBufferTooShort,
    #[error("Unsigned variable integer is too big. Max is 64 bits.")]
    VarIntTooLarge,
    #[error("Unsigned variable integer is not minimally encoded.")]
    VarIntNotMinimal,
    #[error("Multihash does not yet support digests longer than 127 bytes")]
    LengthNotSupported,
    #[error("Multihash length inconsistent. Declared {0} bytes")]
    InconsistentLength(u64),
    #[error("No digest producer for multihash code 0x{0:x}")]
    UnsupportedHashFunction(u64),
    #[error("Text encoding error: {0}")]
    TextEncoding(String),
}
