//! Self-describing hash values in the multihash format.
//!
//! A multihash is `[varint code][varint digest length][digest]`. [`codec`] turns a digest
//! and a function code into that layout and back, [`registry`] knows which codes are legal,
//! and [`multihash::Multihash`] is an owned buffer that is always known to decode.

pub mod error;
pub mod registry;
pub mod varint;
pub mod codec;
pub mod hasher;
pub mod text;
pub mod multihash;

pub use codec::{decode, encode, encode_named, DecodedMultihash};
pub use error::{MultihashError, Result};
pub use multihash::Multihash;
pub use registry::HashFunction;
pub use text::Base;
