//! Unsigned LEB128 varints for the two multihash header fields.

use unsigned_varint::{decode, encode};

use crate::error::{MultihashError, Result};

/// Longest varint that can hold a `u64`.
const MAX_VARINT_LEN: usize = 10;

/// Reads a varint from the front of `buf`, returning its value and the number of bytes it
/// occupied.
pub fn read_varint(buf: &[u8]) -> Result<(u64, usize)> {
    match decode::u64(buf) {
        Ok((value, rest)) => {
            let consumed = buf.len() - rest.len();
            // The tenth byte only has room for bit 63; the decoder drops anything above it.
            if consumed == MAX_VARINT_LEN && buf[MAX_VARINT_LEN - 1] > 0x01 {
                return Err(MultihashError::VarIntTooLarge);
            }
            Ok((value, consumed))
        }
        Err(decode::Error::Insufficient) => Err(MultihashError::VarIntBufferTooShort),
        Err(decode::Error::NotMinimal) => Err(MultihashError::VarIntNotMinimal),
        Err(_) => Err(MultihashError::VarIntTooLarge),
    }
}

pub fn write_varint(value: u64, out: &mut Vec<u8>) {
    let mut buf = encode::u64_buffer();
    out.extend_from_slice(encode::u64(value, &mut buf));
}

pub fn varint_len(value: u64) -> usize {
    let mut buf = encode::u64_buffer();
    encode::u64(value, &mut buf).len()
}
