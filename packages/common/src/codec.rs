//! Binary codec for cross-chain message payloads
//!
//! Payloads are a flat concatenation of fields with no framing of their own.
//!
//! # Field encodings
//! - `varuint`: `< 0xFD` is a single byte; `<= 0xFFFF` is `0xFD` + u16 LE;
//!   `<= 0xFFFF_FFFF` is `0xFE` + u32 LE; anything larger is `0xFF` + u64 LE.
//! - `varbytes`: `varuint(len)` followed by `len` raw bytes.
//! - `u256`: exactly 32 bytes, little-endian.
//!
//! Decoding is strict about truncation and rejects non-minimal `varuint`s,
//! so every byte string has at most one decoding.

use cosmwasm_std::Uint256;
use thiserror::Error;

/// Width in bytes of an encoded `u256` field
pub const U256_WIDTH: usize = 32;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    #[error("Non-canonical varuint encoding")]
    NonCanonicalVarUint,

    #[error("Length prefix {0} exceeds addressable memory")]
    LengthOverflow(u64),
}

/// Append-only encoder
#[derive(Debug, Default)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn write_var_uint(&mut self, value: u64) -> &mut Self {
        if value < 0xFD {
            self.buf.push(value as u8);
        } else if value <= 0xFFFF {
            self.buf.push(0xFD);
            self.buf.extend_from_slice(&(value as u16).to_le_bytes());
        } else if value <= 0xFFFF_FFFF {
            self.buf.push(0xFE);
            self.buf.extend_from_slice(&(value as u32).to_le_bytes());
        } else {
            self.buf.push(0xFF);
            self.buf.extend_from_slice(&value.to_le_bytes());
        }
        self
    }

    pub fn write_var_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.write_var_uint(bytes.len() as u64);
        self.write_bytes(bytes)
    }

    pub fn write_u256(&mut self, value: Uint256) -> &mut Self {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Cursor-based decoder over a borrowed buffer
#[derive(Debug)]
pub struct WireReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        if len > self.remaining() {
            return Err(CodecError::UnexpectedEof {
                needed: len,
                remaining: self.remaining(),
            });
        }
        let out = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_var_uint(&mut self) -> Result<u64, CodecError> {
        let [tag] = self.read_array::<1>()?;
        let (value, min) = match tag {
            0xFD => (u16::from_le_bytes(self.read_array()?) as u64, 0xFD),
            0xFE => (u32::from_le_bytes(self.read_array()?) as u64, 0x1_0000),
            0xFF => (u64::from_le_bytes(self.read_array()?), 0x1_0000_0000),
            small => return Ok(small as u64),
        };
        if value < min {
            return Err(CodecError::NonCanonicalVarUint);
        }
        Ok(value)
    }

    pub fn read_var_bytes(&mut self) -> Result<&'a [u8], CodecError> {
        let len = self.read_var_uint()?;
        let len = usize::try_from(len).map_err(|_| CodecError::LengthOverflow(len))?;
        self.read_bytes(len)
    }

    pub fn read_u256(&mut self) -> Result<Uint256, CodecError> {
        Ok(Uint256::from_le_bytes(self.read_array::<U256_WIDTH>()?))
    }
}
