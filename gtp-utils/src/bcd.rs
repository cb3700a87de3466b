//
// Copyright (c) The GTP-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

use bytes::{Buf, BufMut, Bytes, BytesMut, TryGetError};
use serde::{Deserialize, Serialize};

// Type aliases.
pub type BcdResult<T> = Result<T, BcdError>;

// Filler nibble appended to an odd number of digits.
const FILLER: u8 = 0x0f;

// BCD digit string errors.
#[derive(Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub enum BcdError {
    InvalidDigit(char),
    InvalidLength(usize),
}

//
// Telephony BCD digit string.
//
// Digits are packed one per 4-bit nibble, low nibble first within each
// byte. An odd number of digits leaves the last high nibble set to the
// 0xf filler, which is stripped again when decoding.
//
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct BcdString(String);

// ===== impl BcdError =====

impl std::fmt::Display for BcdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BcdError::InvalidDigit(digit) => {
                write!(f, "invalid BCD digit: {digit}")
            }
            BcdError::InvalidLength(len) => {
                write!(f, "invalid number of BCD digits: {len}")
            }
        }
    }
}

impl std::error::Error for BcdError {}

// ===== impl BcdString =====

impl BcdString {
    /// Creates a new BCD string, validating that all characters are decimal
    /// digits.
    pub fn new(digits: &str) -> BcdResult<BcdString> {
        if let Some(digit) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(BcdError::InvalidDigit(digit));
        }
        Ok(BcdString(digits.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn digits(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns the number of bytes the encoded form occupies.
    pub fn wire_len(&self) -> usize {
        self.0.len().div_ceil(2)
    }

    /// Encodes the digit string into `buf`, two digits per byte, low nibble
    /// first.
    pub fn encode(&self, buf: &mut BytesMut) {
        let mut chars = self.0.chars();
        while let Some(low) = chars.next() {
            let low = low.to_digit(16).unwrap() as u8;
            let high = match chars.next() {
                Some(high) => high.to_digit(16).unwrap() as u8,
                None => FILLER,
            };
            buf.put_u8((high << 4) | low);
        }
    }

    /// Encodes the digit string into exactly `wire_len` bytes, padding the
    /// remainder with filler bytes.
    pub fn encode_fixed(&self, buf: &mut BytesMut, wire_len: usize) {
        self.encode(buf);
        for _ in self.wire_len()..wire_len {
            buf.put_u8(0xff);
        }
    }

    /// Decodes `wire_len` bytes from `buf`, stripping trailing filler
    /// nibbles.
    ///
    /// Non-decimal nibbles received from a peer are preserved as lowercase
    /// hex characters rather than rejected.
    pub fn decode(
        buf: &mut Bytes,
        wire_len: usize,
    ) -> Result<BcdString, TryGetError> {
        if buf.remaining() < wire_len {
            return Err(TryGetError {
                requested: wire_len,
                available: buf.remaining(),
            });
        }

        let mut digits = String::with_capacity(wire_len * 2);
        for _ in 0..wire_len {
            let b = buf.get_u8();
            digits.push(char::from_digit((b & 0x0f) as u32, 16).unwrap());
            digits.push(char::from_digit((b >> 4) as u32, 16).unwrap());
        }
        while digits.ends_with('f') {
            digits.pop();
        }

        Ok(BcdString(digits))
    }
}

impl std::fmt::Display for BcdString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ===== unit tests =====
