//
// Copyright (c) The GTP-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

use bytes::{Buf, BufMut, Bytes, BytesMut, TryGetError};
use serde::{Deserialize, Serialize};

// Type aliases.
pub type PlmnResult<T> = Result<T, PlmnError>;

// PLMN identity errors.
#[derive(Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub enum PlmnError {
    InvalidDigit(char),
    InvalidMccLength(usize),
    InvalidMncLength(usize),
}

//
// PLMN identity (MCC + MNC).
//
// Encoding format:
//
//    8   7   6   5   4   3   2   1
//  +---------------+---------------+
//  |  MCC digit 2  |  MCC digit 1  |  octet 1
//  +---------------+---------------+
//  | MNC digit 3/f |  MCC digit 3  |  octet 2
//  +---------------+---------------+
//  |  MNC digit 2  |  MNC digit 1  |  octet 3
//  +---------------+---------------+
//
// A two-digit MNC leaves the high nibble of octet 2 set to the 0xf
// filler. MNC digits are 0-9, so the filler nibble unambiguously
// identifies the two-digit form on decode.
//
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct Plmn {
    mcc: String,
    mnc: String,
}

// ===== impl PlmnError =====

impl std::fmt::Display for PlmnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlmnError::InvalidDigit(digit) => {
                write!(f, "invalid PLMN digit: {digit}")
            }
            PlmnError::InvalidMccLength(len) => {
                write!(f, "invalid MCC digit count: {len}")
            }
            PlmnError::InvalidMncLength(len) => {
                write!(f, "invalid MNC digit count: {len}")
            }
        }
    }
}

impl std::error::Error for PlmnError {}

// ===== impl Plmn =====

impl Plmn {
    pub const WIRE_LEN: usize = 3;

    /// Creates a new PLMN identity from MCC and MNC digit strings. The MCC
    /// must be three digits long and the MNC two or three digits long.
    pub fn new(mcc: &str, mnc: &str) -> PlmnResult<Plmn> {
        if mcc.len() != 3 {
            return Err(PlmnError::InvalidMccLength(mcc.len()));
        }
        if mnc.len() != 2 && mnc.len() != 3 {
            return Err(PlmnError::InvalidMncLength(mnc.len()));
        }
        if let Some(digit) =
            mcc.chars().chain(mnc.chars()).find(|c| !c.is_ascii_digit())
        {
            return Err(PlmnError::InvalidDigit(digit));
        }

        Ok(Plmn {
            mcc: mcc.to_owned(),
            mnc: mnc.to_owned(),
        })
    }

    pub fn mcc(&self) -> &str {
        &self.mcc
    }

    pub fn mnc(&self) -> &str {
        &self.mnc
    }

    /// Encodes the PLMN identity into `buf`.
    ///
    /// The current position is advanced by 3.
    pub fn encode(&self, buf: &mut BytesMut) {
        let mcc = digit_values(&self.mcc);
        let mnc = digit_values(&self.mnc);
        let mnc3 = if self.mnc.len() == 3 { mnc[2] } else { 0x0f };

        buf.put_u8((mcc[1] << 4) | mcc[0]);
        buf.put_u8((mnc3 << 4) | mcc[2]);
        buf.put_u8((mnc[1] << 4) | mnc[0]);
    }

    /// Decodes a PLMN identity from `buf`, recovering the MNC digit count
    /// from the filler nibble.
    ///
    /// The current position is advanced by 3.
    pub fn decode(buf: &mut Bytes) -> Result<Plmn, TryGetError> {
        let mut b = [0; Self::WIRE_LEN];
        buf.try_copy_to_slice(&mut b)?;

        let mut mcc = String::with_capacity(3);
        mcc.push(digit_char(b[0] & 0x0f));
        mcc.push(digit_char(b[0] >> 4));
        mcc.push(digit_char(b[1] & 0x0f));

        let mut mnc = String::with_capacity(3);
        mnc.push(digit_char(b[2] & 0x0f));
        mnc.push(digit_char(b[2] >> 4));
        if b[1] >> 4 != 0x0f {
            mnc.push(digit_char(b[1] >> 4));
        }

        Ok(Plmn { mcc, mnc })
    }
}

impl std::fmt::Display for Plmn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.mcc, self.mnc)
    }
}

// ===== helper functions =====

fn digit_values(digits: &str) -> Vec<u8> {
    digits
        .chars()
        .map(|c| c.to_digit(16).unwrap() as u8)
        .collect()
}

fn digit_char(nibble: u8) -> char {
    char::from_digit(nibble as u32, 16).unwrap()
}

// ===== unit tests =====
