//
// Copyright (c) The GTP-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

use bytes::{Buf, BufMut, Bytes, BytesMut};
use derive_new::new;
use gtp_utils::bcd::{BcdError, BcdResult, BcdString};
use gtp_utils::bytes::{BytesExt, BytesMutExt};
use gtp_utils::plmn::Plmn;
use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, DecodeResult};
use crate::v1::ie::{IeKind, IeType};

// IMSI IE. TV framed, the value is always 8 bytes of BCD digits (up to
// 15 digits plus filler).
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct Imsi(BcdString);

// IMEI(SV) IE. TLV framed, the value is always 8 bytes of BCD digits.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct Imeisv(BcdString);

//
// MSISDN IE.
//
// The first value byte carries the address nature and numbering plan
// (0x91 for an international E.164 number), followed by the BCD digits.
//
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct Msisdn {
    pub addr_type: u8,
    pub digits: BcdString,
}

// TLLI IE.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct Tlli(pub u32);

// Packet TMSI IE.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct PacketTmsi(pub u32);

// P-TMSI Signature IE. Three bytes on the wire.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct PTmsiSignature(pub u32);

// Routeing Area Identity IE.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct RouteingAreaIdentity {
    pub plmn: Plmn,
    pub lac: u16,
    pub rac: u8,
}

// ===== impl Imsi =====

impl Imsi {
    const WIRE_LEN: usize = 8;
    const MAX_DIGITS: usize = 15;

    pub fn new(digits: &str) -> BcdResult<Imsi> {
        if digits.len() > Self::MAX_DIGITS {
            return Err(BcdError::InvalidLength(digits.len()));
        }
        Ok(Imsi(BcdString::new(digits)?))
    }

    pub fn digits(&self) -> &str {
        self.0.as_str()
    }
}

impl IeKind for Imsi {
    const IE_TYPE: IeType = IeType::Imsi;

    fn encode_value(&self, buf: &mut BytesMut) {
        self.0.encode_fixed(buf, Self::WIRE_LEN);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<Imsi> {
        let digits = BcdString::decode(buf, Self::WIRE_LEN)?;
        Ok(Imsi(digits))
    }
}

// ===== impl Imeisv =====

impl Imeisv {
    const WIRE_LEN: usize = 8;
    const MAX_DIGITS: usize = 16;

    pub fn new(digits: &str) -> BcdResult<Imeisv> {
        if digits.len() > Self::MAX_DIGITS {
            return Err(BcdError::InvalidLength(digits.len()));
        }
        Ok(Imeisv(BcdString::new(digits)?))
    }

    pub fn digits(&self) -> &str {
        self.0.as_str()
    }
}

impl IeKind for Imeisv {
    const IE_TYPE: IeType = IeType::Imeisv;

    fn encode_value(&self, buf: &mut BytesMut) {
        self.0.encode_fixed(buf, Self::WIRE_LEN);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<Imeisv> {
        if buf.remaining() != Self::WIRE_LEN {
            return Err(DecodeError::InvalidLength(
                Self::IE_TYPE as u8,
                buf.remaining() as u16,
            ));
        }
        let digits = BcdString::decode(buf, Self::WIRE_LEN)?;
        Ok(Imeisv(digits))
    }
}

// ===== impl Msisdn =====

impl Msisdn {
    // International number, E.164 numbering plan.
    pub const ADDR_INTERNATIONAL: u8 = 0x91;

    pub fn new(digits: &str) -> BcdResult<Msisdn> {
        Ok(Msisdn {
            addr_type: Self::ADDR_INTERNATIONAL,
            digits: BcdString::new(digits)?,
        })
    }
}

impl IeKind for Msisdn {
    const IE_TYPE: IeType = IeType::Msisdn;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u8(self.addr_type);
        self.digits.encode(buf);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<Msisdn> {
        let addr_type = buf.try_get_u8()?;
        let wire_len = buf.remaining();
        let digits = BcdString::decode(buf, wire_len)?;
        Ok(Msisdn { addr_type, digits })
    }
}

// ===== impl Tlli =====

impl IeKind for Tlli {
    const IE_TYPE: IeType = IeType::Tlli;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u32(self.0);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<Tlli> {
        Ok(Tlli(buf.try_get_u32()?))
    }
}

// ===== impl PacketTmsi =====

impl IeKind for PacketTmsi {
    const IE_TYPE: IeType = IeType::PacketTmsi;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u32(self.0);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<PacketTmsi> {
        Ok(PacketTmsi(buf.try_get_u32()?))
    }
}

// ===== impl PTmsiSignature =====

impl IeKind for PTmsiSignature {
    const IE_TYPE: IeType = IeType::PTmsiSignature;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u24(self.0 & 0x00ff_ffff);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<PTmsiSignature> {
        Ok(PTmsiSignature(buf.try_get_u24()?))
    }
}

// ===== impl RouteingAreaIdentity =====

impl IeKind for RouteingAreaIdentity {
    const IE_TYPE: IeType = IeType::RouteingAreaIdentity;

    fn encode_value(&self, buf: &mut BytesMut) {
        self.plmn.encode(buf);
        buf.put_u16(self.lac);
        buf.put_u8(self.rac);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<RouteingAreaIdentity> {
        let plmn = Plmn::decode(buf)?;
        let lac = buf.try_get_u16()?;
        let rac = buf.try_get_u8()?;
        Ok(RouteingAreaIdentity { plmn, lac, rac })
    }
}
