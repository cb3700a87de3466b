//
// Copyright (c) The GTP-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

use bitflags::bitflags;
use bytes::{Buf, BufMut, Bytes, BytesMut};
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, DecodeResult};
use crate::v1::ie::{IeKind, IeType};

// Reordering Required IE. Boolean indicator, 0xff when set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct ReorderingRequired(pub bool);

// MS Validated IE.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct MsValidated(pub bool);

// Teardown Indication IE.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct TeardownInd(pub bool);

// Recovery IE (restart counter).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct Recovery(pub u8);

// Selection Mode IE. The code is stored verbatim, including the unused
// high bits a peer may have set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct SelectionMode(pub u8);

// NSAPI IE.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct Nsapi(pub u8);

// APN Restriction IE.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct ApnRestriction(pub u8);

// RAT Type IE.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct RatType(pub u8);

// Charging Characteristics IE.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct ChargingCharacteristics(pub u16);

// Trace Reference IE.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct TraceReference(pub u16);

// Trace Type IE.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct TraceType(pub u16);

bitflags! {
    // Common Flags IE.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    #[derive(Deserialize, Serialize)]
    #[serde(transparent)]
    pub struct CommonFlags: u8 {
        const DUAL_ADDRESS_BEARER = 0x80;
        const UPGRADE_QOS_SUPPORTED = 0x40;
        const NRSN = 0x20;
        const NO_QOS_NEGOTIATION = 0x10;
        const MBMS_COUNTING_INFORMATION = 0x08;
        const RAN_PROCEDURES_READY = 0x04;
        const MBMS_SERVICE_TYPE = 0x02;
        const PROHIBIT_PAYLOAD_COMPRESSION = 0x01;
    }
}

// Well-known RAT Type values.
impl RatType {
    pub const UTRAN: u8 = 1;
    pub const GERAN: u8 = 2;
    pub const WLAN: u8 = 3;
    pub const GAN: u8 = 4;
    pub const HSPA_EVOLUTION: u8 = 5;
    pub const EUTRAN: u8 = 6;
}

// ===== impl ReorderingRequired =====

impl IeKind for ReorderingRequired {
    const IE_TYPE: IeType = IeType::ReorderingRequired;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u8(if self.0 { 0xff } else { 0x00 });
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<ReorderingRequired> {
        // Strict encode, lenient decode: any non-zero byte means set.
        Ok(ReorderingRequired(buf.try_get_u8()? != 0))
    }
}

// ===== impl MsValidated =====

impl IeKind for MsValidated {
    const IE_TYPE: IeType = IeType::MsValidated;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u8(if self.0 { 0xff } else { 0x00 });
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<MsValidated> {
        Ok(MsValidated(buf.try_get_u8()? != 0))
    }
}

// ===== impl TeardownInd =====

impl IeKind for TeardownInd {
    const IE_TYPE: IeType = IeType::TeardownInd;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u8(if self.0 { 0xff } else { 0x00 });
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<TeardownInd> {
        Ok(TeardownInd(buf.try_get_u8()? != 0))
    }
}

// ===== impl Recovery =====

impl IeKind for Recovery {
    const IE_TYPE: IeType = IeType::Recovery;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u8(self.0);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<Recovery> {
        Ok(Recovery(buf.try_get_u8()?))
    }
}

// ===== impl SelectionMode =====

impl SelectionMode {
    pub const MS_OR_NETWORK_PROVIDED_APN_SUBSCRIBED_VERIFIED: u8 = 0xf0;
    pub const MS_PROVIDED_APN_SUBSCRIPTION_NOT_VERIFIED: u8 = 0xf1;
    pub const NETWORK_PROVIDED_APN_SUBSCRIPTION_NOT_VERIFIED: u8 = 0xf2;
}

impl IeKind for SelectionMode {
    const IE_TYPE: IeType = IeType::SelectionMode;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u8(self.0);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<SelectionMode> {
        Ok(SelectionMode(buf.try_get_u8()?))
    }
}

// ===== impl Nsapi =====

impl IeKind for Nsapi {
    const IE_TYPE: IeType = IeType::Nsapi;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u8(self.0);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<Nsapi> {
        Ok(Nsapi(buf.try_get_u8()?))
    }
}

// ===== impl ApnRestriction =====

impl ApnRestriction {
    pub const NO_EXISTING_CONTEXTS: u8 = 0;
    pub const PUBLIC1: u8 = 1;
    pub const PUBLIC2: u8 = 2;
    pub const PRIVATE1: u8 = 3;
    pub const PRIVATE2: u8 = 4;
}

impl IeKind for ApnRestriction {
    const IE_TYPE: IeType = IeType::ApnRestriction;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u8(self.0);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<ApnRestriction> {
        Ok(ApnRestriction(buf.try_get_u8()?))
    }
}

// ===== impl RatType =====

impl IeKind for RatType {
    const IE_TYPE: IeType = IeType::RatType;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u8(self.0);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<RatType> {
        if buf.remaining() != 1 {
            return Err(DecodeError::InvalidLength(
                Self::IE_TYPE as u8,
                buf.remaining() as u16,
            ));
        }
        Ok(RatType(buf.try_get_u8()?))
    }
}

// ===== impl ChargingCharacteristics =====

impl IeKind for ChargingCharacteristics {
    const IE_TYPE: IeType = IeType::ChargingCharacteristics;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u16(self.0);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<ChargingCharacteristics> {
        Ok(ChargingCharacteristics(buf.try_get_u16()?))
    }
}

// ===== impl TraceReference =====

impl IeKind for TraceReference {
    const IE_TYPE: IeType = IeType::TraceReference;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u16(self.0);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<TraceReference> {
        Ok(TraceReference(buf.try_get_u16()?))
    }
}

// ===== impl TraceType =====

impl IeKind for TraceType {
    const IE_TYPE: IeType = IeType::TraceType;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u16(self.0);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<TraceType> {
        Ok(TraceType(buf.try_get_u16()?))
    }
}

// ===== impl CommonFlags =====

impl IeKind for CommonFlags {
    const IE_TYPE: IeType = IeType::CommonFlags;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u8(self.bits());
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<CommonFlags> {
        if buf.remaining() != 1 {
            return Err(DecodeError::InvalidLength(
                Self::IE_TYPE as u8,
                buf.remaining() as u16,
            ));
        }
        // Unknown bits are kept so they survive a decode/encode cycle.
        Ok(CommonFlags::from_bits_retain(buf.try_get_u8()?))
    }
}
