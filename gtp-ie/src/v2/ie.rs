//
// Copyright (c) The GTP-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

use bytes::{Buf, BufMut, Bytes, BytesMut};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug_span;

use crate::error::{DecodeError, DecodeResult};
use crate::v2::ies::*;

//
// GTPv2 Information Element.
//
// Every IE is TLV encoded. The fourth header octet carries the instance
// in its low nibble, allowing several IEs of the same type within one
// message:
//
//  0                   1                   2                   3
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |     Type      |            Length             | Spare |  Inst |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                             Value                             |
// ~                                                               ~
//
pub const IE_HDR_SIZE: usize = 4;

// GTPv2 IE types.
//
// Defined in 3GPP TS 29.274, Table 8.1-1.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[derive(FromPrimitive, ToPrimitive)]
#[derive(Deserialize, Serialize)]
pub enum IeType {
    Imsi = 1,
    Cause = 2,
    Recovery = 3,
    AccessPointName = 71,
    MobileEquipmentIdentity = 75,
    Msisdn = 76,
    UserLocationInformation = 86,
    PrivateExtension = 255,
}

// GTPv2 IE: the instance discriminator plus the typed body.
#[derive(Clone, Debug, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct Ie {
    pub instance: u8,
    pub body: IeBody,
}

#[derive(Clone, Debug, PartialEq)]
#[derive(Deserialize, Serialize)]
pub enum IeBody {
    Imsi(Imsi),
    Cause(Cause),
    Recovery(Recovery),
    AccessPointName(AccessPointName),
    MobileEquipmentIdentity(MobileEquipmentIdentity),
    Msisdn(Msisdn),
    UserLocationInformation(UserLocationInformation),
    PrivateExtension(PrivateExtension),
}

// Trait implemented by every IE value codec.
pub trait IeKind: std::fmt::Debug {
    const IE_TYPE: IeType;

    fn encode_value(&self, buf: &mut BytesMut);

    fn decode_value(buf: &mut Bytes) -> DecodeResult<Self>
    where
        Self: Sized;
}

// ===== impl IeType =====

impl std::fmt::Display for IeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IeType::Imsi => write!(f, "IMSI"),
            IeType::Cause => write!(f, "Cause"),
            IeType::Recovery => write!(f, "Recovery"),
            IeType::AccessPointName => write!(f, "Access Point Name"),
            IeType::MobileEquipmentIdentity => {
                write!(f, "Mobile Equipment Identity")
            }
            IeType::Msisdn => write!(f, "MSISDN"),
            IeType::UserLocationInformation => {
                write!(f, "User Location Information")
            }
            IeType::PrivateExtension => write!(f, "Private Extension"),
        }
    }
}

// ===== impl Ie =====

impl Ie {
    pub fn new(instance: u8, body: IeBody) -> Ie {
        Ie { instance, body }
    }

    pub fn ie_type(&self) -> IeType {
        match &self.body {
            IeBody::Imsi(_) => IeType::Imsi,
            IeBody::Cause(_) => IeType::Cause,
            IeBody::Recovery(_) => IeType::Recovery,
            IeBody::AccessPointName(_) => IeType::AccessPointName,
            IeBody::MobileEquipmentIdentity(_) => {
                IeType::MobileEquipmentIdentity
            }
            IeBody::Msisdn(_) => IeType::Msisdn,
            IeBody::UserLocationInformation(_) => {
                IeType::UserLocationInformation
            }
            IeBody::PrivateExtension(_) => IeType::PrivateExtension,
        }
    }

    pub fn encode(&self, buf: &mut BytesMut) {
        let start_pos = ie_encode_start(buf, self.ie_type(), self.instance);
        match &self.body {
            IeBody::Imsi(ie) => ie.encode_value(buf),
            IeBody::Cause(ie) => ie.encode_value(buf),
            IeBody::Recovery(ie) => ie.encode_value(buf),
            IeBody::AccessPointName(ie) => ie.encode_value(buf),
            IeBody::MobileEquipmentIdentity(ie) => ie.encode_value(buf),
            IeBody::Msisdn(ie) => ie.encode_value(buf),
            IeBody::UserLocationInformation(ie) => ie.encode_value(buf),
            IeBody::PrivateExtension(ie) => ie.encode_value(buf),
        }
        ie_encode_end(buf, start_pos);
    }

    // Decodes one IE, advancing `buf` past it. Trailing bytes are left in
    // place since IEs are commonly concatenated back-to-back.
    pub fn decode(buf: &mut Bytes) -> DecodeResult<Ie> {
        // Parse IE type and look it up in the registry.
        let ie_type = buf.try_get_u8()?;
        let ie_etype = IeType::from_u8(ie_type)
            .ok_or(DecodeError::UndefinedType(ie_type))?;

        // Parse length and instance.
        let len = buf.try_get_u16()? as usize;
        let instance = buf.try_get_u8()? & 0x0f;
        if len > buf.remaining() {
            return Err(DecodeError::ReadOutOfBounds);
        }

        // Parse IE value.
        let span = debug_span!(
            "IE",
            r#type = ie_type,
            length = len,
            instance = instance
        );
        let _span_guard = span.enter();
        let mut buf_value = buf.copy_to_bytes(len);
        let body = match ie_etype {
            IeType::Imsi => IeBody::Imsi(Imsi::decode_value(&mut buf_value)?),
            IeType::Cause => {
                IeBody::Cause(Cause::decode_value(&mut buf_value)?)
            }
            IeType::Recovery => {
                IeBody::Recovery(Recovery::decode_value(&mut buf_value)?)
            }
            IeType::AccessPointName => IeBody::AccessPointName(
                AccessPointName::decode_value(&mut buf_value)?,
            ),
            IeType::MobileEquipmentIdentity => {
                IeBody::MobileEquipmentIdentity(
                    MobileEquipmentIdentity::decode_value(&mut buf_value)?,
                )
            }
            IeType::Msisdn => {
                IeBody::Msisdn(Msisdn::decode_value(&mut buf_value)?)
            }
            IeType::UserLocationInformation => {
                IeBody::UserLocationInformation(
                    UserLocationInformation::decode_value(&mut buf_value)?,
                )
            }
            IeType::PrivateExtension => IeBody::PrivateExtension(
                PrivateExtension::decode_value(&mut buf_value)?,
            ),
        };

        Ok(Ie { instance, body })
    }

    // Decodes a concatenated IE sequence, consuming the whole buffer.
    pub fn decode_all(buf: &mut Bytes) -> DecodeResult<Vec<Ie>> {
        let mut ies = Vec::new();
        while buf.remaining() > 0 {
            ies.push(Ie::decode(buf)?);
        }
        Ok(ies)
    }
}

// ===== global functions =====

pub(crate) fn ie_encode_start(
    buf: &mut BytesMut,
    ie_type: IeType,
    instance: u8,
) -> usize {
    let start_pos = buf.len();
    buf.put_u8(ie_type as u8);
    // The IE length will be rewritten later.
    buf.put_u16(0);
    buf.put_u8(instance & 0x0f);
    start_pos
}

pub(crate) fn ie_encode_end(buf: &mut BytesMut, start_pos: usize) {
    // Rewrite IE length.
    let ie_len = (buf.len() - start_pos - IE_HDR_SIZE) as u16;
    buf[start_pos + 1..start_pos + 3].copy_from_slice(&ie_len.to_be_bytes());
}
