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
use crate::v2::ie::{IeKind, IeType};

//
// Cause IE.
//
// The short form is two octets (cause value + flags). When the CS flag
// reports an offending IE, four more octets follow identifying it:
//
//  0                   1                   2                   3
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |  Cause value  | Spare |P|B|C|  Off. Type    |  Off. Length
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//       ...       | Sp. | O.Inst|
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct Cause {
    pub value: u8,
    pub flags: CauseFlags,
    pub offending_ie: Option<OffendingIe>,
}

bitflags! {
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    #[derive(Deserialize, Serialize)]
    #[serde(transparent)]
    pub struct CauseFlags: u8 {
        const PCE = 0x04;
        const BCE = 0x02;
        const CS = 0x01;
    }
}

// Header of the IE that triggered a rejection cause.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct OffendingIe {
    pub ie_type: u8,
    pub length: u16,
    pub instance: u8,
}

// Recovery IE. The restart counter of the sending node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct Recovery(pub u8);

// Access Point Name IE. Dot-separated labels, each written as a length
// octet followed by the label bytes.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct AccessPointName(pub String);

// Private Extension IE. An IANA enterprise number followed by an opaque
// value.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct PrivateExtension {
    pub enterprise_id: u16,
    pub value: Bytes,
}

// ===== impl Cause =====

// Well-known cause values.
impl Cause {
    pub const REQUEST_ACCEPTED: u8 = 16;
    pub const REQUEST_ACCEPTED_PARTIALLY: u8 = 17;
    pub const NEW_PDN_TYPE_NETWORK_PREFERENCE: u8 = 18;
    pub const CONTEXT_NOT_FOUND: u8 = 64;
    pub const INVALID_MESSAGE_FORMAT: u8 = 65;
    pub const MANDATORY_IE_MISSING: u8 = 70;
    pub const SYSTEM_FAILURE: u8 = 72;
    pub const NO_RESOURCES_AVAILABLE: u8 = 73;
}

impl IeKind for Cause {
    const IE_TYPE: IeType = IeType::Cause;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u8(self.value);
        buf.put_u8(self.flags.bits());
        if let Some(offending_ie) = &self.offending_ie {
            buf.put_u8(offending_ie.ie_type);
            buf.put_u16(offending_ie.length);
            buf.put_u8(offending_ie.instance & 0x0f);
        }
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<Cause> {
        let len = buf.remaining();
        if len != 2 && len != 6 {
            return Err(DecodeError::InvalidLength(
                Self::IE_TYPE as u8,
                len as u16,
            ));
        }

        let value = buf.try_get_u8()?;
        let flags = CauseFlags::from_bits_retain(buf.try_get_u8()?);
        let mut offending_ie = None;
        if len == 6 {
            let ie_type = buf.try_get_u8()?;
            let length = buf.try_get_u16()?;
            let instance = buf.try_get_u8()? & 0x0f;
            offending_ie = Some(OffendingIe {
                ie_type,
                length,
                instance,
            });
        }

        Ok(Cause {
            value,
            flags,
            offending_ie,
        })
    }
}

// ===== impl Recovery =====

impl IeKind for Recovery {
    const IE_TYPE: IeType = IeType::Recovery;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u8(self.0);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<Recovery> {
        let counter = buf.try_get_u8()?;
        Ok(Recovery(counter))
    }
}

// ===== impl AccessPointName =====

impl IeKind for AccessPointName {
    const IE_TYPE: IeType = IeType::AccessPointName;

    fn encode_value(&self, buf: &mut BytesMut) {
        for label in self.0.split('.') {
            buf.put_u8(label.len() as u8);
            buf.put_slice(label.as_bytes());
        }
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<AccessPointName> {
        let mut labels = Vec::new();
        while buf.remaining() > 0 {
            let label_len = buf.try_get_u8()? as usize;
            if label_len > buf.remaining() {
                return Err(DecodeError::ReadOutOfBounds);
            }
            let label = buf.copy_to_bytes(label_len);
            labels.push(String::from_utf8_lossy(&label).into_owned());
        }
        Ok(AccessPointName(labels.join(".")))
    }
}

// ===== impl PrivateExtension =====

impl IeKind for PrivateExtension {
    const IE_TYPE: IeType = IeType::PrivateExtension;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u16(self.enterprise_id);
        buf.put_slice(&self.value);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<PrivateExtension> {
        if buf.remaining() < 2 {
            return Err(DecodeError::InvalidLength(
                Self::IE_TYPE as u8,
                buf.remaining() as u16,
            ));
        }
        let enterprise_id = buf.try_get_u16()?;
        let value = buf.copy_to_bytes(buf.remaining());
        Ok(PrivateExtension {
            enterprise_id,
            value,
        })
    }
}
