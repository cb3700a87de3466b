//
// Copyright (c) The GTP-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::IpAddr;

use bytes::{Buf, BufMut, Bytes, BytesMut};
use derive_new::new;
use gtp_utils::bytes::{BytesExt, BytesMutExt};
use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, DecodeResult};
use crate::v1::ie::{IeKind, IeType};

//
// End User Address IE.
//
// The value starts with the PDP type organization and PDP type number
// octets, followed by the address. The address family is recovered on
// decode from the remaining length alone (4 or 16 bytes), never from
// the type octets.
//
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct EndUserAddress(pub IpAddr);

//
// Access Point Name IE.
//
// Encoded domain-name style: each dot-separated label is written as a
// length octet followed by the label bytes.
//
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct AccessPointName(pub String);

// GSN Address IE. A bare 4- or 16-byte address, family from the length.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct GsnAddress(pub IpAddr);

// ===== impl EndUserAddress =====

impl EndUserAddress {
    // PDP type organization and number octets, byte-exact with the
    // reference implementation.
    const PDP_HDR_V4: [u8; 2] = [0xf1, 0x21];
    const PDP_HDR_V6: [u8; 2] = [0x00, 0x57];
}

impl IeKind for EndUserAddress {
    const IE_TYPE: IeType = IeType::EndUserAddress;

    fn encode_value(&self, buf: &mut BytesMut) {
        match self.0 {
            IpAddr::V4(_) => buf.put_slice(&Self::PDP_HDR_V4),
            IpAddr::V6(_) => buf.put_slice(&Self::PDP_HDR_V6),
        }
        buf.put_ip(&self.0);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<EndUserAddress> {
        let _pdp_org = buf.try_get_u8()?;
        let _pdp_type = buf.try_get_u8()?;
        let addr = match buf.remaining() {
            4 => IpAddr::V4(buf.try_get_ipv4()?),
            16 => IpAddr::V6(buf.try_get_ipv6()?),
            len => {
                return Err(DecodeError::InvalidLength(
                    Self::IE_TYPE as u8,
                    len as u16 + 2,
                ));
            }
        };
        Ok(EndUserAddress(addr))
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

// ===== impl GsnAddress =====

impl IeKind for GsnAddress {
    const IE_TYPE: IeType = IeType::GsnAddress;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_ip(&self.0);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<GsnAddress> {
        let addr = match buf.remaining() {
            4 => IpAddr::V4(buf.try_get_ipv4()?),
            16 => IpAddr::V6(buf.try_get_ipv6()?),
            len => {
                return Err(DecodeError::InvalidLength(
                    Self::IE_TYPE as u8,
                    len as u16,
                ));
            }
        };
        Ok(GsnAddress(addr))
    }
}
