//
// Copyright (c) The GTP-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

use bytes::{Buf, BufMut, Bytes, BytesMut};
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::error::DecodeResult;
use crate::v1::ie::{IeKind, IeType};

//
// Cause IE.
//
// The cause value is stored and round-tripped verbatim. Codes outside
// the published value set are not rejected so that protocol extensions
// survive a decode/encode cycle unchanged.
//
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct Cause(pub u8);

// MAP Cause IE.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct MapCause(pub u8);

// RANAP Cause IE.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct RanapCause(pub u8);

// Well-known cause values.
impl Cause {
    pub const REQUEST_ACCEPTED: u8 = 128;
    pub const NON_EXISTENT: u8 = 192;
    pub const INVALID_MESSAGE_FORMAT: u8 = 193;
    pub const IMSI_NOT_KNOWN: u8 = 194;
    pub const SYSTEM_FAILURE: u8 = 204;
    pub const MANDATORY_IE_INCORRECT: u8 = 201;
    pub const MANDATORY_IE_MISSING: u8 = 202;
    pub const NO_RESOURCES_AVAILABLE: u8 = 199;
}

// ===== impl Cause =====

impl IeKind for Cause {
    const IE_TYPE: IeType = IeType::Cause;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u8(self.0);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<Cause> {
        Ok(Cause(buf.try_get_u8()?))
    }
}

// ===== impl MapCause =====

impl IeKind for MapCause {
    const IE_TYPE: IeType = IeType::MapCause;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u8(self.0);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<MapCause> {
        Ok(MapCause(buf.try_get_u8()?))
    }
}

// ===== impl RanapCause =====

impl IeKind for RanapCause {
    const IE_TYPE: IeType = IeType::RanapCause;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u8(self.0);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<RanapCause> {
        Ok(RanapCause(buf.try_get_u8()?))
    }
}
