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

// TEID Data I IE. User-plane tunnel endpoint identifier.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct TeidDataI(pub u32);

// TEID C-Plane IE. Control-plane tunnel endpoint identifier.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct TeidCPlane(pub u32);

// TEID Data II IE.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct TeidDataII(pub u32);

// Charging ID IE.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct ChargingId(pub u32);

// ===== impl TeidDataI =====

impl IeKind for TeidDataI {
    const IE_TYPE: IeType = IeType::TeidDataI;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u32(self.0);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<TeidDataI> {
        Ok(TeidDataI(buf.try_get_u32()?))
    }
}

// ===== impl TeidCPlane =====

impl IeKind for TeidCPlane {
    const IE_TYPE: IeType = IeType::TeidCPlane;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u32(self.0);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<TeidCPlane> {
        Ok(TeidCPlane(buf.try_get_u32()?))
    }
}

// ===== impl TeidDataII =====

impl IeKind for TeidDataII {
    const IE_TYPE: IeType = IeType::TeidDataII;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u32(self.0);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<TeidDataII> {
        Ok(TeidDataII(buf.try_get_u32()?))
    }
}

// ===== impl ChargingId =====

impl IeKind for ChargingId {
    const IE_TYPE: IeType = IeType::ChargingId;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u32(self.0);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<ChargingId> {
        Ok(ChargingId(buf.try_get_u32()?))
    }
}
