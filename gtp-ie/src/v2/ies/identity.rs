//
// Copyright (c) The GTP-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

use bytes::{Buf, Bytes, BytesMut};
use gtp_utils::bcd::{BcdError, BcdString};
use serde::{Deserialize, Serialize};

use crate::error::DecodeResult;
use crate::v2::ie::{IeKind, IeType};

// IMSI IE. Up to 15 TBCD digits, no fixed-width padding: the IE length
// follows the digit count.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct Imsi(BcdString);

// Mobile Equipment Identity IE. Carries the IMEI (15 digits) or the
// IMEISV (16 digits) as plain TBCD.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct MobileEquipmentIdentity(BcdString);

// MSISDN IE. Plain TBCD digits, international format, without the
// numbering-plan octet used by GTPv1.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct Msisdn(BcdString);

// ===== impl Imsi =====

impl Imsi {
    const MAX_DIGITS: usize = 15;

    pub fn new(digits: &str) -> Result<Imsi, BcdError> {
        let digits = BcdString::new(digits)?;
        if digits.digits() > Self::MAX_DIGITS {
            return Err(BcdError::InvalidLength(digits.digits()));
        }
        Ok(Imsi(digits))
    }

    pub fn digits(&self) -> &str {
        self.0.as_str()
    }
}

impl IeKind for Imsi {
    const IE_TYPE: IeType = IeType::Imsi;

    fn encode_value(&self, buf: &mut BytesMut) {
        self.0.encode(buf);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<Imsi> {
        let wire_len = buf.remaining();
        let digits = BcdString::decode(buf, wire_len)?;
        Ok(Imsi(digits))
    }
}

// ===== impl MobileEquipmentIdentity =====

impl MobileEquipmentIdentity {
    const MAX_DIGITS: usize = 16;

    pub fn new(digits: &str) -> Result<MobileEquipmentIdentity, BcdError> {
        let digits = BcdString::new(digits)?;
        if digits.digits() > Self::MAX_DIGITS {
            return Err(BcdError::InvalidLength(digits.digits()));
        }
        Ok(MobileEquipmentIdentity(digits))
    }

    pub fn digits(&self) -> &str {
        self.0.as_str()
    }
}

impl IeKind for MobileEquipmentIdentity {
    const IE_TYPE: IeType = IeType::MobileEquipmentIdentity;

    fn encode_value(&self, buf: &mut BytesMut) {
        self.0.encode(buf);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<MobileEquipmentIdentity> {
        let wire_len = buf.remaining();
        let digits = BcdString::decode(buf, wire_len)?;
        Ok(MobileEquipmentIdentity(digits))
    }
}

// ===== impl Msisdn =====

impl Msisdn {
    const MAX_DIGITS: usize = 15;

    pub fn new(digits: &str) -> Result<Msisdn, BcdError> {
        let digits = BcdString::new(digits)?;
        if digits.digits() > Self::MAX_DIGITS {
            return Err(BcdError::InvalidLength(digits.digits()));
        }
        Ok(Msisdn(digits))
    }

    pub fn digits(&self) -> &str {
        self.0.as_str()
    }
}

impl IeKind for Msisdn {
    const IE_TYPE: IeType = IeType::Msisdn;

    fn encode_value(&self, buf: &mut BytesMut) {
        self.0.encode(buf);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<Msisdn> {
        let wire_len = buf.remaining();
        let digits = BcdString::decode(buf, wire_len)?;
        Ok(Msisdn(digits))
    }
}
