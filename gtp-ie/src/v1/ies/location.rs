//
// Copyright (c) The GTP-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

use bytes::{Buf, BufMut, Bytes, BytesMut};
use chrono::{DateTime, TimeZone, Utc};
use derive_new::new;
use gtp_utils::plmn::Plmn;
use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, DecodeResult};
use crate::v1::ie::{IeKind, IeType};

//
// User Location Information IE.
//
// The first value byte selects the geographic location type; exactly
// one location record follows, starting with the PLMN identity:
//
//   0 - CGI:  PLMN (3) + LAC (2) + CI (2)
//   1 - SAI:  PLMN (3) + LAC (2) + SAC (2)
//   2 - RAI:  PLMN (3) + LAC (2) + RAC (1)
//
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct UserLocationInformation(pub GeographicLocation);

#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub enum GeographicLocation {
    Cgi { plmn: Plmn, lac: u16, ci: u16 },
    Sai { plmn: Plmn, lac: u16, sac: u16 },
    Rai { plmn: Plmn, lac: u16, rac: u8 },
}

//
// MS Time Zone IE.
//
// The offset is encoded in quarter-hour units as two swapped BCD digits,
// with bit 3 of the first octet as the sign. The second octet carries
// the daylight saving adjustment in its two low bits.
//
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct MsTimeZone {
    pub offset_min: i16,
    pub dst_adjustment: u8,
}

// ULI Timestamp IE. Seconds since the NTP era (1900-01-01T00:00:00Z)
// as an unsigned 32-bit count. Only instants within the era's 32-bit
// window (1900 through early 2036) are representable; anything outside
// it wraps modulo 2^32 on encode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct UliTimestamp(pub DateTime<Utc>);

// Offset between the NTP era and the Unix epoch, in seconds.
const NTP_UNIX_EPOCH_OFFSET: i64 = 2_208_988_800;

// ===== impl UserLocationInformation =====

impl UserLocationInformation {
    const GEO_TYPE_CGI: u8 = 0;
    const GEO_TYPE_SAI: u8 = 1;
    const GEO_TYPE_RAI: u8 = 2;
}

impl IeKind for UserLocationInformation {
    const IE_TYPE: IeType = IeType::UserLocationInformation;

    fn encode_value(&self, buf: &mut BytesMut) {
        match &self.0 {
            GeographicLocation::Cgi { plmn, lac, ci } => {
                buf.put_u8(Self::GEO_TYPE_CGI);
                plmn.encode(buf);
                buf.put_u16(*lac);
                buf.put_u16(*ci);
            }
            GeographicLocation::Sai { plmn, lac, sac } => {
                buf.put_u8(Self::GEO_TYPE_SAI);
                plmn.encode(buf);
                buf.put_u16(*lac);
                buf.put_u16(*sac);
            }
            GeographicLocation::Rai { plmn, lac, rac } => {
                buf.put_u8(Self::GEO_TYPE_RAI);
                plmn.encode(buf);
                buf.put_u16(*lac);
                buf.put_u8(*rac);
            }
        }
    }

    fn decode_value(
        buf: &mut Bytes,
    ) -> DecodeResult<UserLocationInformation> {
        let geo_type = buf.try_get_u8()?;
        let plmn = Plmn::decode(buf)?;
        let lac = buf.try_get_u16()?;
        let geo = match geo_type {
            Self::GEO_TYPE_CGI => GeographicLocation::Cgi {
                plmn,
                lac,
                ci: buf.try_get_u16()?,
            },
            Self::GEO_TYPE_SAI => GeographicLocation::Sai {
                plmn,
                lac,
                sac: buf.try_get_u16()?,
            },
            Self::GEO_TYPE_RAI => GeographicLocation::Rai {
                plmn,
                lac,
                rac: buf.try_get_u8()?,
            },
            _ => {
                return Err(DecodeError::InvalidGeographicLocationType(
                    geo_type,
                ));
            }
        };
        Ok(UserLocationInformation(geo))
    }
}

// ===== impl MsTimeZone =====

impl IeKind for MsTimeZone {
    const IE_TYPE: IeType = IeType::MsTimeZone;

    fn encode_value(&self, buf: &mut BytesMut) {
        let quarters = (self.offset_min.unsigned_abs() / 15) as u8;
        let mut tz = ((quarters % 10) << 4) | (quarters / 10);
        if self.offset_min < 0 {
            tz |= 0x08;
        }
        buf.put_u8(tz);
        buf.put_u8(self.dst_adjustment & 0x03);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<MsTimeZone> {
        let tz = buf.try_get_u8()?;
        let dst = buf.try_get_u8()?;
        let quarters = ((tz & 0x07) * 10 + (tz >> 4)) as i16;
        let mut offset_min = quarters * 15;
        if tz & 0x08 != 0 {
            offset_min = -offset_min;
        }
        Ok(MsTimeZone {
            offset_min,
            dst_adjustment: dst & 0x03,
        })
    }
}

// ===== impl UliTimestamp =====

impl IeKind for UliTimestamp {
    const IE_TYPE: IeType = IeType::UliTimestamp;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u32((self.0.timestamp() + NTP_UNIX_EPOCH_OFFSET) as u32);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<UliTimestamp> {
        if buf.remaining() != 4 {
            return Err(DecodeError::InvalidLength(
                Self::IE_TYPE as u8,
                buf.remaining() as u16,
            ));
        }
        let secs = buf.try_get_u32()?;
        let ts = Utc
            .timestamp_opt(i64::from(secs) - NTP_UNIX_EPOCH_OFFSET, 0)
            .unwrap();
        Ok(UliTimestamp(ts))
    }
}
