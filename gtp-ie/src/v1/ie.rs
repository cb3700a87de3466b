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
use crate::v1::ies::*;

//
// GTPv1 Information Element.
//
// Two framings exist, selected by the IE type. Types below 0x80 are TV
// encoded, with a value length implied by the type:
//
//  0                   1
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |0|    Type     |     Value     |
// +-+-+-+-+-+-+-+-+      ~        ~
//
// Types from 0x80 up are TLV encoded, with an explicit 2-byte length
// counting the value bytes only:
//
//  0                   1                   2
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |1|    Type     |            Length             |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                     Value                     |
// ~                                               ~
//
pub const IE_TLV_HDR_SIZE: usize = 3;

// GTPv1 IE types.
//
// Defined in 3GPP TS 29.060, Table 37.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[derive(FromPrimitive, ToPrimitive)]
#[derive(Deserialize, Serialize)]
pub enum IeType {
    Cause = 0x01,
    Imsi = 0x02,
    RouteingAreaIdentity = 0x03,
    Tlli = 0x04,
    PacketTmsi = 0x05,
    ReorderingRequired = 0x08,
    AuthenticationTriplet = 0x09,
    MapCause = 0x0b,
    PTmsiSignature = 0x0c,
    MsValidated = 0x0d,
    Recovery = 0x0e,
    SelectionMode = 0x0f,
    TeidDataI = 0x10,
    TeidCPlane = 0x11,
    TeidDataII = 0x12,
    TeardownInd = 0x13,
    Nsapi = 0x14,
    RanapCause = 0x15,
    ChargingCharacteristics = 0x1a,
    TraceReference = 0x1b,
    TraceType = 0x1c,
    ChargingId = 0x7f,
    EndUserAddress = 0x80,
    AccessPointName = 0x83,
    GsnAddress = 0x85,
    Msisdn = 0x86,
    AuthenticationQuintuplet = 0x88,
    CommonFlags = 0x94,
    ApnRestriction = 0x95,
    RatType = 0x97,
    UserLocationInformation = 0x98,
    MsTimeZone = 0x99,
    Imeisv = 0x9a,
    UliTimestamp = 0xd6,
    PrivateExtension = 0xff,
}

// IE framing: TV carries a fixed-length value implied by the type, TLV
// carries an explicit 2-byte length field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IeWireFormat {
    Tv(usize),
    Tlv,
}

// GTPv1 IE.
#[derive(Clone, Debug, PartialEq)]
#[derive(Deserialize, Serialize)]
pub enum Ie {
    Cause(Cause),
    Imsi(Imsi),
    RouteingAreaIdentity(RouteingAreaIdentity),
    Tlli(Tlli),
    PacketTmsi(PacketTmsi),
    ReorderingRequired(ReorderingRequired),
    AuthenticationTriplet(AuthenticationTriplet),
    MapCause(MapCause),
    PTmsiSignature(PTmsiSignature),
    MsValidated(MsValidated),
    Recovery(Recovery),
    SelectionMode(SelectionMode),
    TeidDataI(TeidDataI),
    TeidCPlane(TeidCPlane),
    TeidDataII(TeidDataII),
    TeardownInd(TeardownInd),
    Nsapi(Nsapi),
    RanapCause(RanapCause),
    ChargingCharacteristics(ChargingCharacteristics),
    TraceReference(TraceReference),
    TraceType(TraceType),
    ChargingId(ChargingId),
    EndUserAddress(EndUserAddress),
    AccessPointName(AccessPointName),
    GsnAddress(GsnAddress),
    Msisdn(Msisdn),
    AuthenticationQuintuplet(AuthenticationQuintuplet),
    CommonFlags(CommonFlags),
    ApnRestriction(ApnRestriction),
    RatType(RatType),
    UserLocationInformation(UserLocationInformation),
    MsTimeZone(MsTimeZone),
    Imeisv(Imeisv),
    UliTimestamp(UliTimestamp),
    PrivateExtension(PrivateExtension),
}

// Trait implemented by every IE value codec.
pub trait IeKind: std::fmt::Debug {
    const IE_TYPE: IeType;

    fn encode_value(&self, buf: &mut BytesMut);

    fn decode_value(buf: &mut Bytes) -> DecodeResult<Self>
    where
        Self: Sized;

    fn encode(&self, buf: &mut BytesMut) {
        match Self::IE_TYPE.wire_format() {
            IeWireFormat::Tv(_) => {
                buf.put_u8(Self::IE_TYPE as u8);
                self.encode_value(buf);
            }
            IeWireFormat::Tlv => {
                let start_pos = ie_encode_start(buf, Self::IE_TYPE);
                self.encode_value(buf);
                ie_encode_end(buf, start_pos);
            }
        }
    }
}

// ===== impl IeType =====

impl IeType {
    // Single source of truth for the framing of every IE type, including
    // the fixed value length of the TV-framed ones.
    pub const fn wire_format(&self) -> IeWireFormat {
        match self {
            IeType::Cause => IeWireFormat::Tv(1),
            IeType::Imsi => IeWireFormat::Tv(8),
            IeType::RouteingAreaIdentity => IeWireFormat::Tv(6),
            IeType::Tlli => IeWireFormat::Tv(4),
            IeType::PacketTmsi => IeWireFormat::Tv(4),
            IeType::ReorderingRequired => IeWireFormat::Tv(1),
            IeType::AuthenticationTriplet => IeWireFormat::Tv(28),
            IeType::MapCause => IeWireFormat::Tv(1),
            IeType::PTmsiSignature => IeWireFormat::Tv(3),
            IeType::MsValidated => IeWireFormat::Tv(1),
            IeType::Recovery => IeWireFormat::Tv(1),
            IeType::SelectionMode => IeWireFormat::Tv(1),
            IeType::TeidDataI => IeWireFormat::Tv(4),
            IeType::TeidCPlane => IeWireFormat::Tv(4),
            IeType::TeidDataII => IeWireFormat::Tv(4),
            IeType::TeardownInd => IeWireFormat::Tv(1),
            IeType::Nsapi => IeWireFormat::Tv(1),
            IeType::RanapCause => IeWireFormat::Tv(1),
            IeType::ChargingCharacteristics => IeWireFormat::Tv(2),
            IeType::TraceReference => IeWireFormat::Tv(2),
            IeType::TraceType => IeWireFormat::Tv(2),
            IeType::ChargingId => IeWireFormat::Tv(4),
            IeType::EndUserAddress
            | IeType::AccessPointName
            | IeType::GsnAddress
            | IeType::Msisdn
            | IeType::AuthenticationQuintuplet
            | IeType::CommonFlags
            | IeType::ApnRestriction
            | IeType::RatType
            | IeType::UserLocationInformation
            | IeType::MsTimeZone
            | IeType::Imeisv
            | IeType::UliTimestamp
            | IeType::PrivateExtension => IeWireFormat::Tlv,
        }
    }
}

impl std::fmt::Display for IeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IeType::Cause => write!(f, "Cause"),
            IeType::Imsi => write!(f, "IMSI"),
            IeType::RouteingAreaIdentity => write!(f, "Routeing Area Identity"),
            IeType::Tlli => write!(f, "TLLI"),
            IeType::PacketTmsi => write!(f, "Packet TMSI"),
            IeType::ReorderingRequired => write!(f, "Reordering Required"),
            IeType::AuthenticationTriplet => {
                write!(f, "Authentication Triplet")
            }
            IeType::MapCause => write!(f, "MAP Cause"),
            IeType::PTmsiSignature => write!(f, "P-TMSI Signature"),
            IeType::MsValidated => write!(f, "MS Validated"),
            IeType::Recovery => write!(f, "Recovery"),
            IeType::SelectionMode => write!(f, "Selection Mode"),
            IeType::TeidDataI => write!(f, "TEID Data I"),
            IeType::TeidCPlane => write!(f, "TEID C-Plane"),
            IeType::TeidDataII => write!(f, "TEID Data II"),
            IeType::TeardownInd => write!(f, "Teardown Indication"),
            IeType::Nsapi => write!(f, "NSAPI"),
            IeType::RanapCause => write!(f, "RANAP Cause"),
            IeType::ChargingCharacteristics => {
                write!(f, "Charging Characteristics")
            }
            IeType::TraceReference => write!(f, "Trace Reference"),
            IeType::TraceType => write!(f, "Trace Type"),
            IeType::ChargingId => write!(f, "Charging ID"),
            IeType::EndUserAddress => write!(f, "End User Address"),
            IeType::AccessPointName => write!(f, "Access Point Name"),
            IeType::GsnAddress => write!(f, "GSN Address"),
            IeType::Msisdn => write!(f, "MSISDN"),
            IeType::AuthenticationQuintuplet => {
                write!(f, "Authentication Quintuplet")
            }
            IeType::CommonFlags => write!(f, "Common Flags"),
            IeType::ApnRestriction => write!(f, "APN Restriction"),
            IeType::RatType => write!(f, "RAT Type"),
            IeType::UserLocationInformation => {
                write!(f, "User Location Information")
            }
            IeType::MsTimeZone => write!(f, "MS Time Zone"),
            IeType::Imeisv => write!(f, "IMEI(SV)"),
            IeType::UliTimestamp => write!(f, "ULI Timestamp"),
            IeType::PrivateExtension => write!(f, "Private Extension"),
        }
    }
}

// ===== impl Ie =====

impl Ie {
    pub fn ie_type(&self) -> IeType {
        match self {
            Ie::Cause(_) => IeType::Cause,
            Ie::Imsi(_) => IeType::Imsi,
            Ie::RouteingAreaIdentity(_) => IeType::RouteingAreaIdentity,
            Ie::Tlli(_) => IeType::Tlli,
            Ie::PacketTmsi(_) => IeType::PacketTmsi,
            Ie::ReorderingRequired(_) => IeType::ReorderingRequired,
            Ie::AuthenticationTriplet(_) => IeType::AuthenticationTriplet,
            Ie::MapCause(_) => IeType::MapCause,
            Ie::PTmsiSignature(_) => IeType::PTmsiSignature,
            Ie::MsValidated(_) => IeType::MsValidated,
            Ie::Recovery(_) => IeType::Recovery,
            Ie::SelectionMode(_) => IeType::SelectionMode,
            Ie::TeidDataI(_) => IeType::TeidDataI,
            Ie::TeidCPlane(_) => IeType::TeidCPlane,
            Ie::TeidDataII(_) => IeType::TeidDataII,
            Ie::TeardownInd(_) => IeType::TeardownInd,
            Ie::Nsapi(_) => IeType::Nsapi,
            Ie::RanapCause(_) => IeType::RanapCause,
            Ie::ChargingCharacteristics(_) => IeType::ChargingCharacteristics,
            Ie::TraceReference(_) => IeType::TraceReference,
            Ie::TraceType(_) => IeType::TraceType,
            Ie::ChargingId(_) => IeType::ChargingId,
            Ie::EndUserAddress(_) => IeType::EndUserAddress,
            Ie::AccessPointName(_) => IeType::AccessPointName,
            Ie::GsnAddress(_) => IeType::GsnAddress,
            Ie::Msisdn(_) => IeType::Msisdn,
            Ie::AuthenticationQuintuplet(_) => IeType::AuthenticationQuintuplet,
            Ie::CommonFlags(_) => IeType::CommonFlags,
            Ie::ApnRestriction(_) => IeType::ApnRestriction,
            Ie::RatType(_) => IeType::RatType,
            Ie::UserLocationInformation(_) => IeType::UserLocationInformation,
            Ie::MsTimeZone(_) => IeType::MsTimeZone,
            Ie::Imeisv(_) => IeType::Imeisv,
            Ie::UliTimestamp(_) => IeType::UliTimestamp,
            Ie::PrivateExtension(_) => IeType::PrivateExtension,
        }
    }

    pub fn encode(&self, buf: &mut BytesMut) {
        match self {
            Ie::Cause(ie) => ie.encode(buf),
            Ie::Imsi(ie) => ie.encode(buf),
            Ie::RouteingAreaIdentity(ie) => ie.encode(buf),
            Ie::Tlli(ie) => ie.encode(buf),
            Ie::PacketTmsi(ie) => ie.encode(buf),
            Ie::ReorderingRequired(ie) => ie.encode(buf),
            Ie::AuthenticationTriplet(ie) => ie.encode(buf),
            Ie::MapCause(ie) => ie.encode(buf),
            Ie::PTmsiSignature(ie) => ie.encode(buf),
            Ie::MsValidated(ie) => ie.encode(buf),
            Ie::Recovery(ie) => ie.encode(buf),
            Ie::SelectionMode(ie) => ie.encode(buf),
            Ie::TeidDataI(ie) => ie.encode(buf),
            Ie::TeidCPlane(ie) => ie.encode(buf),
            Ie::TeidDataII(ie) => ie.encode(buf),
            Ie::TeardownInd(ie) => ie.encode(buf),
            Ie::Nsapi(ie) => ie.encode(buf),
            Ie::RanapCause(ie) => ie.encode(buf),
            Ie::ChargingCharacteristics(ie) => ie.encode(buf),
            Ie::TraceReference(ie) => ie.encode(buf),
            Ie::TraceType(ie) => ie.encode(buf),
            Ie::ChargingId(ie) => ie.encode(buf),
            Ie::EndUserAddress(ie) => ie.encode(buf),
            Ie::AccessPointName(ie) => ie.encode(buf),
            Ie::GsnAddress(ie) => ie.encode(buf),
            Ie::Msisdn(ie) => ie.encode(buf),
            Ie::AuthenticationQuintuplet(ie) => ie.encode(buf),
            Ie::CommonFlags(ie) => ie.encode(buf),
            Ie::ApnRestriction(ie) => ie.encode(buf),
            Ie::RatType(ie) => ie.encode(buf),
            Ie::UserLocationInformation(ie) => ie.encode(buf),
            Ie::MsTimeZone(ie) => ie.encode(buf),
            Ie::Imeisv(ie) => ie.encode(buf),
            Ie::UliTimestamp(ie) => ie.encode(buf),
            Ie::PrivateExtension(ie) => ie.encode(buf),
        }
    }

    // Decodes one IE, advancing `buf` past it. Trailing bytes are left in
    // place since IEs are commonly concatenated back-to-back.
    pub fn decode(buf: &mut Bytes) -> DecodeResult<Ie> {
        // Parse IE type and look it up in the registry.
        let ie_type = buf.try_get_u8()?;
        let ie_etype = IeType::from_u8(ie_type)
            .ok_or(DecodeError::UndefinedType(ie_type))?;

        // Obtain the value length from the framing.
        let len = match ie_etype.wire_format() {
            IeWireFormat::Tv(len) => len,
            IeWireFormat::Tlv => buf.try_get_u16()? as usize,
        };
        if len > buf.remaining() {
            return Err(DecodeError::ReadOutOfBounds);
        }

        // Parse IE value.
        let span = debug_span!("IE", r#type = ie_type, length = len);
        let _span_guard = span.enter();
        let mut buf_value = buf.copy_to_bytes(len);
        let ie = match ie_etype {
            IeType::Cause => Ie::Cause(Cause::decode_value(&mut buf_value)?),
            IeType::Imsi => Ie::Imsi(Imsi::decode_value(&mut buf_value)?),
            IeType::RouteingAreaIdentity => Ie::RouteingAreaIdentity(
                RouteingAreaIdentity::decode_value(&mut buf_value)?,
            ),
            IeType::Tlli => Ie::Tlli(Tlli::decode_value(&mut buf_value)?),
            IeType::PacketTmsi => {
                Ie::PacketTmsi(PacketTmsi::decode_value(&mut buf_value)?)
            }
            IeType::ReorderingRequired => Ie::ReorderingRequired(
                ReorderingRequired::decode_value(&mut buf_value)?,
            ),
            IeType::AuthenticationTriplet => Ie::AuthenticationTriplet(
                AuthenticationTriplet::decode_value(&mut buf_value)?,
            ),
            IeType::MapCause => {
                Ie::MapCause(MapCause::decode_value(&mut buf_value)?)
            }
            IeType::PTmsiSignature => Ie::PTmsiSignature(
                PTmsiSignature::decode_value(&mut buf_value)?,
            ),
            IeType::MsValidated => {
                Ie::MsValidated(MsValidated::decode_value(&mut buf_value)?)
            }
            IeType::Recovery => {
                Ie::Recovery(Recovery::decode_value(&mut buf_value)?)
            }
            IeType::SelectionMode => {
                Ie::SelectionMode(SelectionMode::decode_value(&mut buf_value)?)
            }
            IeType::TeidDataI => {
                Ie::TeidDataI(TeidDataI::decode_value(&mut buf_value)?)
            }
            IeType::TeidCPlane => {
                Ie::TeidCPlane(TeidCPlane::decode_value(&mut buf_value)?)
            }
            IeType::TeidDataII => {
                Ie::TeidDataII(TeidDataII::decode_value(&mut buf_value)?)
            }
            IeType::TeardownInd => {
                Ie::TeardownInd(TeardownInd::decode_value(&mut buf_value)?)
            }
            IeType::Nsapi => Ie::Nsapi(Nsapi::decode_value(&mut buf_value)?),
            IeType::RanapCause => {
                Ie::RanapCause(RanapCause::decode_value(&mut buf_value)?)
            }
            IeType::ChargingCharacteristics => Ie::ChargingCharacteristics(
                ChargingCharacteristics::decode_value(&mut buf_value)?,
            ),
            IeType::TraceReference => Ie::TraceReference(
                TraceReference::decode_value(&mut buf_value)?,
            ),
            IeType::TraceType => {
                Ie::TraceType(TraceType::decode_value(&mut buf_value)?)
            }
            IeType::ChargingId => {
                Ie::ChargingId(ChargingId::decode_value(&mut buf_value)?)
            }
            IeType::EndUserAddress => Ie::EndUserAddress(
                EndUserAddress::decode_value(&mut buf_value)?,
            ),
            IeType::AccessPointName => Ie::AccessPointName(
                AccessPointName::decode_value(&mut buf_value)?,
            ),
            IeType::GsnAddress => {
                Ie::GsnAddress(GsnAddress::decode_value(&mut buf_value)?)
            }
            IeType::Msisdn => Ie::Msisdn(Msisdn::decode_value(&mut buf_value)?),
            IeType::AuthenticationQuintuplet => Ie::AuthenticationQuintuplet(
                AuthenticationQuintuplet::decode_value(&mut buf_value)?,
            ),
            IeType::CommonFlags => {
                Ie::CommonFlags(CommonFlags::decode_value(&mut buf_value)?)
            }
            IeType::ApnRestriction => Ie::ApnRestriction(
                ApnRestriction::decode_value(&mut buf_value)?,
            ),
            IeType::RatType => {
                Ie::RatType(RatType::decode_value(&mut buf_value)?)
            }
            IeType::UserLocationInformation => Ie::UserLocationInformation(
                UserLocationInformation::decode_value(&mut buf_value)?,
            ),
            IeType::MsTimeZone => {
                Ie::MsTimeZone(MsTimeZone::decode_value(&mut buf_value)?)
            }
            IeType::Imeisv => Ie::Imeisv(Imeisv::decode_value(&mut buf_value)?),
            IeType::UliTimestamp => {
                Ie::UliTimestamp(UliTimestamp::decode_value(&mut buf_value)?)
            }
            IeType::PrivateExtension => Ie::PrivateExtension(
                PrivateExtension::decode_value(&mut buf_value)?,
            ),
        };

        Ok(ie)
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

pub(crate) fn ie_encode_start(buf: &mut BytesMut, ie_type: IeType) -> usize {
    let start_pos = buf.len();
    buf.put_u8(ie_type as u8);
    // The IE length will be rewritten later.
    buf.put_u16(0);
    start_pos
}

pub(crate) fn ie_encode_end(buf: &mut BytesMut, start_pos: usize) {
    // Rewrite IE length.
    let ie_len = (buf.len() - start_pos - IE_TLV_HDR_SIZE) as u16;
    buf[start_pos + 1..start_pos + 3].copy_from_slice(&ie_len.to_be_bytes());
}
