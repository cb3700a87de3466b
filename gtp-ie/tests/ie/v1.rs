//
// Copyright (c) The GTP-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::IpAddr;
use std::str::FromStr;
use std::sync::LazyLock as Lazy;

use bytes::{Buf, Bytes, BytesMut};
use chrono::{TimeZone, Utc};
use gtp_ie::error::DecodeError;
use gtp_ie::v1::*;
use gtp_utils::plmn::Plmn;

//
// Helper functions.
//

fn plmn() -> Plmn {
    Plmn::new("123", "45").unwrap()
}

fn test_encode_ie(bytes_expected: &[u8], ie: &Ie) {
    let mut bytes_actual = BytesMut::with_capacity(256);
    ie.encode(&mut bytes_actual);
    assert_eq_hex!(bytes_expected, bytes_actual);
}

fn test_decode_ie(bytes: &[u8], ie_expected: &Ie) {
    let mut buf = Bytes::copy_from_slice(bytes);
    let ie_actual = Ie::decode(&mut buf).unwrap();
    assert_eq!(*ie_expected, ie_actual);
    assert_eq!(buf.remaining(), 0);
}

fn all_vectors() -> Vec<&'static (Vec<u8>, Ie)> {
    vec![
        &CAUSE1,
        &IMSI1,
        &RAI1,
        &TLLI1,
        &PACKET_TMSI1,
        &REORDERING_REQUIRED1,
        &REORDERING_REQUIRED2,
        &AUTH_TRIPLET1,
        &MAP_CAUSE1,
        &PTMSI_SIGNATURE1,
        &MS_VALIDATED1,
        &RECOVERY1,
        &SELECTION_MODE1,
        &TEID_DATA_I1,
        &TEID_C_PLANE1,
        &TEID_DATA_II1,
        &TEARDOWN_IND1,
        &NSAPI1,
        &RANAP_CAUSE1,
        &CHARGING_CHARACTERISTICS1,
        &TRACE_REFERENCE1,
        &TRACE_TYPE1,
        &CHARGING_ID1,
        &END_USER_ADDRESS1,
        &END_USER_ADDRESS2,
        &APN1,
        &GSN_ADDRESS1,
        &GSN_ADDRESS2,
        &MSISDN1,
        &AUTH_QUINTUPLET1,
        &COMMON_FLAGS1,
        &APN_RESTRICTION1,
        &RAT_TYPE1,
        &ULI1,
        &ULI2,
        &ULI3,
        &MS_TIME_ZONE1,
        &IMEISV1,
        &ULI_TIMESTAMP1,
        &PRIVATE_EXTENSION1,
    ]
}

//
// Test vectors.
//

static CAUSE1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x01, 0x80],
        Ie::Cause(Cause::new(Cause::REQUEST_ACCEPTED)),
    )
});

static IMSI1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x02, 0x21, 0x43, 0x15, 0x32, 0x54, 0x76, 0x98, 0xf0],
        Ie::Imsi(Imsi::new("123451234567890").unwrap()),
    )
});

static RAI1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x03, 0x21, 0xf3, 0x54, 0x00, 0xff, 0x10],
        Ie::RouteingAreaIdentity(RouteingAreaIdentity::new(
            plmn(),
            0x00ff,
            0x10,
        )),
    )
});

static TLLI1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x04, 0xde, 0xad, 0xbe, 0xef],
        Ie::Tlli(Tlli::new(0xdeadbeef)),
    )
});

static PACKET_TMSI1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x05, 0x00, 0xbe, 0xeb, 0xee],
        Ie::PacketTmsi(PacketTmsi::new(0x00beebee)),
    )
});

static REORDERING_REQUIRED1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x08, 0xff],
        Ie::ReorderingRequired(ReorderingRequired::new(true)),
    )
});

static REORDERING_REQUIRED2: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x08, 0x00],
        Ie::ReorderingRequired(ReorderingRequired::new(false)),
    )
});

static AUTH_TRIPLET1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![
            0x09, 0xde, 0xad, 0xbe, 0xef, 0xde, 0xad, 0xbe, 0xef, 0xde, 0xad,
            0xbe, 0xef, 0xde, 0xad, 0xbe, 0xef, 0x01, 0x02, 0x03, 0x04, 0x11,
            0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18,
        ],
        Ie::AuthenticationTriplet(AuthenticationTriplet::new(
            [
                0xde, 0xad, 0xbe, 0xef, 0xde, 0xad, 0xbe, 0xef, 0xde, 0xad,
                0xbe, 0xef, 0xde, 0xad, 0xbe, 0xef,
            ],
            [0x01, 0x02, 0x03, 0x04],
            [0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18],
        )),
    )
});

static MAP_CAUSE1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (vec![0x0b, 0x22], Ie::MapCause(MapCause::new(0x22)))
});

static PTMSI_SIGNATURE1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x0c, 0xbe, 0xeb, 0xee],
        Ie::PTmsiSignature(PTmsiSignature::new(0x00beebee)),
    )
});

static MS_VALIDATED1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (vec![0x0d, 0xff], Ie::MsValidated(MsValidated::new(true)))
});

static RECOVERY1: Lazy<(Vec<u8>, Ie)> =
    Lazy::new(|| (vec![0x0e, 0x01], Ie::Recovery(Recovery::new(1))));

static SELECTION_MODE1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x0f, 0xf0],
        Ie::SelectionMode(SelectionMode::new(
            SelectionMode::MS_OR_NETWORK_PROVIDED_APN_SUBSCRIBED_VERIFIED,
        )),
    )
});

static TEID_DATA_I1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x10, 0xde, 0xad, 0xbe, 0xef],
        Ie::TeidDataI(TeidDataI::new(0xdeadbeef)),
    )
});

static TEID_C_PLANE1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x11, 0xde, 0xad, 0xbe, 0xef],
        Ie::TeidCPlane(TeidCPlane::new(0xdeadbeef)),
    )
});

static TEID_DATA_II1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x12, 0xde, 0xad, 0xbe, 0xef],
        Ie::TeidDataII(TeidDataII::new(0xdeadbeef)),
    )
});

static TEARDOWN_IND1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (vec![0x13, 0xff], Ie::TeardownInd(TeardownInd::new(true)))
});

static NSAPI1: Lazy<(Vec<u8>, Ie)> =
    Lazy::new(|| (vec![0x14, 0x05], Ie::Nsapi(Nsapi::new(5))));

static RANAP_CAUSE1: Lazy<(Vec<u8>, Ie)> =
    Lazy::new(|| (vec![0x15, 0x01], Ie::RanapCause(RanapCause::new(1))));

static CHARGING_CHARACTERISTICS1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x1a, 0x04, 0x00],
        Ie::ChargingCharacteristics(ChargingCharacteristics::new(0x0400)),
    )
});

static TRACE_REFERENCE1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x1b, 0x00, 0x2a],
        Ie::TraceReference(TraceReference::new(42)),
    )
});

static TRACE_TYPE1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (vec![0x1c, 0x00, 0x02], Ie::TraceType(TraceType::new(2)))
});

static CHARGING_ID1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x7f, 0xde, 0xad, 0xbe, 0xef],
        Ie::ChargingId(ChargingId::new(0xdeadbeef)),
    )
});

static END_USER_ADDRESS1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x80, 0x00, 0x06, 0xf1, 0x21, 0x01, 0x01, 0x01, 0x01],
        Ie::EndUserAddress(EndUserAddress::new(
            IpAddr::from_str("1.1.1.1").unwrap(),
        )),
    )
});

static END_USER_ADDRESS2: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![
            0x80, 0x00, 0x12, 0x00, 0x57, 0x20, 0x01, 0x0d, 0xb8, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
        ],
        Ie::EndUserAddress(EndUserAddress::new(
            IpAddr::from_str("2001:db8::1").unwrap(),
        )),
    )
});

static APN1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![
            0x83, 0x00, 0x11, 0x04, b's', b'o', b'm', b'e', 0x03, b'a', b'p',
            b'n', 0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e',
        ],
        Ie::AccessPointName(AccessPointName::new(
            "some.apn.example".to_owned(),
        )),
    )
});

static GSN_ADDRESS1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x85, 0x00, 0x04, 0x01, 0x01, 0x01, 0x01],
        Ie::GsnAddress(GsnAddress::new(IpAddr::from_str("1.1.1.1").unwrap())),
    )
});

static GSN_ADDRESS2: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![
            0x85, 0x00, 0x10, 0x20, 0x01, 0x0d, 0xb8, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
        ],
        Ie::GsnAddress(GsnAddress::new(
            IpAddr::from_str("2001:db8::1").unwrap(),
        )),
    )
});

static MSISDN1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x86, 0x00, 0x07, 0x91, 0x18, 0x08, 0x21, 0x43, 0x65, 0x87],
        Ie::Msisdn(Msisdn::new("818012345678").unwrap()),
    )
});

static AUTH_QUINTUPLET1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![
            0x88, 0x00, 0x52, //
            0xa0, 0xa1, 0xa2, 0xa3, 0xa4, 0xa5, 0xa6, 0xa7, 0xa8, 0xa9, 0xaa,
            0xab, 0xac, 0xad, 0xae, 0xaf, //
            0x10, //
            0xb0, 0xb1, 0xb2, 0xb3, 0xb4, 0xb5, 0xb6, 0xb7, 0xb8, 0xb9, 0xba,
            0xbb, 0xbc, 0xbd, 0xbe, 0xbf, //
            0xc0, 0xc1, 0xc2, 0xc3, 0xc4, 0xc5, 0xc6, 0xc7, 0xc8, 0xc9, 0xca,
            0xcb, 0xcc, 0xcd, 0xce, 0xcf, //
            0xd0, 0xd1, 0xd2, 0xd3, 0xd4, 0xd5, 0xd6, 0xd7, 0xd8, 0xd9, 0xda,
            0xdb, 0xdc, 0xdd, 0xde, 0xdf, //
            0x10, //
            0xe0, 0xe1, 0xe2, 0xe3, 0xe4, 0xe5, 0xe6, 0xe7, 0xe8, 0xe9, 0xea,
            0xeb, 0xec, 0xed, 0xee, 0xef,
        ],
        Ie::AuthenticationQuintuplet(AuthenticationQuintuplet::new(
            [
                0xa0, 0xa1, 0xa2, 0xa3, 0xa4, 0xa5, 0xa6, 0xa7, 0xa8, 0xa9,
                0xaa, 0xab, 0xac, 0xad, 0xae, 0xaf,
            ],
            vec![
                0xb0, 0xb1, 0xb2, 0xb3, 0xb4, 0xb5, 0xb6, 0xb7, 0xb8, 0xb9,
                0xba, 0xbb, 0xbc, 0xbd, 0xbe, 0xbf,
            ],
            [
                0xc0, 0xc1, 0xc2, 0xc3, 0xc4, 0xc5, 0xc6, 0xc7, 0xc8, 0xc9,
                0xca, 0xcb, 0xcc, 0xcd, 0xce, 0xcf,
            ],
            [
                0xd0, 0xd1, 0xd2, 0xd3, 0xd4, 0xd5, 0xd6, 0xd7, 0xd8, 0xd9,
                0xda, 0xdb, 0xdc, 0xdd, 0xde, 0xdf,
            ],
            vec![
                0xe0, 0xe1, 0xe2, 0xe3, 0xe4, 0xe5, 0xe6, 0xe7, 0xe8, 0xe9,
                0xea, 0xeb, 0xec, 0xed, 0xee, 0xef,
            ],
        )),
    )
});

static COMMON_FLAGS1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x94, 0x00, 0x01, 0x40],
        Ie::CommonFlags(CommonFlags::UPGRADE_QOS_SUPPORTED),
    )
});

static APN_RESTRICTION1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x95, 0x00, 0x01, 0x03],
        Ie::ApnRestriction(ApnRestriction::new(ApnRestriction::PRIVATE1)),
    )
});

static RAT_TYPE1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x97, 0x00, 0x01, 0x06],
        Ie::RatType(RatType::new(RatType::EUTRAN)),
    )
});

static ULI1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![
            0x98, 0x00, 0x08, 0x00, 0x21, 0xf3, 0x54, 0x00, 0xff, 0x00, 0x00,
        ],
        Ie::UserLocationInformation(UserLocationInformation::new(
            GeographicLocation::Cgi {
                plmn: plmn(),
                lac: 0x00ff,
                ci: 0,
            },
        )),
    )
});

static ULI2: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![
            0x98, 0x00, 0x08, 0x01, 0x21, 0xf3, 0x54, 0x00, 0xff, 0x00, 0x00,
        ],
        Ie::UserLocationInformation(UserLocationInformation::new(
            GeographicLocation::Sai {
                plmn: plmn(),
                lac: 0x00ff,
                sac: 0,
            },
        )),
    )
});

static ULI3: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x98, 0x00, 0x07, 0x02, 0x21, 0xf3, 0x54, 0x00, 0xff, 0x00],
        Ie::UserLocationInformation(UserLocationInformation::new(
            GeographicLocation::Rai {
                plmn: plmn(),
                lac: 0x00ff,
                rac: 0,
            },
        )),
    )
});

static MS_TIME_ZONE1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x99, 0x00, 0x02, 0x63, 0x00],
        Ie::MsTimeZone(MsTimeZone::new(540, 0)),
    )
});

static IMEISV1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![
            0x9a, 0x00, 0x08, 0x21, 0x43, 0x05, 0x21, 0x43, 0x65, 0x87, 0xf9,
        ],
        Ie::Imeisv(Imeisv::new("123450123456789").unwrap()),
    )
});

static ULI_TIMESTAMP1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0xd6, 0x00, 0x04, 0xdf, 0xd5, 0x2c, 0x00],
        Ie::UliTimestamp(UliTimestamp::new(
            Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap(),
        )),
    )
});

static PRIVATE_EXTENSION1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0xff, 0x00, 0x05, 0x00, 0x0a, 0xde, 0xad, 0xbe],
        Ie::PrivateExtension(PrivateExtension::new(
            10,
            Bytes::from_static(&[0xde, 0xad, 0xbe]),
        )),
    )
});

//
// Tests.
//

#[test]
fn test_encode_vectors() {
    for (bytes, ie) in all_vectors() {
        test_encode_ie(bytes, ie);
    }
}

#[test]
fn test_decode_vectors() {
    for (bytes, ie) in all_vectors() {
        test_decode_ie(bytes, ie);
    }
}

#[test]
fn test_decode_truncated() {
    for (bytes, _) in all_vectors() {
        for cut in 0..bytes.len() {
            let mut buf = Bytes::copy_from_slice(&bytes[..cut]);
            assert_eq!(
                Ie::decode(&mut buf),
                Err(DecodeError::ReadOutOfBounds),
                "truncated decode at {cut} bytes did not fail",
            );
        }
    }
}

#[test]
fn test_decode_undefined_type() {
    let mut buf = Bytes::from_static(&[0x16, 0x00]);
    assert_eq!(Ie::decode(&mut buf), Err(DecodeError::UndefinedType(0x16)));
}

#[test]
fn test_decode_unknown_cause_code() {
    // Codes outside the published value set survive a decode/encode cycle.
    let bytes: &[u8] = &[0x01, 0x05];
    let mut buf = Bytes::copy_from_slice(bytes);
    let ie = Ie::decode(&mut buf).unwrap();
    assert_eq!(ie, Ie::Cause(Cause::new(5)));

    let mut buf = BytesMut::new();
    ie.encode(&mut buf);
    assert_eq_hex!(bytes, buf);
}

#[test]
fn test_decode_unknown_common_flags() {
    let bytes: &[u8] = &[0x94, 0x00, 0x01, 0xff];
    let mut buf = Bytes::copy_from_slice(bytes);
    let ie = Ie::decode(&mut buf).unwrap();
    assert_eq!(ie, Ie::CommonFlags(CommonFlags::from_bits_retain(0xff)));

    let mut buf = BytesMut::new();
    ie.encode(&mut buf);
    assert_eq_hex!(bytes, buf);
}

#[test]
fn test_decode_rat_type_invalid_length() {
    let mut buf = Bytes::from_static(&[0x97, 0x00, 0x02, 0x06, 0x00]);
    assert_eq!(
        Ie::decode(&mut buf),
        Err(DecodeError::InvalidLength(0x97, 2))
    );
}

#[test]
fn test_decode_uli_invalid_geo_type() {
    let mut buf = Bytes::from_static(&[
        0x98, 0x00, 0x08, 0x03, 0x21, 0xf3, 0x54, 0x00, 0xff, 0x00, 0x00,
    ]);
    assert_eq!(
        Ie::decode(&mut buf),
        Err(DecodeError::InvalidGeographicLocationType(3))
    );
}

// Overlong digit strings would overflow the fixed 8-byte value and are
// rejected at construction.
#[test]
fn test_reject_overlong_digits() {
    assert!(Imsi::new("123451234567890").is_ok());
    assert!(Imsi::new("1234512345678901").is_err());
    assert!(Imeisv::new("1234501234567899").is_ok());
    assert!(Imeisv::new("12345012345678991").is_err());
}

#[test]
fn test_decode_all() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&CAUSE1.0);
    bytes.extend_from_slice(&RECOVERY1.0);
    bytes.extend_from_slice(&IMSI1.0);

    let mut buf = Bytes::copy_from_slice(&bytes);
    let ies = Ie::decode_all(&mut buf).unwrap();
    assert_eq!(ies, vec![CAUSE1.1.clone(), RECOVERY1.1.clone(), IMSI1.1.clone()]);
}
