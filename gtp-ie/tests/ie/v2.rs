//
// Copyright (c) The GTP-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::sync::LazyLock as Lazy;

use bytes::{Buf, Bytes, BytesMut};
use gtp_ie::error::DecodeError;
use gtp_ie::v2::*;
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

// Builds a ULI with every record selected by `flags` populated.
fn make_uli(flags: UliFlags) -> UserLocationInformation {
    let mut uli = UserLocationInformation::default();
    if flags.contains(UliFlags::CGI) {
        uli.cgi = Some(UliCgi::new(plmn(), 0x00ff, 1));
    }
    if flags.contains(UliFlags::SAI) {
        uli.sai = Some(UliSai::new(plmn(), 0x00ff, 2));
    }
    if flags.contains(UliFlags::RAI) {
        uli.rai = Some(UliRai::new(plmn(), 0x00ff, 3));
    }
    if flags.contains(UliFlags::TAI) {
        uli.tai = Some(UliTai::new(plmn(), 4));
    }
    if flags.contains(UliFlags::ECGI) {
        uli.ecgi = Some(UliEcgi::new(plmn(), 0x12345));
    }
    if flags.contains(UliFlags::LAI) {
        uli.lai = Some(UliLai::new(plmn(), 5));
    }
    if flags.contains(UliFlags::MACRO_ENB_ID) {
        uli.macro_enb_id = Some(UliMacroEnbId::new(plmn(), 0x011111));
    }
    if flags.contains(UliFlags::EXT_MACRO_ENB_ID) {
        uli.ext_macro_enb_id = Some(UliExtMacroEnbId::new(plmn(), 0x022222));
    }
    uli
}

fn all_vectors() -> Vec<&'static (Vec<u8>, Ie)> {
    vec![
        &IMSI1, &IMSI2, &CAUSE1, &CAUSE2, &RECOVERY1, &APN1, &MEI1, &MSISDN1,
        &ULI1, &ULI2, &ULI3, &ULI4, &PRIVATE_EXTENSION1,
    ]
}

//
// Test vectors.
//

static IMSI1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![
            0x01, 0x00, 0x08, 0x00, 0x21, 0x43, 0x15, 0x32, 0x54, 0x76, 0x98,
            0xf0,
        ],
        Ie::new(0, IeBody::Imsi(Imsi::new("123451234567890").unwrap())),
    )
});

static IMSI2: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![
            0x01, 0x00, 0x08, 0x02, 0x21, 0x43, 0x15, 0x32, 0x54, 0x76, 0x98,
            0xf0,
        ],
        Ie::new(2, IeBody::Imsi(Imsi::new("123451234567890").unwrap())),
    )
});

static CAUSE1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x02, 0x00, 0x02, 0x00, 0x10, 0x00],
        Ie::new(
            0,
            IeBody::Cause(Cause::new(
                Cause::REQUEST_ACCEPTED,
                CauseFlags::empty(),
                None,
            )),
        ),
    )
});

static CAUSE2: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x02, 0x00, 0x06, 0x00, 0x46, 0x01, 0x47, 0x00, 0x00, 0x00],
        Ie::new(
            0,
            IeBody::Cause(Cause::new(
                Cause::MANDATORY_IE_MISSING,
                CauseFlags::CS,
                Some(OffendingIe::new(0x47, 0, 0)),
            )),
        ),
    )
});

static RECOVERY1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x03, 0x00, 0x01, 0x00, 0x19],
        Ie::new(0, IeBody::Recovery(Recovery::new(25))),
    )
});

static APN1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![
            0x47, 0x00, 0x11, 0x00, 0x04, b's', b'o', b'm', b'e', 0x03, b'a',
            b'p', b'n', 0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e',
        ],
        Ie::new(
            0,
            IeBody::AccessPointName(AccessPointName::new(
                "some.apn.example".to_owned(),
            )),
        ),
    )
});

static MEI1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![
            0x4b, 0x00, 0x08, 0x00, 0x21, 0x43, 0x65, 0x87, 0x09, 0x21, 0x43,
            0x65,
        ],
        Ie::new(
            0,
            IeBody::MobileEquipmentIdentity(
                MobileEquipmentIdentity::new("1234567890123456").unwrap(),
            ),
        ),
    )
});

static MSISDN1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![
            0x4c, 0x00, 0x06, 0x00, 0x18, 0x08, 0x21, 0x43, 0x65, 0x87,
        ],
        Ie::new(0, IeBody::Msisdn(Msisdn::new("818012345678").unwrap())),
    )
});

static ULI1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![
            0x56, 0x00, 0x08, 0x00, 0x01, 0x21, 0xf3, 0x54, 0x00, 0xff, 0x00,
            0x01,
        ],
        Ie::new(
            0,
            IeBody::UserLocationInformation(make_uli(UliFlags::CGI)),
        ),
    )
});

static ULI2: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![
            0x56, 0x00, 0x0d, 0x00, 0x18, 0x21, 0xf3, 0x54, 0x00, 0x04, 0x21,
            0xf3, 0x54, 0x00, 0x01, 0x23, 0x45,
        ],
        Ie::new(
            0,
            IeBody::UserLocationInformation(make_uli(
                UliFlags::TAI | UliFlags::ECGI,
            )),
        ),
    )
});

static ULI3: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0x56, 0x00, 0x01, 0x00, 0x00],
        Ie::new(
            0,
            IeBody::UserLocationInformation(UserLocationInformation::default()),
        ),
    )
});

static ULI4: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![
            0x56, 0x00, 0x33, 0x00, 0xff, //
            0x21, 0xf3, 0x54, 0x00, 0xff, 0x00, 0x01, //
            0x21, 0xf3, 0x54, 0x00, 0xff, 0x00, 0x02, //
            0x21, 0xf3, 0x54, 0x00, 0xff, 0x00, 0x03, //
            0x21, 0xf3, 0x54, 0x00, 0x04, //
            0x21, 0xf3, 0x54, 0x00, 0x01, 0x23, 0x45, //
            0x21, 0xf3, 0x54, 0x00, 0x05, //
            0x21, 0xf3, 0x54, 0x01, 0x11, 0x11, //
            0x21, 0xf3, 0x54, 0x02, 0x22, 0x22,
        ],
        Ie::new(
            0,
            IeBody::UserLocationInformation(make_uli(UliFlags::all())),
        ),
    )
});

static PRIVATE_EXTENSION1: Lazy<(Vec<u8>, Ie)> = Lazy::new(|| {
    (
        vec![0xff, 0x00, 0x05, 0x00, 0x00, 0x0a, 0xde, 0xad, 0xbe],
        Ie::new(
            0,
            IeBody::PrivateExtension(PrivateExtension::new(
                10,
                Bytes::from_static(&[0xde, 0xad, 0xbe]),
            )),
        ),
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
    let mut buf = Bytes::from_static(&[0x04, 0x00, 0x01, 0x00, 0x00]);
    assert_eq!(Ie::decode(&mut buf), Err(DecodeError::UndefinedType(0x04)));
}

#[test]
fn test_decode_cause_invalid_length() {
    let mut buf =
        Bytes::from_static(&[0x02, 0x00, 0x03, 0x00, 0x10, 0x00, 0x00]);
    assert_eq!(
        Ie::decode(&mut buf),
        Err(DecodeError::InvalidLength(0x02, 3))
    );
}

// The value length must be fully determined by the presence bitmask,
// for every possible bitmask.
#[test]
fn test_uli_length_matrix() {
    for mask in 0..=255u8 {
        let flags = UliFlags::from_bits_retain(mask);
        let uli = make_uli(flags);
        assert_eq!(uli.flags(), flags);

        let ie = Ie::new(0, IeBody::UserLocationInformation(uli));
        let mut buf = BytesMut::new();
        ie.encode(&mut buf);
        assert_eq!(
            buf.len(),
            IE_HDR_SIZE + UserLocationInformation::encoded_len(flags),
            "bad encoded length for flags {mask:#04x}",
        );

        let mut buf = buf.freeze();
        let decoded = Ie::decode(&mut buf).unwrap();
        assert_eq!(decoded, ie);
        assert_eq!(buf.remaining(), 0);
    }
}

// The shared-PLMN constructor and an explicit struct literal must
// produce identical bytes.
#[test]
fn test_uli_constructor_parity() {
    let uli1 = UserLocationInformation::new(
        &plmn(),
        Some(0x00ff),
        Some(1),
        None,
        None,
        Some(4),
        Some(0x12345),
        None,
        None,
    );
    let uli2 = UserLocationInformation {
        cgi: Some(UliCgi::new(plmn(), 0x00ff, 1)),
        tai: Some(UliTai::new(plmn(), 4)),
        ecgi: Some(UliEcgi::new(plmn(), 0x12345)),
        lai: Some(UliLai::new(plmn(), 0x00ff)),
        ..Default::default()
    };
    assert_eq!(uli1, uli2);

    let mut buf1 = BytesMut::new();
    Ie::new(0, IeBody::UserLocationInformation(uli1)).encode(&mut buf1);
    let mut buf2 = BytesMut::new();
    Ie::new(0, IeBody::UserLocationInformation(uli2)).encode(&mut buf2);
    assert_eq_hex!(buf1, buf2);
}

// Two instances of the same IE type within one sequence.
#[test]
fn test_decode_all() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&CAUSE1.0);
    bytes.extend_from_slice(&IMSI1.0);
    bytes.extend_from_slice(&IMSI2.0);
    bytes.extend_from_slice(&ULI1.0);

    let mut buf = Bytes::copy_from_slice(&bytes);
    let ies = Ie::decode_all(&mut buf).unwrap();
    assert_eq!(
        ies,
        vec![
            CAUSE1.1.clone(),
            IMSI1.1.clone(),
            IMSI2.1.clone(),
            ULI1.1.clone()
        ]
    );
}
