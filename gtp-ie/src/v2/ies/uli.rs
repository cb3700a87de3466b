//
// Copyright (c) The GTP-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

use bitflags::bitflags;
use bytes::{Buf, BufMut, Bytes, BytesMut};
use derive_new::new;
use gtp_utils::bytes::{BytesExt, BytesMutExt};
use gtp_utils::plmn::Plmn;
use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, DecodeResult};
use crate::v2::ie::{IeKind, IeType};

//
// User Location Information IE.
//
// The first value octet is a presence bitmask. Each set bit is followed
// by the corresponding location record, in ascending bit order:
//
//  0                   1                   2                   3
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |e|m|L|E|T|R|S|C|              Present location records          |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// ~                              ...                              ~
//
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
)]
#[derive(Deserialize, Serialize)]
pub struct UserLocationInformation {
    pub cgi: Option<UliCgi>,
    pub sai: Option<UliSai>,
    pub rai: Option<UliRai>,
    pub tai: Option<UliTai>,
    pub ecgi: Option<UliEcgi>,
    pub lai: Option<UliLai>,
    pub macro_enb_id: Option<UliMacroEnbId>,
    pub ext_macro_enb_id: Option<UliExtMacroEnbId>,
}

bitflags! {
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    #[derive(Deserialize, Serialize)]
    #[serde(transparent)]
    pub struct UliFlags: u8 {
        const CGI = 0x01;
        const SAI = 0x02;
        const RAI = 0x04;
        const TAI = 0x08;
        const ECGI = 0x10;
        const LAI = 0x20;
        const MACRO_ENB_ID = 0x40;
        const EXT_MACRO_ENB_ID = 0x80;
    }
}

// Cell Global Identification record.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct UliCgi {
    pub plmn: Plmn,
    pub lac: u16,
    pub ci: u16,
}

// Service Area Identity record.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct UliSai {
    pub plmn: Plmn,
    pub lac: u16,
    pub sac: u16,
}

// Routing Area Identity record. Unlike its GTPv1 counterpart, the RAC
// occupies two octets here.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct UliRai {
    pub plmn: Plmn,
    pub lac: u16,
    pub rac: u16,
}

// Tracking Area Identity record.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct UliTai {
    pub plmn: Plmn,
    pub tac: u16,
}

// E-UTRAN Cell Global Identifier record. The ECI occupies the low 28
// bits of a 4-octet field; only 20 bits are significant.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct UliEcgi {
    pub plmn: Plmn,
    eci: u32,
}

// Location Area Identity record.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct UliLai {
    pub plmn: Plmn,
    pub lac: u16,
}

// Macro eNodeB ID record. The identifier occupies 20 bits of a 3-octet
// field.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct UliMacroEnbId {
    pub plmn: Plmn,
    id: u32,
}

// Extended Macro eNodeB ID record.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct UliExtMacroEnbId {
    pub plmn: Plmn,
    id: u32,
}

// Encoded size of each location record, indexed by bit position.
const SUB_RECORD_LEN: [usize; 8] = [7, 7, 7, 5, 7, 5, 6, 6];

// ===== impl UserLocationInformation =====

impl UserLocationInformation {
    // Convenience constructor with one shared PLMN identity. Each record
    // is populated when its identifying value is given; the LAC is shared
    // by the CGI, SAI, RAI and LAI records.
    pub fn new(
        plmn: &Plmn,
        lac: Option<u16>,
        ci: Option<u16>,
        sac: Option<u16>,
        rac: Option<u16>,
        tac: Option<u16>,
        eci: Option<u32>,
        macro_enb_id: Option<u32>,
        ext_macro_enb_id: Option<u32>,
    ) -> UserLocationInformation {
        UserLocationInformation {
            cgi: ci.map(|ci| UliCgi::new(plmn.clone(), lac.unwrap_or(0), ci)),
            sai: sac
                .map(|sac| UliSai::new(plmn.clone(), lac.unwrap_or(0), sac)),
            rai: rac
                .map(|rac| UliRai::new(plmn.clone(), lac.unwrap_or(0), rac)),
            tai: tac.map(|tac| UliTai::new(plmn.clone(), tac)),
            ecgi: eci.map(|eci| UliEcgi::new(plmn.clone(), eci)),
            lai: lac.map(|lac| UliLai::new(plmn.clone(), lac)),
            macro_enb_id: macro_enb_id
                .map(|id| UliMacroEnbId::new(plmn.clone(), id)),
            ext_macro_enb_id: ext_macro_enb_id
                .map(|id| UliExtMacroEnbId::new(plmn.clone(), id)),
        }
    }

    // Returns the presence bitmask matching the populated records.
    pub fn flags(&self) -> UliFlags {
        let mut flags = UliFlags::empty();
        flags.set(UliFlags::CGI, self.cgi.is_some());
        flags.set(UliFlags::SAI, self.sai.is_some());
        flags.set(UliFlags::RAI, self.rai.is_some());
        flags.set(UliFlags::TAI, self.tai.is_some());
        flags.set(UliFlags::ECGI, self.ecgi.is_some());
        flags.set(UliFlags::LAI, self.lai.is_some());
        flags.set(UliFlags::MACRO_ENB_ID, self.macro_enb_id.is_some());
        flags
            .set(UliFlags::EXT_MACRO_ENB_ID, self.ext_macro_enb_id.is_some());
        flags
    }

    // Returns the encoded value size implied by a presence bitmask.
    pub fn encoded_len(flags: UliFlags) -> usize {
        let mut len = 1;
        for (bit, record_len) in SUB_RECORD_LEN.iter().enumerate() {
            if flags.bits() & (1 << bit) != 0 {
                len += record_len;
            }
        }
        len
    }
}

impl IeKind for UserLocationInformation {
    const IE_TYPE: IeType = IeType::UserLocationInformation;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u8(self.flags().bits());
        if let Some(cgi) = &self.cgi {
            cgi.plmn.encode(buf);
            buf.put_u16(cgi.lac);
            buf.put_u16(cgi.ci);
        }
        if let Some(sai) = &self.sai {
            sai.plmn.encode(buf);
            buf.put_u16(sai.lac);
            buf.put_u16(sai.sac);
        }
        if let Some(rai) = &self.rai {
            rai.plmn.encode(buf);
            buf.put_u16(rai.lac);
            buf.put_u16(rai.rac);
        }
        if let Some(tai) = &self.tai {
            tai.plmn.encode(buf);
            buf.put_u16(tai.tac);
        }
        if let Some(ecgi) = &self.ecgi {
            ecgi.plmn.encode(buf);
            buf.put_u32(ecgi.eci);
        }
        if let Some(lai) = &self.lai {
            lai.plmn.encode(buf);
            buf.put_u16(lai.lac);
        }
        if let Some(menbi) = &self.macro_enb_id {
            menbi.plmn.encode(buf);
            buf.put_u24(menbi.id);
        }
        if let Some(emenbi) = &self.ext_macro_enb_id {
            emenbi.plmn.encode(buf);
            buf.put_u24(emenbi.id);
        }
    }

    fn decode_value(
        buf: &mut Bytes,
    ) -> DecodeResult<UserLocationInformation> {
        let flags = UliFlags::from_bits_retain(buf.try_get_u8()?);
        if buf.remaining() + 1 < Self::encoded_len(flags) {
            return Err(DecodeError::ReadOutOfBounds);
        }

        let mut uli = UserLocationInformation::default();
        if flags.contains(UliFlags::CGI) {
            let plmn = Plmn::decode(buf)?;
            let lac = buf.try_get_u16()?;
            let ci = buf.try_get_u16()?;
            uli.cgi = Some(UliCgi { plmn, lac, ci });
        }
        if flags.contains(UliFlags::SAI) {
            let plmn = Plmn::decode(buf)?;
            let lac = buf.try_get_u16()?;
            let sac = buf.try_get_u16()?;
            uli.sai = Some(UliSai { plmn, lac, sac });
        }
        if flags.contains(UliFlags::RAI) {
            let plmn = Plmn::decode(buf)?;
            let lac = buf.try_get_u16()?;
            let rac = buf.try_get_u16()?;
            uli.rai = Some(UliRai { plmn, lac, rac });
        }
        if flags.contains(UliFlags::TAI) {
            let plmn = Plmn::decode(buf)?;
            let tac = buf.try_get_u16()?;
            uli.tai = Some(UliTai { plmn, tac });
        }
        if flags.contains(UliFlags::ECGI) {
            let plmn = Plmn::decode(buf)?;
            let eci = buf.try_get_u32()? & UliEcgi::ECI_MASK;
            uli.ecgi = Some(UliEcgi { plmn, eci });
        }
        if flags.contains(UliFlags::LAI) {
            let plmn = Plmn::decode(buf)?;
            let lac = buf.try_get_u16()?;
            uli.lai = Some(UliLai { plmn, lac });
        }
        if flags.contains(UliFlags::MACRO_ENB_ID) {
            let plmn = Plmn::decode(buf)?;
            let id = buf.try_get_u24()?;
            uli.macro_enb_id = Some(UliMacroEnbId { plmn, id });
        }
        if flags.contains(UliFlags::EXT_MACRO_ENB_ID) {
            let plmn = Plmn::decode(buf)?;
            let id = buf.try_get_u24()?;
            uli.ext_macro_enb_id = Some(UliExtMacroEnbId { plmn, id });
        }

        Ok(uli)
    }
}

// ===== impl UliEcgi =====

impl UliEcgi {
    const ECI_MASK: u32 = 0x000f_ffff;

    pub fn new(plmn: Plmn, eci: u32) -> UliEcgi {
        UliEcgi {
            plmn,
            eci: eci & Self::ECI_MASK,
        }
    }

    pub fn eci(&self) -> u32 {
        self.eci
    }
}

// ===== impl UliMacroEnbId =====

impl UliMacroEnbId {
    const ID_MASK: u32 = 0x00ff_ffff;

    pub fn new(plmn: Plmn, id: u32) -> UliMacroEnbId {
        UliMacroEnbId {
            plmn,
            id: id & Self::ID_MASK,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

// ===== impl UliExtMacroEnbId =====

impl UliExtMacroEnbId {
    const ID_MASK: u32 = 0x00ff_ffff;

    pub fn new(plmn: Plmn, id: u32) -> UliExtMacroEnbId {
        UliExtMacroEnbId {
            plmn,
            id: id & Self::ID_MASK,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}
