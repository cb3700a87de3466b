//
// Copyright (c) The GTP-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

use bytes::{Buf, BufMut, Bytes, BytesMut};
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, DecodeResult};
use crate::v1::ie::{IeKind, IeType};

//
// Authentication Triplet IE.
//
// Fixed 28-byte layout: RAND (16) + SRES (4) + Kc (8).
//
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct AuthenticationTriplet {
    pub rand: [u8; 16],
    pub sres: [u8; 4],
    pub kc: [u8; 8],
}

//
// Authentication Quintuplet IE.
//
// Layout: RAND (16) + XRES length (1) + XRES + CK (16) + IK (16) +
// AUTN length (1) + AUTN. XRES and AUTN carry their own interior
// length prefixes.
//
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct AuthenticationQuintuplet {
    pub rand: [u8; 16],
    pub xres: Vec<u8>,
    pub ck: [u8; 16],
    pub ik: [u8; 16],
    pub autn: Vec<u8>,
}

// ===== impl AuthenticationTriplet =====

impl IeKind for AuthenticationTriplet {
    const IE_TYPE: IeType = IeType::AuthenticationTriplet;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_slice(&self.rand);
        buf.put_slice(&self.sres);
        buf.put_slice(&self.kc);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<AuthenticationTriplet> {
        let mut rand = [0; 16];
        buf.try_copy_to_slice(&mut rand)?;
        let mut sres = [0; 4];
        buf.try_copy_to_slice(&mut sres)?;
        let mut kc = [0; 8];
        buf.try_copy_to_slice(&mut kc)?;
        Ok(AuthenticationTriplet { rand, sres, kc })
    }
}

// ===== impl AuthenticationQuintuplet =====

impl IeKind for AuthenticationQuintuplet {
    const IE_TYPE: IeType = IeType::AuthenticationQuintuplet;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_slice(&self.rand);
        buf.put_u8(self.xres.len() as u8);
        buf.put_slice(&self.xres);
        buf.put_slice(&self.ck);
        buf.put_slice(&self.ik);
        buf.put_u8(self.autn.len() as u8);
        buf.put_slice(&self.autn);
    }

    fn decode_value(
        buf: &mut Bytes,
    ) -> DecodeResult<AuthenticationQuintuplet> {
        let mut rand = [0; 16];
        buf.try_copy_to_slice(&mut rand)?;

        let xres_len = buf.try_get_u8()? as usize;
        if xres_len > buf.remaining() {
            return Err(DecodeError::ReadOutOfBounds);
        }
        let xres = buf.copy_to_bytes(xres_len).to_vec();

        let mut ck = [0; 16];
        buf.try_copy_to_slice(&mut ck)?;
        let mut ik = [0; 16];
        buf.try_copy_to_slice(&mut ik)?;

        let autn_len = buf.try_get_u8()? as usize;
        if autn_len > buf.remaining() {
            return Err(DecodeError::ReadOutOfBounds);
        }
        let autn = buf.copy_to_bytes(autn_len).to_vec();

        Ok(AuthenticationQuintuplet {
            rand,
            xres,
            ck,
            ik,
            autn,
        })
    }
}
