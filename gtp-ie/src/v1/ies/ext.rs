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

// Private Extension IE. A vendor-assigned extension identifier followed
// by an opaque value.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(new)]
#[derive(Deserialize, Serialize)]
pub struct PrivateExtension {
    pub ext_id: u16,
    pub value: Bytes,
}

// ===== impl PrivateExtension =====

impl IeKind for PrivateExtension {
    const IE_TYPE: IeType = IeType::PrivateExtension;

    fn encode_value(&self, buf: &mut BytesMut) {
        buf.put_u16(self.ext_id);
        buf.put_slice(&self.value);
    }

    fn decode_value(buf: &mut Bytes) -> DecodeResult<PrivateExtension> {
        if buf.remaining() < 2 {
            return Err(DecodeError::InvalidLength(
                Self::IE_TYPE as u8,
                buf.remaining() as u16,
            ));
        }
        let ext_id = buf.try_get_u16()?;
        let value = buf.copy_to_bytes(buf.remaining());
        Ok(PrivateExtension { ext_id, value })
    }
}
