//
// Copyright (c) The GTP-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod error;
pub mod v1;
pub mod v2;
