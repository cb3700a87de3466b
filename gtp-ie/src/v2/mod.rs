//
// Copyright (c) The GTP-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

pub mod ie;
pub mod ies;

pub use ie::*;
pub use ies::*;
