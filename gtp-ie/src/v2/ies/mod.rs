//
// Copyright (c) The GTP-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

pub mod identity;
pub mod misc;
pub mod uli;

pub use identity::*;
pub use misc::*;
pub use uli::*;
