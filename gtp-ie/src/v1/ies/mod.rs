//
// Copyright (c) The GTP-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

pub mod address;
pub mod auth;
pub mod cause;
pub mod ext;
pub mod flags;
pub mod identity;
pub mod location;
pub mod tunnel;

pub use address::*;
pub use auth::*;
pub use cause::*;
pub use ext::*;
pub use flags::*;
pub use identity::*;
pub use location::*;
pub use tunnel::*;
