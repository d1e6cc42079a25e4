// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! LISP address types
//!
//! The address families a LISP control message can carry. Every family is a
//! variant of [`AfiAddress`], so consumers match on it exhaustively and a new
//! family cannot be added without touching every translation site.

pub mod afi;
pub mod lcaf;
pub mod mac;

pub use afi::{Afi, AfiAddress};
pub use lcaf::{LcafAddress, LcafPayload, LcafType};
pub use mac::MacAddress;
