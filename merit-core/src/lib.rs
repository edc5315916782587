// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Building blocks shared by the Merit token and its bonding-curve vault.
//!
//! Both contracts embed the same [`access::AdminRoles`] and
//! [`emergency::EmergencyStop`] storage components, report failures through the
//! error types in [`errors`], and agree on the payout formula in [`curve`].
//! The [`interfaces`] module holds the typed call interfaces each contract uses
//! to reach the other.

extern crate alloc;

pub mod access;
pub mod curve;
pub mod emergency;
pub mod errors;
pub mod events;
pub mod interfaces;
