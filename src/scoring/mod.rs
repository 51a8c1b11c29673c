// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidates get their numbers, and how those
//! numbers become a deterministic order.

mod core;
pub mod ranking;

pub use core::*;
