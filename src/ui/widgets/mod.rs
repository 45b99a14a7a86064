// SPDX-License-Identifier: MPL-2.0
//! Custom widgets and canvas painting helpers.

pub mod shimmer;
