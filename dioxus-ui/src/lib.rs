// SPDX-License-Identifier: MIT OR Apache-2.0

//! cohortdash-ui library root.
//!
//! Re-exports public modules so that integration tests (under `tests/`) can
//! import components. The binary entry-point lives in `main.rs`.

pub mod chart_bridge;
pub mod components;
pub mod constants;
pub mod renderer;
