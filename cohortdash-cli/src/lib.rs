// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod cli_args;
pub mod probe;
pub mod snapshot;
