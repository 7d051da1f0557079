//! Shared test harness modules for the tourpack CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod helpers;
mod package_steps;
mod regions_unit;
