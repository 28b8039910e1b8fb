// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    quiet = { 0, "warn" },
    verbose = { 1, "info" },
    very_verbose = { 2, "debug" },
    saturates = { 7, "debug" },
)]
fn directive_for_verbosity(verbose: u8, expected: &str) {
    assert_eq!(default_directive(verbose), expected);
}

#[test]
fn init_twice_is_harmless() {
    init(0);
    init(2);
}
