// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the highlight state machine.
//!
//! Whatever the key sequence and list resizes, the highlight stays within
//! `[-1, n-1]` and a hidden list never moves it.

#![no_main]

use arbitrary::Arbitrary;
use katalog::KeyboardNavigator;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Down { visible: bool },
    Up { visible: bool },
    Hover(u8),
    Resize(u8),
    Clear,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut nav = KeyboardNavigator::new();
    let mut n: usize = 0;

    for op in ops.into_iter().take(512) {
        let before = nav.index();
        match op {
            Op::Down { visible } => {
                nav.arrow_down(n, visible);
                if !visible || n == 0 {
                    assert_eq!(nav.index(), before);
                }
            }
            Op::Up { visible } => {
                nav.arrow_up(n, visible);
                if !visible || n == 0 {
                    assert_eq!(nav.index(), before);
                }
            }
            Op::Hover(i) => nav.hover(i as usize, n),
            Op::Resize(len) => {
                n = (len % 11) as usize;
                nav.clamp(n);
            }
            Op::Clear => nav.clear(),
        }

        let index = nav.index();
        assert!(index >= -1 && index < n as i64, "index {} out of range for n {}", index, n);
    }
});
