#![no_main]

use libfuzzer_sys::fuzz_target;
use laddercut::hull::{CutDirection, LadderCut};
use laddercut::results::CutResult;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing must never panic, and anything it accepts must reduce cleanly
        if let Ok(row) = CutResult::from_expr(input) {
            let cut = LadderCut::build(
                row.significance(),
                &row.y,
                &row.x,
                CutDirection::GreaterThan,
                CutDirection::GreaterThan,
            );
            assert!(cut.is_ok());
        }
    }
});
