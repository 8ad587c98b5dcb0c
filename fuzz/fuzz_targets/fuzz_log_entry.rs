#![no_main]

use attr_errors::{MAX_FIELD_OUTPUT_LEN, Module, e};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let details = String::from_utf8_lossy(data).into_owned();
    let err = e!(Module::new("fuzz"), details);

    let mut buffer = String::new();
    err.log_entry().write_to(&mut buffer).unwrap();

    // module + details, each bounded, plus labels and depth
    assert!(buffer.len() <= 2 * MAX_FIELD_OUTPUT_LEN + 64);
});
