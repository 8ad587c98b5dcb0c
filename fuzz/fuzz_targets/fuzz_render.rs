#![no_main]

use attr_errors::{Code, Function, Kind, Module, Object, Operation, e};
use libfuzzer_sys::fuzz_target;

const REPORT_TRIM: &[char] = &['\n', '-', ' ', ';', '/'];

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let mut parts = text.split('\u{0}');

    let mut next = || parts.next().unwrap_or_default().to_owned();
    let inner = e!(Kind::new(next()), next(), std::io::Error::other(next()));
    let err = e!(
        Module::new(next()),
        Function::new(next()),
        Operation::new(next()),
        Object::new(next()),
        Kind::new(next()),
        Code::new(next()),
        next(),
        inner,
    );

    let report = err.to_string();
    assert_eq!(report, report.trim_matches(REPORT_TRIM));
    assert_eq!(err.depth(), 3);
});
