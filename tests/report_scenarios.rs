//! End-to-end report scenarios.
//!
//! Each test builds errors the way an application would and checks the exact
//! rendered report.

use attr_errors::{
    Cause, Classifier, Code, DebugFormatter, Detail, Error, Function, Kind, Module, Object,
    Operation, READ_FAILED, RECOVERED_PANIC, Template, TruncatingFormatter, attrs, codef, e,
    kindf, objectf, t,
};
use std::fmt;
use std::io;

#[derive(Debug)]
struct Pair {
    a: i32,
    b: i32,
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.a, self.b)
    }
}

type Handler = Box<dyn Fn(&str) -> Result<(), Error>>;

fn make_handler(a: &'static str) -> Handler {
    let etpl = t!(Module::new("example"), Function::new("handler"), Object::new(a));
    Box::new(move |b: &str| {
        if b.is_empty() {
            return Err(etpl.e(attrs![
                Operation::new("argument check"),
                Kind::new("b is empty string"),
                Code::new("E123"),
            ]));
        }
        if a != b {
            return Err(etpl.e(attrs![
                Operation::new("compare"),
                Kind::new("not equal"),
                Code::new("E456"),
                a,
                b.to_owned(),
            ]));
        }
        Ok(())
    })
}

// ============================================================================
// Template Handlers
// ============================================================================

#[test]
fn handlers_share_their_template() {
    let handle_test = make_handler("test");
    let handle_check = make_handler("check");

    let reports: Vec<String> = [
        handle_test(""),
        handle_test("test"),
        handle_test("not test"),
        handle_check("check"),
        handle_check("test"),
    ]
    .into_iter()
    .filter_map(Result::err)
    .map(|err| err.to_string())
    .collect();

    assert_eq!(
        reports,
        vec![
            "example/handler [test]\n   argument check: b is empty string (E123)",
            "example/handler [test]\n   compare: not equal (E456): test; not test",
            "example/handler [check]\n   compare: not equal (E456): check; test",
        ]
    );
}

// ============================================================================
// Wrapping
// ============================================================================

#[test]
fn nested_errors_render_like_a_stack() {
    let err1 = e!("file does not exist");
    assert_eq!(err1.to_string(), "file does not exist");

    let err2 = e!("can't read config", err1);
    assert_eq!(err2.to_string(), "can't read config\n - file does not exist");

    let err3 = e!(
        Module::new("example"),
        Function::new("startup"),
        Operation::new("configure"),
        Kind::new("configure failed"),
        err2,
    );
    assert_eq!(
        err3.to_string(),
        "example/startup\n   configure: configure failed\n - can't read config\n - file does not exist"
    );

    let err4 = e!(io::Error::other("other error"), Kind::new("wrapper"));
    assert_eq!(err4.to_string(), "wrapper\n - other error");

    let err5 = e!(Kind::new("illegal value"), Detail::value(Pair { a: 1, b: 2 }));
    assert_eq!(err5.to_string(), "illegal value: {1 2}");
}

#[test]
fn foreign_error_in_the_middle_ends_the_report() {
    let boxed: Box<dyn std::error::Error + Send + Sync> = "parse error at 3:7".into();
    let err = e!(
        Module::new("cfg"),
        Kind::new("load failed"),
        e!(READ_FAILED, Object::new("app.toml"), boxed),
    );

    assert_eq!(
        err.to_string(),
        "cfg\n   load failed\n - [app.toml]\n   can't read\n - parse error at 3:7"
    );
}

#[test]
fn template_cause_is_inherited() {
    let etpl = t!(Module::new("db"), Cause::new(io::Error::other("connection reset")));
    let err = etpl.e(attrs![Operation::new("query"), "select 1"]);

    assert_eq!(err.to_string(), "db\n   query: select 1\n - connection reset");
}

#[test]
fn later_cause_replaces_earlier() {
    let err = e!(io::Error::other("first"), "msg", io::Error::other("second"));
    assert_eq!(err.to_string(), "msg\n - second");
}

// ============================================================================
// Formatting
// ============================================================================

#[test]
fn formatted_attributes_render_like_plain_ones() {
    let row = 17;
    let err = e!(kindf!("row {row} invalid"), codef!("V{:02}", 3), objectf!("table {}", "users"));
    assert_eq!(err.to_string(), "[table users]\n   row 17 invalid (V03)");
}

#[test]
fn detail_formatter_is_selectable() {
    let etpl = Template::new();
    let debug = Classifier::with_formatter(DebugFormatter);
    let err = debug.error_from(&etpl, attrs![Kind::new("illegal value"), Detail::value(Pair { a: 1, b: 2 })]);
    assert_eq!(err.to_string(), "illegal value: Pair { a: 1, b: 2 }");

    let bounded = Classifier::with_formatter(TruncatingFormatter::new(18));
    let err = bounded.error(attrs![Detail::value("0123456789".repeat(5))]);
    assert_eq!(err.to_string(), "0123...[TRUNCATED]");
}

#[test]
fn recovered_panics_become_errors() {
    let etpl = t!(Module::new("worker"));
    let outcome: std::thread::Result<()> = std::panic::catch_unwind(|| panic!("index out of bounds"));
    let err = match outcome {
        Ok(()) => unreachable!("closure always panics"),
        Err(payload) => etpl.e(attrs![RECOVERED_PANIC, Detail::from_panic(payload.as_ref())]),
    };

    assert_eq!(err.to_string(), "worker\n   panic recovered: index out of bounds");
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn log_entry_mirrors_the_report() {
    let err = e!(
        Module::new("billing"),
        Function::new("charge"),
        Code::new("B42"),
        "card declined",
        e!("gateway timeout"),
    );

    assert_eq!(
        err.log_entry().to_string(),
        "module='billing' function='charge' code='B42' details='card declined' depth=2"
    );
    assert_eq!(err.to_string(), "billing/charge\n   (B42): card declined\n - gateway timeout");
}
