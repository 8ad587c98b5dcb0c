use attr_errors::{
    Cause, Code, Detail, Function, Kind, Module, Object, Operation, PARSE_FAILED, READ_FAILED,
    RECOVERED_PANIC, Result, Template, attrs, e, t,
};
use std::panic;

// Shared by every error raised from this file
static CONFIG: Template = Template::new();

fn read_file(path: &str) -> Result<String> {
    if path == "missing.toml" {
        return Err(e!(
            READ_FAILED,
            Object::new(path.to_owned()),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        ));
    }
    Ok(String::from("threshold = 42x"))
}

fn parse_threshold(text: &str) -> Result<u32> {
    let etpl = CONFIG.t(attrs![Module::new("config"), Function::new("parse_threshold")]);
    let raw = text.trim_start_matches("threshold = ");
    raw.parse().map_err(|err: std::num::ParseIntError| {
        etpl.e(attrs![
            Operation::new("parse value"),
            PARSE_FAILED,
            Code::new("CFG-7"),
            raw,
            Cause::new(err),
        ])
    })
}

fn load_configuration(path: &str) -> Result<u32> {
    let etpl = t!(Module::new("config"), Function::new("load_configuration"));
    let text = read_file(path).map_err(|err| etpl.e(attrs![Operation::new("read"), err]))?;
    parse_threshold(&text).map_err(|err| etpl.e(attrs![Kind::new("invalid configuration"), err]))
}

fn main() {
    println!("--- Basic Usage Example ---\n");

    for path in ["missing.toml", "app.toml"] {
        match load_configuration(path) {
            Ok(threshold) => println!("threshold = {threshold}"),
            Err(err) => {
                // The report: one block per link of the cause chain
                println!("1. [REPORT] {path}:");
                println!("{err}\n");

                // The structured view for log pipelines
                println!("2. [LOG ENTRY]");
                err.with_log_entry(|log| {
                    println!("   {log}");
                    println!("   depth:  {}", log.depth());
                    if let Some(kind) = log.kind() {
                        println!("   kind:   {kind}");
                    }
                });
                println!();
            }
        }
    }

    // Panics caught at a boundary become ordinary errors
    let worker = t!(Module::new("worker"));
    let outcome: std::thread::Result<()> = panic::catch_unwind(|| panic!("queue drained twice"));
    if let Err(payload) = outcome {
        let err = worker.e(attrs![RECOVERED_PANIC, Detail::from_panic(payload.as_ref())]);
        println!("3. [RECOVERED]\n{err}");
    }
}
