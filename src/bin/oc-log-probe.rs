#![deny(unsafe_code)]

//! Diagnostic probe for the oc-log controller.
//!
//! Initializes the controller from the environment, then emits the messages
//! requested on the command line, in argument order. The integration suite
//! spawns this binary with a controlled environment and observes where each
//! message lands (stderr or the configured vlog file).

use mimalloc::MiMalloc;

/// High-performance memory allocator for improved allocation throughput.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::env;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: oc-log-probe [OPTION]...
Emit diagnostics through the oc-log controller, in argument order.

  --info TEXT        emit an informational message
  --warning TEXT     emit a warning message
  --error TEXT       emit an error message
  --vlog LEVEL:TEXT  emit a verbose message at LEVEL
  --help             print this help
";

enum Emission {
    Info(String),
    Warning(String),
    Error(String),
    Verbose(i32, String),
}

fn main() -> ExitCode {
    run(env::args().skip(1))
}

fn run<I>(mut args: I) -> ExitCode
where
    I: Iterator<Item = String>,
{
    let mut emissions = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" => {
                print!("{USAGE}");
                return ExitCode::SUCCESS;
            }
            "--info" | "--warning" | "--error" | "--vlog" => {
                let Some(value) = args.next() else {
                    eprintln!("oc-log-probe: missing value for {arg}");
                    eprint!("{USAGE}");
                    return ExitCode::FAILURE;
                };
                let emission = match arg.as_str() {
                    "--info" => Emission::Info(value),
                    "--warning" => Emission::Warning(value),
                    "--error" => Emission::Error(value),
                    _ => match parse_vlog_spec(&value) {
                        Some((level, text)) => Emission::Verbose(level, text),
                        None => {
                            eprintln!(
                                "oc-log-probe: invalid --vlog argument '{value}' (expected LEVEL:TEXT)"
                            );
                            eprint!("{USAGE}");
                            return ExitCode::FAILURE;
                        }
                    },
                };
                emissions.push(emission);
            }
            other => {
                eprintln!("oc-log-probe: unknown option {other}");
                eprint!("{USAGE}");
                return ExitCode::FAILURE;
            }
        }
    }

    logging::init();

    for emission in emissions {
        match emission {
            Emission::Info(text) => logging::log_info!("{text}"),
            Emission::Warning(text) => logging::log_warning!("{text}"),
            Emission::Error(text) => logging::log_error!("{text}"),
            Emission::Verbose(level, text) => logging::vlog!(level, "{text}"),
        }
    }

    ExitCode::SUCCESS
}

/// Splits a `LEVEL:TEXT` argument into its parts.
fn parse_vlog_spec(value: &str) -> Option<(i32, String)> {
    let (level, text) = value.split_once(':')?;
    let level = level.trim().parse().ok()?;
    Some((level, text.to_owned()))
}
