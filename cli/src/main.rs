use std::io::{self, Read, Write};

use clap::Parser;
use evidra_defs::{Adapter, AdapterResult, ErrorKind};
use log::debug;
use terraform_plan::{PlanAdapter, ADAPTER_VERSION};

mod env_config;
mod envelope;

use envelope::{exit_error, ErrorCode};

const PLAN_SOURCE_HINT: &str = "Ensure input is from `terraform show -json`, not `terraform plan`";
const EMPTY_INPUT_HINT: &str = "Pipe terraform show -json output to stdin";

/// Convert `terraform show -json` output into Evidra policy input.
///
/// Configuration is read from EVIDRA_* environment variables, e.g.
/// EVIDRA_FILTER_RESOURCE_TYPES, EVIDRA_FILTER_ACTIONS, EVIDRA_INCLUDE_DATA_SOURCES,
/// EVIDRA_MAX_RESOURCE_CHANGES, EVIDRA_RESOURCE_CHANGES_SORT, EVIDRA_TRUNCATE_STRATEGY.
#[derive(Parser, Debug)]
#[command(
    name = "evidra-adapter-terraform",
    version = ADAPTER_VERSION,
    override_usage = "terraform show -json tfplan.bin | evidra-adapter-terraform [--json-errors]"
)]
struct Cli {
    /// Write errors to stderr as a JSON envelope
    #[arg(long)]
    json_errors: bool,
}

fn main() {
    if let Err(e) = evidra_utils::setup_logging() {
        eprintln!("warning: failed to initialize logging: {}", e);
    }

    // Needed before clap has parsed anything, so usage errors honor it too.
    // `args_os` because arguments may not be UTF-8.
    let json_errors = std::env::args_os().skip(1).any(|a| a == "--json-errors");

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            // Stdout only ever carries JSON results and the version line.
            clap::error::ErrorKind::DisplayHelp => {
                eprint!("{}", e.render());
                std::process::exit(0);
            }
            clap::error::ErrorKind::DisplayVersion => {
                print!("{}", e.render());
                std::process::exit(0);
            }
            _ => exit_error(json_errors, ErrorCode::UsageError, &usage_message(&e), None),
        },
    };

    let mut raw = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut raw) {
        exit_error(
            cli.json_errors,
            ErrorCode::UsageError,
            &format!("read stdin: {}", e),
            None,
        );
    }
    if raw.is_empty() {
        exit_error(
            cli.json_errors,
            ErrorCode::EmptyInput,
            "empty input",
            Some(EMPTY_INPUT_HINT),
        );
    }

    let config = env_config::config_from_env();
    debug!("Read {} bytes from stdin, config: {:?}", raw.len(), config);

    let adapter = PlanAdapter::new();
    let result = match adapter.convert(&raw, &config) {
        Ok(result) => result,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::Decode => ErrorCode::ParseError,
                ErrorKind::Validation => ErrorCode::ValidationError,
            };
            exit_error(cli.json_errors, code, &e.to_string(), Some(PLAN_SOURCE_HINT));
        }
    };

    if let Err(e) = write_result(&result) {
        exit_error(
            cli.json_errors,
            ErrorCode::ParseError,
            &format!("encode result: {}", e),
            None,
        );
    }
}

fn write_result(result: &AdapterResult) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, result)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// First line of a clap error without its "error: " prefix.
fn usage_message(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
