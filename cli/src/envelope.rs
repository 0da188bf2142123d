use serde::Serialize;
use terraform_plan::{ADAPTER_NAME, ADAPTER_VERSION};

/// Machine-readable error codes of the CLI contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    UsageError,
    EmptyInput,
    ParseError,
    ValidationError,
}

impl ErrorCode {
    /// Usage problems exit 2, problems with the plan itself exit 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCode::UsageError | ErrorCode::EmptyInput => 2,
            ErrorCode::ParseError | ErrorCode::ValidationError => 1,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope<'a> {
    pub error: ErrorDetail<'a>,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail<'a> {
    pub code: ErrorCode,
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'a str>,
    pub adapter: &'static str,
    pub adapter_version: &'static str,
}

fn render_human(message: &str, hint: Option<&str>) -> String {
    let mut out = format!("error: {}\n", message);
    if let Some(hint) = hint.filter(|h| !h.is_empty()) {
        out.push_str(&format!("hint: {}\n", hint));
    }
    out
}

pub fn render_error(json_mode: bool, code: ErrorCode, message: &str, hint: Option<&str>) -> String {
    if !json_mode {
        return render_human(message, hint);
    }

    let envelope = ErrorEnvelope {
        error: ErrorDetail {
            code,
            message,
            hint: hint.filter(|h| !h.is_empty()),
            adapter: ADAPTER_NAME,
            adapter_version: ADAPTER_VERSION,
        },
    };
    match serde_json::to_string(&envelope) {
        Ok(json) => format!("{}\n", json),
        Err(_) => render_human(message, hint),
    }
}

/// Report `message` on stderr and terminate with the code's exit status.
pub fn exit_error(json_mode: bool, code: ErrorCode, message: &str, hint: Option<&str>) -> ! {
    eprint!("{}", render_error(json_mode, code, message, hint));
    std::process::exit(code.exit_code());
}
