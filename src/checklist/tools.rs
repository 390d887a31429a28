//! Tool presence checks.

use regex::Regex;
use std::sync::LazyLock;

use super::context::CheckContext;
use super::outcome::{CheckLine, CheckOutcome};
use crate::config::ToolSpec;

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+(\.\d+)?").unwrap());

/// Run the tool's version command; zero exit within the timeout passes.
pub fn check_tool(ctx: &CheckContext<'_>, tool: &ToolSpec) -> CheckOutcome {
    let args: Vec<&str> = tool.version_args.iter().map(String::as_str).collect();

    match ctx.run(&tool.command, &args) {
        Ok(result) if result.success => {
            let version = extract_version(&result.stdout)
                .or_else(|| extract_version(&result.stderr));
            let message = match version {
                Some(v) => format!("{} is installed ({})", tool.description, v),
                None => format!("{} is installed", tool.description),
            };
            CheckOutcome::passed().line(CheckLine::Success(message))
        }
        Ok(result) => missing(tool).detail(result.stderr),
        Err(e) => missing(tool).detail(e.to_string()),
    }
}

fn missing(tool: &ToolSpec) -> CheckOutcome {
    CheckOutcome::failed().line(CheckLine::Error(format!(
        "{} is not installed or not accessible",
        tool.description
    )))
}

/// First version-looking token in `output`.
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_REGEX
        .find(output)
        .map(|m| m.as_str().to_string())
}
