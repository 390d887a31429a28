//! Local daemon connectivity probes.

use super::context::CheckContext;
use super::definition::{DaemonProbe, Severity};
use super::outcome::{CheckLine, CheckOutcome};

/// Run the probe's status command; zero exit within the timeout passes.
pub fn check_daemon(ctx: &CheckContext<'_>, probe: &DaemonProbe) -> CheckOutcome {
    match ctx.run(probe.program, probe.args) {
        Ok(result) if result.success => {
            CheckOutcome::passed().line(CheckLine::Success(probe.ok_message.to_string()))
        }
        Ok(result) => unreachable_daemon(probe).detail(result.stderr),
        Err(e) => unreachable_daemon(probe).detail(e.to_string()),
    }
}

fn unreachable_daemon(probe: &DaemonProbe) -> CheckOutcome {
    let message = probe.fail_message.to_string();
    let line = match probe.fail_severity {
        Severity::Warning => CheckLine::Warning(message),
        Severity::Error => CheckLine::Error(message),
    };
    CheckOutcome::failed().line(line)
}
