//! Command emission and notification display.

use colored::Colorize;

use sf_roll::{CommandSink, Notification, Severity, SinkError};

/// Prints finished commands to stdout, where they can be piped straight
/// into a clipboard tool.
pub struct StdoutSink;

impl CommandSink for StdoutSink {
    fn emit(&mut self, command: &str) -> Result<(), SinkError> {
        println!("{command}");
        Ok(())
    }
}

/// Render a workflow notification to stderr, keeping stdout clean for the
/// command string itself.
pub fn notify(notification: &Notification) {
    let title = match notification.severity {
        Severity::Success => notification.title.green().bold(),
        Severity::Warning => notification.title.yellow().bold(),
        Severity::Danger => notification.title.red().bold(),
    };
    eprintln!(
        "{} {} — {}",
        notification.icon, title, notification.message
    );
}
