//! Line-oriented session host.
//!
//! Each input line is one command. After every command, and after every route
//! change made behind the host's back (a delayed return to the dashboard), the
//! current page is written to the output as one JSON document.

use std::io::Write;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};
use url::Url;

use super::views::{PageView, render};
use crate::application::{error::AppError, review::ReviewWorkflow, session::Session};
use crate::infra::error::InfraError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Replace the address-bar fragment, as a user typing a URL would.
    SetFragment(String),
    Navigate(String),
    Approve,
    Reject,
    Comment(String),
    Back,
    Show,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`go` requires a page id")]
    MissingPage,
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<ConsoleCommand>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if line.starts_with('#') {
        return Ok(Some(ConsoleCommand::SetFragment(line.to_string())));
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "go" if rest.is_empty() => return Err(CommandError::MissingPage),
        "go" => ConsoleCommand::Navigate(rest.to_string()),
        "approve" => ConsoleCommand::Approve,
        "reject" => ConsoleCommand::Reject,
        "comment" => ConsoleCommand::Comment(rest.to_string()),
        "back" => ConsoleCommand::Back,
        "show" => ConsoleCommand::Show,
        "quit" | "exit" => ConsoleCommand::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

/// Apply a command to the session. Review actions outside a loaded review are
/// logged and otherwise ignored.
pub fn apply(session: &mut Session, command: ConsoleCommand) {
    match command {
        ConsoleCommand::SetFragment(fragment) => {
            session.router().location().set_fragment(&fragment);
            session.router().on_fragment_change();
        }
        ConsoleCommand::Navigate(page_id) => session.router().navigate(&page_id),
        ConsoleCommand::Back => session.back_to_dashboard(),
        ConsoleCommand::Approve => with_workflow(session, "approve", |workflow| {
            workflow.approve();
        }),
        ConsoleCommand::Reject => with_workflow(session, "reject", |workflow| {
            workflow.reject();
        }),
        ConsoleCommand::Comment(text) => with_workflow(session, "comment", |workflow| {
            workflow.add_comment(&text);
        }),
        ConsoleCommand::Show | ConsoleCommand::Quit => {}
    }
}

fn with_workflow(
    session: &mut Session,
    action: &'static str,
    f: impl FnOnce(&mut ReviewWorkflow),
) {
    match session.workflow_mut() {
        Some(workflow) => f(workflow),
        None => warn!(
            target: "onbrand::console",
            action, "no post is under review; command ignored"
        ),
    }
}

/// Drive the session from `input` until it ends or a `quit` command arrives.
pub async fn run<R, W>(
    session: &mut Session,
    asset_base: &Url,
    input: R,
    output: &mut W,
) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut routes = session.router().subscribe();
    let mut lines = input.lines();

    session.sync().await;
    emit(output, &render(session, asset_base))?;

    loop {
        tokio::select! {
            changed = routes.changed() => {
                if changed.is_err() {
                    break;
                }
                routes.borrow_and_update();
                session.sync().await;
                emit(output, &render(session, asset_base))?;
            }
            line = lines.next_line() => {
                let Some(line) = line.map_err(InfraError::from)? else {
                    break;
                };
                match parse_command(&line) {
                    Ok(None) => continue,
                    Ok(Some(ConsoleCommand::Quit)) => break,
                    Ok(Some(command)) => {
                        debug!(target: "onbrand::console", ?command, "command");
                        apply(session, command);
                        routes.borrow_and_update();
                        session.sync().await;
                        emit(output, &render(session, asset_base))?;
                    }
                    Err(err) => warn!(target: "onbrand::console", error = %err, "ignoring input line"),
                }
            }
        }
    }

    Ok(())
}

fn emit<W: Write>(output: &mut W, view: &PageView<'_>) -> Result<(), AppError> {
    let json = serde_json::to_string(view)
        .map_err(|err| AppError::unexpected(format!("failed to encode view: {err}")))?;
    writeln!(output, "{json}").map_err(InfraError::from)?;
    output.flush().map_err(InfraError::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_are_passed_through() {
        assert_eq!(
            parse_command("#/post-review/2"),
            Ok(Some(ConsoleCommand::SetFragment("#/post-review/2".into())))
        );
        assert_eq!(
            parse_command("  #  "),
            Ok(Some(ConsoleCommand::SetFragment("#".into())))
        );
    }

    #[test]
    fn words_map_to_commands() {
        assert_eq!(
            parse_command("go dashboard"),
            Ok(Some(ConsoleCommand::Navigate("dashboard".into())))
        );
        assert_eq!(parse_command("approve"), Ok(Some(ConsoleCommand::Approve)));
        assert_eq!(parse_command("reject"), Ok(Some(ConsoleCommand::Reject)));
        assert_eq!(parse_command("back"), Ok(Some(ConsoleCommand::Back)));
        assert_eq!(parse_command("show"), Ok(Some(ConsoleCommand::Show)));
        assert_eq!(parse_command("quit"), Ok(Some(ConsoleCommand::Quit)));
    }

    #[test]
    fn comment_keeps_the_rest_of_the_line() {
        assert_eq!(
            parse_command("comment Looks good, ship it"),
            Ok(Some(ConsoleCommand::Comment("Looks good, ship it".into())))
        );
        assert_eq!(
            parse_command("comment"),
            Ok(Some(ConsoleCommand::Comment(String::new())))
        );
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(parse_command("go"), Err(CommandError::MissingPage));
        assert_eq!(
            parse_command("publish now"),
            Err(CommandError::Unknown("publish".into()))
        );
    }
}
