//! Line-oriented interactive check-in session.
//!
//! Each input line is one UI event on the [`CheckinPage`]. Output goes to any
//! `std::io::Write`, so the session can be driven from tests.

use parkify_slots::{BookedSlotsApi, FormField, SlotsError};
use std::io::{self, Write};
use std::str::FromStr;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::page::{CheckinPage, SlotClick, SubmitOutcome, CAPACITY_WARNING};

pub const HELP: &str = "\
Commands:
  show                  render the page
  open [slot]           open the check-in dialog
  set <field> <value>   fill in userName, carNumber, checkInTime or checkOutTime
  submit                check in with the current form
  close                 close the dialog
  click <slot>          clear an occupied slot, or open the dialog for a free one
  refresh               fetch the booked slots again
  help                  show this text
  quit                  leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Show,
    Open(Option<usize>),
    Set(FormField, String),
    Submit,
    Close,
    Click(usize),
    Refresh,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ParseCommandError(pub String);

fn parse_slot(raw: &str) -> Result<usize, ParseCommandError> {
    raw.parse()
        .map_err(|_| ParseCommandError(format!("not a slot number: {}", raw)))
}

impl FromStr for SessionCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "show" | "ls" => Ok(SessionCommand::Show),
            "open" | "checkin" if rest.is_empty() => Ok(SessionCommand::Open(None)),
            "open" | "checkin" => Ok(SessionCommand::Open(Some(parse_slot(rest)?))),
            "set" => {
                let (field, value) = rest
                    .split_once(char::is_whitespace)
                    .map(|(f, v)| (f, v.trim()))
                    .unwrap_or((rest, ""));
                let field = field
                    .parse::<FormField>()
                    .map_err(|e: SlotsError| ParseCommandError(e.to_string()))?;
                Ok(SessionCommand::Set(field, value.to_string()))
            }
            "submit" => Ok(SessionCommand::Submit),
            "close" => Ok(SessionCommand::Close),
            "click" => Ok(SessionCommand::Click(parse_slot(rest)?)),
            "refresh" => Ok(SessionCommand::Refresh),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            "" => Err(ParseCommandError("empty command".to_string())),
            other => Err(ParseCommandError(format!("unknown command: {}", other))),
        }
    }
}

/// Runs one command. Returns `false` once the session should end.
pub async fn handle_command<A, W>(
    page: &mut CheckinPage<A>,
    command: SessionCommand,
    out: &mut W,
) -> io::Result<bool>
where
    A: BookedSlotsApi,
    W: Write,
{
    match command {
        SessionCommand::Show => write!(out, "{}", page.render())?,
        SessionCommand::Open(slot) => {
            page.open_dialog(slot);
            write!(out, "{}", page.render())?;
        }
        SessionCommand::Set(field, value) => {
            page.change(field, value);
            let form = page.form();
            writeln!(
                out,
                "Total Hours: {}  Total Amount: {} {}",
                form.total_hours,
                form.total_amount,
                page.currency()
            )?;
        }
        SessionCommand::Submit => match page.submit().await {
            SubmitOutcome::CheckedIn(booking) => {
                writeln!(
                    out,
                    "Checked in {} on slot {}",
                    booking.car_number,
                    booking
                        .slot_index
                        .map(|i| i.to_string())
                        .unwrap_or_else(|| "-".to_string())
                )?;
                write!(out, "{}", page.render())?;
            }
            SubmitOutcome::NoSlotsAvailable => writeln!(out, "{}", CAPACITY_WARNING)?,
            // Already logged; the dialog is still open.
            SubmitOutcome::Failed => write!(out, "{}", page.render())?,
        },
        SessionCommand::Close => {
            page.close_dialog();
            write!(out, "{}", page.render())?;
        }
        SessionCommand::Click(index) => match page.click_slot(index).await {
            SlotClick::Cleared(booking) => {
                writeln!(out, "Cleared slot {} ({})", index, booking.car_number)?;
                write!(out, "{}", page.render())?;
            }
            SlotClick::FormOpened(_) | SlotClick::Failed => write!(out, "{}", page.render())?,
            SlotClick::OutOfRange => writeln!(
                out,
                "There is no slot {} (slots are 0..{})",
                index,
                page.store().total_slots()
            )?,
        },
        SessionCommand::Refresh => {
            page.mount().await;
            write!(out, "{}", page.render())?;
        }
        SessionCommand::Help => write!(out, "{}", HELP)?,
        SessionCommand::Quit => return Ok(false),
    }
    Ok(true)
}

/// Reads commands line by line until `quit` or end of input.
pub async fn run_session<A, R, W>(
    page: &mut CheckinPage<A>,
    input: R,
    out: &mut W,
) -> io::Result<()>
where
    A: BookedSlotsApi,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{}", page.render())?;
    write!(out, "Type 'help' for commands.\n> ")?;
    out.flush()?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            write!(out, "> ")?;
            out.flush()?;
            continue;
        }
        match line.parse::<SessionCommand>() {
            Ok(command) => {
                if !handle_command(page, command, out).await? {
                    break;
                }
            }
            Err(e) => writeln!(out, "{} (type 'help')", e)?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}
