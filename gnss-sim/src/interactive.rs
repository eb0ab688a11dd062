use std::thread::{self, JoinHandle};

use anyhow::Result;
use log::error;
use rustyline::{error::ReadlineError, DefaultEditor};
use tokio::sync::mpsc::Sender;

use crate::field_command::FieldCommand;
use crate::reporter::ReporterCommand;

const HELP: &str = "\
Commands:
  utc <hour> <minute> <second>      position <latitude> <longitude>
  quality <q>                       num_satellites <n>   (sats)
  hdop <h>                          altitude <m>         (alt)
  geoid_height <m>      (geoid)     dgps <age> <station id>
  heading <deg>                     status <A|V>
  speed_knots <kn>      (speed)     course <deg>
  date <day> <month> <year>         magnetic_variation <deg> (magvar)
  mode_indicator <A|D|E|N> (mode)
  show                              quit";

#[derive(Debug, PartialEq)]
pub enum ConsoleLine {
    Command(ReporterCommand),
    Help,
    Quit,
}

pub fn parse_console_line(line: &str) -> Result<ConsoleLine> {
    Ok(match line.trim().to_ascii_lowercase().as_str() {
        "quit" | "exit" => ConsoleLine::Quit,
        "help" | "?" => ConsoleLine::Help,
        "show" | "status" => ConsoleLine::Command(ReporterCommand::ShowStatus),
        _ => ConsoleLine::Command(ReporterCommand::Apply(line.parse::<FieldCommand>()?)),
    })
}

/// Reads field commands from the terminal on its own thread. The channel closes when the
/// operator quits, which stops the reporter.
pub fn spawn_console(commands: Sender<ReporterCommand>) -> JoinHandle<()> {
    thread::spawn(move || {
        if let Err(e) = run_console(commands) {
            error!("Console error: {:?}", e);
        }
    })
}

fn run_console(commands: Sender<ReporterCommand>) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    println!("Type `help` for the list of commands.");
    loop {
        let line = match editor.readline("gnss> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        if line.trim().is_empty() {
            continue;
        }
        editor.add_history_entry(line.as_str())?;

        match parse_console_line(&line) {
            Ok(ConsoleLine::Command(command)) => {
                if commands.blocking_send(command).is_err() {
                    break;
                }
            }
            Ok(ConsoleLine::Help) => println!("{}", HELP),
            Ok(ConsoleLine::Quit) => break,
            Err(e) => println!("{}", e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_console_lines() {
        assert_eq!(parse_console_line("quit").unwrap(), ConsoleLine::Quit);
        assert_eq!(parse_console_line(" Show ").unwrap(), ConsoleLine::Command(ReporterCommand::ShowStatus));
        assert_eq!(parse_console_line("help").unwrap(), ConsoleLine::Help);
        assert_eq!(
            parse_console_line("quality 2").unwrap(),
            ConsoleLine::Command(ReporterCommand::Apply(FieldCommand::Quality(2)))
        );
        assert!(parse_console_line("quality").is_err());
    }
}
