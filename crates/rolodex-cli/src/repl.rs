use anyhow::Result;
use rolodex_core::Directory;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

use crate::commands::{birthdays, contacts, parse_input, Context, ReplCommand};
use crate::error::{error_code, is_recoverable};

const GREETING: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command: ";
const FAREWELL: &str = "Good bye!";

enum Step {
    Reply(String),
    Quit,
}

pub fn run<R, W>(ctx: &Context, book: &mut Directory, input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", GREETING)?;
    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;
        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;
        let Some((word, args)) = parse_input(&line) else {
            continue;
        };

        match execute(ctx, book, word, &args) {
            Ok(Step::Reply(message)) => writeln!(output, "{}", message)?,
            Ok(Step::Quit) => {
                writeln!(output, "{}", FAREWELL)?;
                break;
            }
            Err(err) if is_recoverable(&err) => {
                debug!(command = word, code = error_code(&err), error = %err, "command failed");
                writeln!(output, "{}", err)?;
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

fn execute(ctx: &Context, book: &mut Directory, word: &str, args: &[&str]) -> Result<Step> {
    let Ok(command) = ReplCommand::from_str(word) else {
        debug!(command = word, "unknown command");
        return Ok(Step::Reply("Invalid command.".to_string()));
    };

    let reply = match command {
        ReplCommand::Exit => return Ok(Step::Quit),
        ReplCommand::Hello => "How can I help you?".to_string(),
        ReplCommand::Add => contacts::add_contact(ctx, book, args)?,
        ReplCommand::Change => contacts::change_phone(ctx, book, args)?,
        ReplCommand::Phone => contacts::show_phones(ctx, book, args)?,
        ReplCommand::RemovePhone => contacts::remove_phone(ctx, book, args)?,
        ReplCommand::Delete => contacts::delete_contact(ctx, book, args)?,
        ReplCommand::All => contacts::list_contacts(ctx, book)?,
        ReplCommand::AddBirthday => birthdays::add_birthday(ctx, book, args)?,
        ReplCommand::ShowBirthday => birthdays::show_birthday(ctx, book, args)?,
        ReplCommand::Birthdays => birthdays::upcoming(ctx, book)?,
    };
    Ok(Step::Reply(reply))
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::commands::Context;
    use chrono::NaiveDate;
    use rolodex_config::AppConfig;
    use rolodex_core::Directory;
    use std::io::Cursor;

    fn session(script: &str) -> (String, Directory) {
        session_on(script, NaiveDate::from_ymd_opt(2024, 5, 5))
    }

    fn session_on(script: &str, today: Option<NaiveDate>) -> (String, Directory) {
        let config = AppConfig::default();
        let ctx = Context {
            json: false,
            window: config.birthdays,
            reject_future_birthdays: config.reject_future_birthdays,
            today,
        };
        let mut book = Directory::new();
        let mut out = Vec::new();
        run(&ctx, &mut book, Cursor::new(script.to_string()), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), book)
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let (out, book) = session("add Ada 12\nadd Ada 1234567890\nphone Grace\nexit\n");
        assert!(out.contains("Phone number must have 10 digits."));
        assert!(out.contains("Contact added."));
        assert!(out.contains("Contact Grace not found."));
        assert!(out.ends_with("Good bye!\n"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn exit_stops_reading() {
        let (out, book) = session("close\nadd Ada\n");
        assert!(out.contains("Good bye!"));
        assert!(book.is_empty());
    }

    #[test]
    fn end_of_input_ends_quietly() {
        let (out, _) = session("hello\n\n");
        assert!(out.starts_with("Welcome to the assistant bot!\n"));
        assert!(out.contains("How can I help you?"));
        assert!(!out.contains("Good bye!"));
    }

    #[test]
    fn unknown_and_misused_commands() {
        let (out, _) = session("dance\nadd\nexit\n");
        assert!(out.contains("Invalid command."));
        assert!(out.contains("Usage: add <name> [phone]"));
    }

    #[test]
    fn birthday_flow() {
        let (out, _) = session(
            "add Alice 1234567890\nadd Bob 0987654321\nadd-birthday Alice 10.05.2000\nbirthdays\nexit\n",
        );
        assert!(out.contains("Birthday added for Alice."));
        assert!(out.contains("The congratulation date for Alice is 10.05.2024"));
        assert!(!out.contains("for Bob"));
    }

    #[test]
    fn default_settings_accept_this_years_sunday_birthday() {
        let (out, book) = session_on(
            "add Carol\nadd-birthday Carol 12.05.2024\nbirthdays\nexit\n",
            NaiveDate::from_ymd_opt(2024, 5, 6),
        );
        assert!(out.contains("Birthday added for Carol."));
        assert!(out.contains("The congratulation date for Carol is 13.05.2024"));
        assert_eq!(
            book.find("Carol").unwrap().birthday().unwrap().to_string(),
            "12.05.2024"
        );
    }
}
