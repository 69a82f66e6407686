use anyhow::Result;
use chrono::NaiveDate;
use rolodex_core::rules::BirthdayWindow;
use serde::Serialize;
use std::str::FromStr;

use crate::util::local_today;

pub mod birthdays;
pub mod completions;
pub mod contacts;

pub struct Context {
    pub json: bool,
    pub window: BirthdayWindow,
    pub reject_future_birthdays: bool,
    pub today: Option<NaiveDate>,
}

impl Context {
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(local_today)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Hello,
    Add,
    Change,
    Phone,
    RemovePhone,
    Delete,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownCommand;

impl FromStr for ReplCommand {
    type Err = UnknownCommand;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "hello" => Ok(ReplCommand::Hello),
            "add" => Ok(ReplCommand::Add),
            "change" => Ok(ReplCommand::Change),
            "phone" => Ok(ReplCommand::Phone),
            "remove-phone" => Ok(ReplCommand::RemovePhone),
            "delete" => Ok(ReplCommand::Delete),
            "all" => Ok(ReplCommand::All),
            "add-birthday" => Ok(ReplCommand::AddBirthday),
            "show-birthday" => Ok(ReplCommand::ShowBirthday),
            "birthdays" => Ok(ReplCommand::Birthdays),
            "close" | "exit" => Ok(ReplCommand::Exit),
            _ => Err(UnknownCommand),
        }
    }
}

/// Splits a line into its command word and arguments. Blank lines yield `None`.
pub fn parse_input(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?;
    Some((command, parts.collect()))
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
