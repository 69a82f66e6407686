use crate::commands::contacts::{find, find_mut};
use crate::commands::{to_json, Context};
use crate::error::usage;
use crate::util::format_date;
use anyhow::Result;
use rolodex_core::dto::UpcomingBirthdayDto;
use rolodex_core::Directory;
use serde_json::json;
use tracing::debug;

pub fn add_birthday(ctx: &Context, book: &mut Directory, args: &[&str]) -> Result<String> {
    let [name, date] = args else {
        return Err(usage("add-birthday <name> <DD.MM.YYYY>"));
    };
    let record = find_mut(book, name)?;
    if ctx.reject_future_birthdays {
        record.set_birthday_as_of(date, ctx.today())?;
    } else {
        record.set_birthday(date)?;
    }
    Ok(format!("Birthday added for {}.", name))
}

pub fn show_birthday(ctx: &Context, book: &Directory, args: &[&str]) -> Result<String> {
    let [name] = args else {
        return Err(usage("show-birthday <name>"));
    };
    let record = find(book, name)?;
    let birthday = record.birthday().map(|birthday| birthday.to_string());

    if ctx.json {
        return to_json(&json!({ "name": name, "birthday": birthday }));
    }
    match birthday {
        Some(birthday) => Ok(format!("{}'s birthday: {}", name, birthday)),
        None => Ok(format!("{} does not have a birthday specified.", name)),
    }
}

pub fn upcoming(ctx: &Context, book: &Directory) -> Result<String> {
    let today = ctx.today();
    let found = book.upcoming_birthdays(today, ctx.window);
    debug!(today = %format_date(today), count = found.len(), "upcoming birthdays");

    if ctx.json {
        let dtos: Vec<UpcomingBirthdayDto> =
            found.iter().map(UpcomingBirthdayDto::from).collect();
        return to_json(&dtos);
    }
    if found.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }

    let mut lines = vec!["Upcoming birthdays:".to_string()];
    for item in &found {
        lines.push(format!(
            "The congratulation date for {} is {}",
            item.name,
            format_date(item.congratulation_date)
        ));
    }
    Ok(lines.join("\n"))
}
