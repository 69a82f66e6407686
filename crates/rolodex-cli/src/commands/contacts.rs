use crate::commands::{to_json, Context};
use crate::error::usage;
use anyhow::Result;
use rolodex_core::dto::RecordDto;
use rolodex_core::{CoreError, Directory, Record};
use tracing::debug;

pub fn add_contact(_ctx: &Context, book: &mut Directory, args: &[&str]) -> Result<String> {
    let (name, phone) = match args {
        [name] => (*name, None),
        [name, phone, ..] => (*name, Some(*phone)),
        _ => return Err(usage("add <name> [phone]")),
    };

    if let Some(record) = book.find_mut(name) {
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name)?;
    if let Some(phone) = phone {
        record.add_phone(phone)?;
    }
    debug!(name = %record.name(), "contact created");
    book.add_record(record);
    Ok("Contact added.".to_string())
}

pub fn change_phone(_ctx: &Context, book: &mut Directory, args: &[&str]) -> Result<String> {
    let [name, old, new] = args else {
        return Err(usage("change <name> <old phone> <new phone>"));
    };
    find_mut(book, name)?.edit_phone(old, new)?;
    Ok(format!("Phone number changed for {}.", name))
}

pub fn show_phones(ctx: &Context, book: &Directory, args: &[&str]) -> Result<String> {
    let [name] = args else {
        return Err(usage("phone <name>"));
    };
    let record = find(book, name)?;
    let phones: Vec<&str> = record.phones().iter().map(|phone| phone.as_str()).collect();

    if ctx.json {
        return to_json(&phones);
    }
    if phones.is_empty() {
        return Ok(format!("{} has no phone numbers.", name));
    }
    Ok(format!("{}: {}", name, phones.join("; ")))
}

pub fn remove_phone(_ctx: &Context, book: &mut Directory, args: &[&str]) -> Result<String> {
    let [name, phone] = args else {
        return Err(usage("remove-phone <name> <phone>"));
    };
    let removed = find_mut(book, name)?.remove_phone(phone);
    if removed == 0 {
        return Ok(format!("{} has no phone number {}.", name, phone));
    }
    Ok(format!("Phone number {} removed for {}.", phone, name))
}

pub fn delete_contact(_ctx: &Context, book: &mut Directory, args: &[&str]) -> Result<String> {
    let [name] = args else {
        return Err(usage("delete <name>"));
    };
    book.delete(name)?;
    Ok(format!("Contact {} deleted.", name))
}

pub fn list_contacts(ctx: &Context, book: &Directory) -> Result<String> {
    if ctx.json {
        let dtos: Vec<RecordDto> = book.iter().map(RecordDto::from).collect();
        return to_json(&dtos);
    }
    if book.is_empty() {
        return Ok("No contacts.".to_string());
    }
    Ok(book
        .iter()
        .map(Record::render)
        .collect::<Vec<_>>()
        .join("\n"))
}

pub(crate) fn find<'a>(book: &'a Directory, name: &str) -> Result<&'a Record, CoreError> {
    book.find(name)
        .ok_or_else(|| CoreError::ContactNotFound(name.to_string()))
}

pub(crate) fn find_mut<'a>(
    book: &'a mut Directory,
    name: &str,
) -> Result<&'a mut Record, CoreError> {
    book.find_mut(name)
        .ok_or_else(|| CoreError::ContactNotFound(name.to_string()))
}
