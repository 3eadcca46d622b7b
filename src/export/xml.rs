//! XML serialization of the full user database.
//!
//! The emitted schema matches the baseline document, so an exported
//! file can replace the baseline for the next session: a `users` root,
//! one `user` element per account with `username`/`passwordHash`
//! attributes, wrapping a `history` element that holds the
//! `kitCalculations`/`calculation` and `phoneGenerations`/`generation`
//! lists with every field as a string attribute.
//!
//! Pretty-printing is structural (the writer tracks element depth),
//! not the original's line-splitting heuristic.

use crate::errors::{AppError, AppResult};
use crate::models::UserDatabase;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

const INDENT: usize = 4;

/// Serialize the database to a pretty-printed document prefixed with
/// the standard XML declaration. Users appear in map (sorted) order;
/// history entries keep their stored order.
pub fn serialize(db: &UserDatabase) -> AppResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("users")))?;

    for (username, record) in db {
        let mut user = BytesStart::new("user");
        user.push_attribute(("username", username.as_str()));
        user.push_attribute(("passwordHash", record.password_hash.as_str()));
        writer.write_event(Event::Start(user))?;

        writer.write_event(Event::Start(BytesStart::new("history")))?;

        writer.write_event(Event::Start(BytesStart::new("kitCalculations")))?;
        for calc in &record.history.kit_calculations {
            let mut el = BytesStart::new("calculation");
            el.push_attribute(("kitNumber", calc.kit_number.as_str()));
            el.push_attribute(("rawResult", calc.raw_result.as_str()));
            el.push_attribute(("paddedResult", calc.padded_result.as_str()));
            el.push_attribute(("timestamp", calc.timestamp.as_str()));
            writer.write_event(Event::Empty(el))?;
        }
        writer.write_event(Event::End(BytesEnd::new("kitCalculations")))?;

        writer.write_event(Event::Start(BytesStart::new("phoneGenerations")))?;
        for generation in &record.history.phone_generations {
            let mut el = BytesStart::new("generation");
            el.push_attribute(("number", generation.number.as_str()));
            el.push_attribute(("prefix", generation.prefix.as_str()));
            el.push_attribute(("timestamp", generation.timestamp.as_str()));
            writer.write_event(Event::Empty(el))?;
        }
        writer.write_event(Event::End(BytesEnd::new("phoneGenerations")))?;

        writer.write_event(Event::End(BytesEnd::new("history")))?;
        writer.write_event(Event::End(BytesEnd::new("user")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("users")))?;

    let mut text = String::from_utf8(writer.into_inner())
        .map_err(|e| AppError::Export(e.to_string()))?;
    text.push('\n');
    Ok(text)
}
