//! Baseline document adapter: parses the bundled XML snapshot into a
//! [`UserDatabase`]. The expected shape is a `users` root holding
//! `user` elements with `username`/`passwordHash` attributes and
//! `calculation`/`generation` descendants carrying their fields as
//! attributes. Unknown elements are skipped, so the `history` wrapper
//! emitted by the exporter is accepted but not required.

use crate::errors::AppResult;
use crate::models::{KitCalculation, PhoneGeneration, UserDatabase, UserRecord};
use crate::ui::messages;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Read the baseline file. A missing file or a malformed document is a
/// recoverable source error: it degrades to an empty database with a
/// warning instead of failing the session.
pub fn load(path: &Path) -> UserDatabase {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(_) => return UserDatabase::new(),
    };

    match parse(&text) {
        Ok(db) => db,
        Err(e) => {
            messages::warning(format!(
                "Could not parse baseline {}: {e}; starting from an empty snapshot",
                path.display()
            ));
            UserDatabase::new()
        }
    }
}

/// Parse baseline XML text into a [`UserDatabase`].
pub fn parse(xml: &str) -> AppResult<UserDatabase> {
    let mut reader = Reader::from_str(xml);
    let mut users = UserDatabase::new();
    let mut current: Option<(String, UserRecord)> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if let Some(done) = open_element(&e, &mut current, false)? {
                    users.insert(done.0, done.1);
                }
            }
            Event::Empty(e) => {
                if let Some(done) = open_element(&e, &mut current, true)? {
                    users.insert(done.0, done.1);
                }
            }
            Event::End(e) => {
                if e.name().as_ref() == b"user" {
                    if let Some((name, record)) = current.take() {
                        users.insert(name, record);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(users)
}

/// Handle an opening (or self-closing) element. Returns a completed
/// user record when a self-closing `user` element is seen.
fn open_element(
    e: &BytesStart,
    current: &mut Option<(String, UserRecord)>,
    self_closing: bool,
) -> AppResult<Option<(String, UserRecord)>> {
    match e.name().as_ref() {
        b"user" => {
            let attrs = attr_map(e)?;
            let username = attrs.get("username").cloned().unwrap_or_default();
            let record = UserRecord::new(attrs.get("passwordHash").cloned().unwrap_or_default());
            if self_closing {
                return Ok(Some((username, record)));
            }
            *current = Some((username, record));
        }
        b"calculation" => {
            if let Some((_, record)) = current.as_mut() {
                let attrs = attr_map(e)?;
                record.history.kit_calculations.push(KitCalculation {
                    kit_number: attrs.get("kitNumber").cloned().unwrap_or_default(),
                    raw_result: attrs.get("rawResult").cloned().unwrap_or_default(),
                    padded_result: attrs.get("paddedResult").cloned().unwrap_or_default(),
                    timestamp: attrs.get("timestamp").cloned().unwrap_or_default(),
                });
            }
        }
        b"generation" => {
            if let Some((_, record)) = current.as_mut() {
                let attrs = attr_map(e)?;
                record.history.phone_generations.push(PhoneGeneration {
                    number: attrs.get("number").cloned().unwrap_or_default(),
                    prefix: attrs.get("prefix").cloned().unwrap_or_default(),
                    timestamp: attrs.get("timestamp").cloned().unwrap_or_default(),
                });
            }
        }
        _ => {}
    }

    Ok(None)
}

fn attr_map(e: &BytesStart) -> AppResult<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr.unescape_value()?.to_string();
        map.insert(key, value);
    }
    Ok(map)
}
