//! Sectioned INI text as a serde value.
//!
//! Top-level keys become scalars and each `[section]` becomes a mapping of
//! its keys. `key[] = v` appends to a list and `key[name] = v` fills a
//! mapping. Unquoted `true`/`on`/`yes` and `false`/`off`/`no`/`none` are
//! booleans, whole numbers are integers, and quoted values are always text.

use ::ini::{Ini, ParseOption, Properties};
use serde_json::{Map, Value};

/// Parse INI `content` into a JSON object tree.
pub fn parse(content: &str) -> Result<Value, String> {
    let option = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_str_opt(content, option).map_err(|e| e.to_string())?;

    let mut root = Map::new();
    for (section, properties) in ini.iter() {
        match section {
            None => insert_properties(&mut root, properties),
            Some(name) => {
                let entry = root
                    .entry(name.to_string())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !entry.is_object() {
                    *entry = Value::Object(Map::new());
                }
                if let Value::Object(members) = entry {
                    insert_properties(members, properties);
                }
            }
        }
    }
    Ok(Value::Object(root))
}

fn insert_properties(target: &mut Map<String, Value>, properties: &Properties) {
    for (key, raw) in properties.iter() {
        let value = scalar(raw);
        match array_key(key) {
            Some((name, None)) => {
                let entry = target
                    .entry(name.to_string())
                    .or_insert_with(|| Value::Array(Vec::new()));
                match entry {
                    Value::Array(items) => items.push(value),
                    other => *other = Value::Array(vec![value]),
                }
            }
            Some((name, Some(index))) => {
                let entry = target
                    .entry(name.to_string())
                    .or_insert_with(|| Value::Object(Map::new()));
                match entry {
                    Value::Object(members) => {
                        members.insert(index.to_string(), value);
                    }
                    other => {
                        let mut members = Map::new();
                        members.insert(index.to_string(), value);
                        *other = Value::Object(members);
                    }
                }
            }
            None => {
                target.insert(key.to_string(), value);
            }
        }
    }
}

/// Split `name[]` or `name[index]` into its parts.
fn array_key(key: &str) -> Option<(&str, Option<&str>)> {
    let (name, rest) = key.strip_suffix(']')?.split_once('[')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let index = rest.trim();
    Some((name, (!index.is_empty()).then_some(index)))
}

fn scalar(raw: &str) -> Value {
    let raw = raw.trim();
    if let Some(quoted) = unquote(raw) {
        return Value::String(quoted.to_string());
    }

    match raw.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" => return Value::Bool(true),
        "false" | "off" | "no" | "none" => return Value::Bool(false),
        "null" => return Value::String(String::new()),
        _ => {}
    }

    match raw.parse::<i64>() {
        Ok(number) => Value::from(number),
        Err(_) => Value::String(raw.to_string()),
    }
}

fn unquote(raw: &str) -> Option<&str> {
    ['"', '\''].into_iter().find_map(|quote| {
        raw.strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
    })
}
