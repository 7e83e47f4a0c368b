//! Attribute-relation file format (ARFF) reader.
//!
//! Handles the dense files openSMILE writes for functionals: a header of
//! `@attribute` declarations followed by comma-separated `@data` records.
//! Values may be quoted with `'` or `"`, with `\` escaping the next
//! character. Numeric attributes become floats, nominal/string/date
//! attributes text, and an unquoted `?` is a missing value.

use std::path::Path;

use super::model::{Table, Value};
use crate::error::{DataError, Result};

#[derive(Debug, Clone, PartialEq)]
enum AttributeKind {
    Numeric,
    Text,
}

#[derive(Debug, Clone, PartialEq)]
struct Attribute {
    name: String,
    kind: AttributeKind,
}

/// Load an ARFF file into a [`Table`] with one column per attribute.
pub fn read_arff(path: &Path) -> Result<Table> {
    let text = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_arff(&text).map_err(|(line, message)| DataError::Arff {
        path: path.to_path_buf(),
        line,
        message,
    })
}

type ParseResult<T> = std::result::Result<T, (u64, String)>;

fn parse_arff(text: &str) -> ParseResult<Table> {
    let mut attributes = Vec::new();
    let mut data_offset = None;
    let mut header_lines = 0u64;

    let mut offset = 0;
    for (i, raw) in text.split_inclusive('\n').enumerate() {
        let line_no = i as u64 + 1;
        offset += raw.len();
        header_lines = line_no;

        let line = raw.trim();
        if line.is_empty() || line.starts_with('%') {
            continue;
        }
        if keyword(line, "@relation").is_some() {
            continue;
        }
        if let Some(rest) = keyword(line, "@attribute") {
            let attribute = parse_attribute(rest).map_err(|msg| (line_no, msg))?;
            attributes.push(attribute);
            continue;
        }
        if keyword(line, "@data").is_some() {
            data_offset = Some(offset);
            break;
        }
        return Err((line_no, format!("unexpected header line '{line}'")));
    }

    let data_offset = data_offset.ok_or((header_lines, "missing @data section".to_string()))?;
    if attributes.is_empty() {
        return Err((header_lines, "no @attribute declarations".to_string()));
    }

    let mut rows = Vec::new();
    for (i, raw) in text[data_offset..].lines().enumerate() {
        let line_no = header_lines + i as u64 + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('%') {
            continue;
        }
        if line.starts_with('{') {
            return Err((line_no, "sparse records are not supported".to_string()));
        }

        let fields = split_record(line).map_err(|msg| (line_no, msg))?;
        if fields.len() != attributes.len() {
            return Err((
                line_no,
                format!("record has {} values, expected {}", fields.len(), attributes.len()),
            ));
        }

        let row = fields
            .iter()
            .zip(&attributes)
            .map(|(field, attribute)| convert(field, attribute))
            .collect::<std::result::Result<Vec<_>, String>>()
            .map_err(|msg| (line_no, msg))?;
        rows.push(row);
    }

    let columns = attributes.into_iter().map(|a| a.name).collect();
    Ok(Table::new(columns, rows))
}

/// Case-insensitive match of a leading `@keyword`, returning what follows.
fn keyword<'a>(line: &'a str, word: &str) -> Option<&'a str> {
    let head = line.get(..word.len())?;
    let rest = &line[word.len()..];
    let separated = rest.is_empty() || rest.starts_with(char::is_whitespace);
    (head.eq_ignore_ascii_case(word) && separated).then(|| rest.trim())
}

fn parse_attribute(rest: &str) -> std::result::Result<Attribute, String> {
    let (name, kind) = match rest.chars().next() {
        Some(q @ ('\'' | '"')) => {
            let close = rest[1..]
                .find(q)
                .ok_or_else(|| format!("unterminated attribute name in '{rest}'"))?;
            (&rest[1..close + 1], rest[close + 2..].trim())
        }
        Some(_) => rest
            .split_once(char::is_whitespace)
            .map(|(name, kind)| (name, kind.trim()))
            .ok_or_else(|| format!("attribute '{rest}' has no type"))?,
        None => return Err("empty attribute declaration".to_string()),
    };

    let kind = if kind.starts_with('{') {
        AttributeKind::Text
    } else {
        let word = kind.split_whitespace().next().unwrap_or("");
        match word.to_ascii_lowercase().as_str() {
            "numeric" | "real" | "integer" => AttributeKind::Numeric,
            "string" | "date" => AttributeKind::Text,
            other => return Err(format!("unsupported attribute type '{other}' for '{name}'")),
        }
    };

    Ok(Attribute {
        name: name.to_string(),
        kind,
    })
}

/// One value of a data record; quoting is kept so `'?'` stays text.
#[derive(Debug, Clone, PartialEq)]
struct Field {
    text: String,
    quoted: bool,
}

/// Split a dense data record on commas, honouring both quote styles.
fn split_record(line: &str) -> std::result::Result<Vec<Field>, String> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();
    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let field = match chars.peek().copied() {
            Some(quote @ ('\'' | '"')) => {
                chars.next();
                let mut text = String::new();
                loop {
                    match chars.next() {
                        Some('\\') => match chars.next() {
                            Some(c) => text.push(c),
                            None => return Err(format!("unterminated quote in '{line}'")),
                        },
                        Some(c) if c == quote => break,
                        Some(c) => text.push(c),
                        None => return Err(format!("unterminated quote in '{line}'")),
                    }
                }
                while chars.next_if(|c| c.is_whitespace()).is_some() {}
                if !matches!(chars.peek(), None | Some(',')) {
                    return Err(format!("text after closing quote in '{line}'"));
                }
                Field { text, quoted: true }
            }
            _ => {
                let mut text = String::new();
                while let Some(c) = chars.next_if(|&c| c != ',') {
                    text.push(c);
                }
                Field {
                    text: text.trim_end().to_string(),
                    quoted: false,
                }
            }
        };
        fields.push(field);

        // the field stopped at a comma or the end of the line
        if chars.next().is_none() {
            return Ok(fields);
        }
    }
}

fn convert(field: &Field, attribute: &Attribute) -> std::result::Result<Value, String> {
    let cell = field.text.as_str();
    if cell == "?" && !field.quoted {
        return Ok(Value::Null);
    }
    match attribute.kind {
        AttributeKind::Numeric => cell
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| format!("'{cell}' is not numeric for attribute '{}'", attribute.name)),
        AttributeKind::Text => Ok(Value::Text(cell.to_string())),
    }
}
