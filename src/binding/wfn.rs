//! Well-Formed Name binding: `wfn:[attr="value",...]`
//!
//! Literal values are double-quoted with reserved punctuation
//! backslash-escaped; the sentinels render unquoted as `ANY` and `NA`.
//! Only non-empty attributes are emitted, in the canonical order.

use tracing::trace;

use crate::attribute::StringAttr;
use crate::binding::{escape, unescape};
use crate::error::{Error, Result};
use crate::name::Name;
use crate::part::Part;

/// Characters escaped inside a quoted WFN value. Wildcard markers pass
/// through bare.
const RESERVED: &str = "-!\"#$%&'()+,./:;<=>@[]^`{}|~\\";

/// Render a name in the WFN form
pub fn render(name: &Name) -> String {
    let mut segments: Vec<String> = Vec::new();

    if let Some(letter) = name.part.letter() {
        segments.push(format!("part=\"{}\"", letter));
    }
    for (attr_name, attr) in name.string_fields() {
        if !attr.is_empty() {
            segments.push(format!("{}={}", attr_name, encode_value(attr)));
        }
    }

    format!("wfn:[{}]", segments.join(","))
}

fn encode_value(attr: &StringAttr) -> String {
    match attr {
        StringAttr::Any => "ANY".to_string(),
        StringAttr::NotApplicable => "NA".to_string(),
        StringAttr::Value(raw) => format!("\"{}\"", escape(raw, RESERVED)),
    }
}

/// Parse a name from the WFN form
pub fn parse(input: &str) -> Result<Name> {
    trace!("parsing WFN: {}", input);

    let body = input.strip_prefix("wfn:[").ok_or(Error::WfnEnvelope)?;
    let body = body.strip_suffix(']').ok_or(Error::WfnEnvelope)?;

    let mut name = Name::new();
    if body.is_empty() {
        return Ok(name);
    }

    for segment in split_segments(body)? {
        let (attr, value) = split_pair(&segment)?;
        match attr {
            "part" => name.part = decode_part(value)?,
            "vendor" => name.vendor = decode_value(value)?,
            "product" => name.product = decode_value(value)?,
            "version" => name.version = decode_value(value)?,
            "update" => name.update = decode_value(value)?,
            "edition" => name.edition = decode_value(value)?,
            "language" => name.language = decode_value(value)?,
            "sw_edition" => name.sw_edition = decode_value(value)?,
            "target_sw" => name.target_sw = decode_value(value)?,
            "target_hw" => name.target_hw = decode_value(value)?,
            "other" => name.other = decode_value(value)?,
            // Unrecognized attribute names are ignored.
            _ => {}
        }
    }

    Ok(name)
}

/// Split on commas outside double quotes. Backslash escaping inside
/// quotes is honored, so an escaped quote does not close the value.
fn split_segments(body: &str) -> Result<Vec<String>> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escaped = false;

    for c in body.chars() {
        if escaped {
            current.push(c);
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_quotes => {
                current.push(c);
                escaped = true;
            }
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            ',' if !in_quotes => segments.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    if in_quotes || escaped {
        return Err(Error::WfnEnvelope);
    }

    segments.push(current);
    Ok(segments)
}

/// A segment must carry exactly one `=` outside quotes
fn split_pair(segment: &str) -> Result<(&str, &str)> {
    let mut in_quotes = false;
    let mut escaped = false;
    let mut positions = Vec::new();

    for (i, c) in segment.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            '=' if !in_quotes => positions.push(i),
            _ => {}
        }
    }

    if positions.len() != 1 {
        return Err(Error::MalformedPair(segment.to_string()));
    }
    let at = positions[0];
    Ok((&segment[..at], &segment[at + 1..]))
}

fn decode_part(value: &str) -> Result<Part> {
    let letter = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or_else(|| Error::InvalidPart(value.to_string()))?;
    Part::from_letter(letter)
}

fn decode_value(value: &str) -> Result<StringAttr> {
    match value {
        "ANY" => Ok(StringAttr::Any),
        "NA" => Ok(StringAttr::NotApplicable),
        _ => {
            let inner = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .ok_or_else(|| Error::InvalidAttribute {
                    attribute: "string",
                    value: value.to_string(),
                })?;
            StringAttr::new(unescape(inner)?)
        }
    }
}
