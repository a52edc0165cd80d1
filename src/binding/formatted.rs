//! Formatted-string binding (CPE 2.3):
//! `cpe:2.3:part:vendor:product:version:update:edition:language:sw_edition:target_sw:target_hw:other`
//!
//! Always exactly eleven components after the prefix. `*` is the open
//! value, `-` is not-applicable, and literals carry backslash escaping.
//! Unlike the WFN table, `.`, `-`, and `_` pass through bare here.

use tracing::trace;

use crate::attribute::StringAttr;
use crate::binding::{escape, unescape};
use crate::error::{Error, Result};
use crate::name::Name;
use crate::part::Part;

/// Characters escaped in a formatted-string value
const RESERVED: &str = "!\"#$%&'()+,/:;<=>@[]^`{}|~\\";

const COMPONENTS: usize = 11;

/// Render a name in the formatted-string form
pub fn render(name: &Name) -> String {
    let fields = [
        name.part.letter().unwrap_or("*").to_string(),
        encode_value(&name.vendor),
        encode_value(&name.product),
        encode_value(&name.version),
        encode_value(&name.update),
        encode_value(&name.edition),
        encode_value(&name.language),
        encode_value(&name.sw_edition),
        encode_value(&name.target_sw),
        encode_value(&name.target_hw),
        encode_value(&name.other),
    ];
    format!("cpe:2.3:{}", fields.join(":"))
}

fn encode_value(attr: &StringAttr) -> String {
    match attr {
        StringAttr::Any => "*".to_string(),
        StringAttr::NotApplicable => "-".to_string(),
        StringAttr::Value(raw) => escape(raw, RESERVED),
    }
}

/// Parse a name from the formatted-string form
pub fn parse(input: &str) -> Result<Name> {
    trace!("parsing formatted string: {}", input);

    let body = input
        .strip_prefix("cpe:2.3:")
        .ok_or(Error::FormattedEnvelope)?;

    let components = split_components(body);
    if components.len() != COMPONENTS {
        return Err(Error::ComponentCount {
            expected: COMPONENTS,
            found: components.len(),
        });
    }

    let mut name = Name::new();
    name.part = decode_part(&components[0])?;
    name.vendor = decode_value(&components[1])?;
    name.product = decode_value(&components[2])?;
    name.version = decode_value(&components[3])?;
    name.update = decode_value(&components[4])?;
    name.edition = decode_value(&components[5])?;
    name.language = decode_value(&components[6])?;
    name.sw_edition = decode_value(&components[7])?;
    name.target_sw = decode_value(&components[8])?;
    name.target_hw = decode_value(&components[9])?;
    name.other = decode_value(&components[10])?;

    Ok(name)
}

/// Split on colons, keeping a backslash-escaped colon inside its value
fn split_components(body: &str) -> Vec<String> {
    let mut components = Vec::new();
    let mut current = String::new();
    let mut escaped = false;

    for c in body.chars() {
        if escaped {
            current.push(c);
            escaped = false;
            continue;
        }
        match c {
            '\\' => {
                current.push(c);
                escaped = true;
            }
            ':' => components.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    components.push(current);
    components
}

fn decode_part(component: &str) -> Result<Part> {
    if component == "*" {
        return Ok(Part::NotSet);
    }
    Part::from_letter(component)
}

fn decode_value(component: &str) -> Result<StringAttr> {
    match component {
        "*" => Ok(StringAttr::Any),
        "-" => Ok(StringAttr::NotApplicable),
        _ => StringAttr::new(unescape(component)?),
    }
}
