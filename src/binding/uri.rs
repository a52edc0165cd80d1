//! URI binding (CPE 2.2): `cpe:/part:vendor:product:version:update:edition:language`
//!
//! Values are percent-encoded with lowercase hex. Wildcard markers are
//! folded into the percent space (`*` as `%02`, each `?` as `%01`) rather
//! than passed through. `Any` renders empty, `NotApplicable` renders `-`,
//! and trailing empty positions are trimmed. When any of sw_edition,
//! target_sw, target_hw, or other is set, the edition position carries the
//! tilde-packed extended group instead of a bare value.

use tracing::trace;

use crate::attribute::StringAttr;
use crate::error::{Error, Result};
use crate::name::Name;
use crate::part::Part;

/// Render a name in the URI form
pub fn render(name: &Name) -> String {
    let mut uri = String::from("cpe:/");

    let head = [
        name.part.letter().unwrap_or("").to_string(),
        encode_value(&name.vendor),
        encode_value(&name.product),
        encode_value(&name.version),
        encode_value(&name.update),
    ];
    uri.push_str(&head.join(":"));

    let extended = [
        &name.sw_edition,
        &name.target_sw,
        &name.target_hw,
        &name.other,
    ]
    .iter()
    .any(|attr| !attr.is_empty());

    if extended {
        uri.push_str(&format!(
            ":~{}~{}~{}~{}~{}",
            encode_value(&name.edition),
            encode_value(&name.sw_edition),
            encode_value(&name.target_sw),
            encode_value(&name.target_hw),
            encode_value(&name.other),
        ));
    } else {
        uri.push(':');
        uri.push_str(&encode_value(&name.edition));
    }

    uri.push(':');
    uri.push_str(&encode_value(&name.language));

    uri.trim_end_matches(&[':', '*'][..]).to_string()
}

fn encode_value(attr: &StringAttr) -> String {
    match attr {
        StringAttr::Any => String::new(),
        StringAttr::NotApplicable => "-".to_string(),
        StringAttr::Value(raw) => pct_encode(raw),
    }
}

/// Percent-encode a raw value. Alphanumerics and `._-` pass through;
/// wildcard markers use the reserved `%01`/`%02` escapes; everything else
/// (including `~`, the packing delimiter) is percent-encoded.
fn pct_encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for &b in raw.as_bytes() {
        match b {
            b'*' => out.push_str("%02"),
            b'?' => out.push_str("%01"),
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'.' | b'_' | b'-' => out.push(b as char),
            _ => out.push_str(&format!("%{:02x}", b)),
        }
    }
    out
}

/// Parse a name from the URI form
pub fn parse(input: &str) -> Result<Name> {
    trace!("parsing URI: {}", input);

    let body = input.strip_prefix("cpe:/").ok_or(Error::UriEnvelope)?;

    let mut name = Name::new();
    if body.is_empty() {
        return Ok(name);
    }

    let components: Vec<&str> = body.split(':').collect();
    if components.len() > 7 {
        return Err(Error::ComponentCount {
            expected: 7,
            found: components.len(),
        });
    }

    for (i, component) in components.iter().enumerate() {
        match i {
            0 => name.part = decode_part(component)?,
            1 => name.vendor = decode_value(component)?,
            2 => name.product = decode_value(component)?,
            3 => name.version = decode_value(component)?,
            4 => name.update = decode_value(component)?,
            5 => decode_edition(component, &mut name)?,
            _ => name.language = decode_value(component)?,
        }
    }

    Ok(name)
}

/// The edition position holds either a bare value or the six-field packed
/// group `~edition~sw_edition~target_sw~target_hw~other`
fn decode_edition(component: &str, name: &mut Name) -> Result<()> {
    let editions: Vec<&str> = component.split('~').collect();
    match editions.len() {
        1 => name.edition = decode_value(editions[0])?,
        6 => {
            name.edition = decode_value(editions[1])?;
            name.sw_edition = decode_value(editions[2])?;
            name.target_sw = decode_value(editions[3])?;
            name.target_hw = decode_value(editions[4])?;
            name.other = decode_value(editions[5])?;
        }
        found => return Err(Error::EditionGroup { found }),
    }
    Ok(())
}

fn decode_part(component: &str) -> Result<Part> {
    if component.is_empty() {
        return Ok(Part::NotSet);
    }
    Part::from_letter(component)
}

fn decode_value(component: &str) -> Result<StringAttr> {
    match component {
        "" | "*" => Ok(StringAttr::Any),
        "-" => Ok(StringAttr::NotApplicable),
        _ => StringAttr::new(pct_decode(component)?),
    }
}

fn pct_decode(component: &str) -> Result<String> {
    if !component.is_ascii() {
        return Err(Error::InvalidAttribute {
            attribute: "string",
            value: component.to_string(),
        });
    }
    let bytes = component.as_bytes();
    let mut out = String::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 3 > bytes.len() {
                return Err(Error::InvalidPercentEscape(component[i..].to_string()));
            }
            let hex = &component[i + 1..i + 3];
            match hex {
                "01" => out.push('?'),
                "02" => out.push('*'),
                _ => {
                    let byte = u8::from_str_radix(hex, 16).map_err(|_| {
                        Error::InvalidPercentEscape(component[i..i + 3].to_string())
                    })?;
                    out.push(byte as char);
                }
            }
            i += 3;
        } else {
            out.push(bytes[i] as char);
            i += 1;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(raw: &str) -> StringAttr {
        StringAttr::new(raw).unwrap()
    }

    #[test]
    fn test_render_trims_trailing_empties() {
        let mut name = Name::new();
        name.set_part(Part::Application).unwrap();
        name.set_vendor(value("microsoft")).unwrap();
        name.set_product(value("internet_explorer")).unwrap();
        name.set_version(value("8.0.6001")).unwrap();
        name.set_update(value("beta")).unwrap();
        name.set_edition(StringAttr::Any).unwrap();

        assert_eq!(render(&name), "cpe:/a:microsoft:internet_explorer:8.0.6001:beta");
    }

    #[test]
    fn test_render_wildcards_use_percent_escapes() {
        let mut name = Name::new();
        name.set_part(Part::Application).unwrap();
        name.set_vendor(value("microsoft")).unwrap();
        name.set_product(value("internet_explorer")).unwrap();
        name.set_version(value("8.*")).unwrap();
        name.set_update(value("sp?")).unwrap();

        assert_eq!(
            render(&name),
            "cpe:/a:microsoft:internet_explorer:8.%02:sp%01"
        );
    }

    #[test]
    fn test_render_packed_edition_group() {
        let mut name = Name::new();
        name.set_part(Part::Application).unwrap();
        name.set_vendor(value("hp")).unwrap();
        name.set_product(value("insight_diagnostics")).unwrap();
        name.set_version(value("7.4.0.1570")).unwrap();
        name.set_update(StringAttr::NotApplicable).unwrap();
        name.set_sw_edition(value("online")).unwrap();
        name.set_target_sw(value("win2003")).unwrap();
        name.set_target_hw(value("x64")).unwrap();

        assert_eq!(
            render(&name),
            "cpe:/a:hp:insight_diagnostics:7.4.0.1570:-:~~online~win2003~x64~"
        );
    }

    #[test]
    fn test_render_packed_with_single_target() {
        let mut name = Name::new();
        name.set_part(Part::Application).unwrap();
        name.set_vendor(value("hp")).unwrap();
        name.set_product(value("openview_network_manager")).unwrap();
        name.set_version(value("7.51")).unwrap();
        name.set_target_sw(value("linux")).unwrap();

        assert_eq!(
            render(&name),
            "cpe:/a:hp:openview_network_manager:7.51::~~~linux~~"
        );
    }

    #[test]
    fn test_render_percent_encodes_punctuation() {
        let mut name = Name::new();
        name.set_part(Part::Application).unwrap();
        name.set_vendor(value(r"foo\bar")).unwrap();
        name.set_product(value("big$money_manager_2010")).unwrap();
        name.set_sw_edition(value("special")).unwrap();
        name.set_target_sw(value("ipod_touch")).unwrap();
        name.set_target_hw(value("80gb")).unwrap();

        assert_eq!(
            render(&name),
            "cpe:/a:foo%5cbar:big%24money_manager_2010:::~~special~ipod_touch~80gb~"
        );
    }

    #[test]
    fn test_parse_simple() {
        let name = parse("cpe:/a:microsoft:internet_explorer:8.0.6001:beta").unwrap();
        assert_eq!(*name.part(), Part::Application);
        assert_eq!(*name.vendor(), value("microsoft"));
        assert_eq!(*name.product(), value("internet_explorer"));
        assert_eq!(*name.version(), value("8.0.6001"));
        assert_eq!(*name.update(), value("beta"));
        assert_eq!(*name.edition(), StringAttr::Any);
    }

    #[test]
    fn test_parse_packed_edition_group() {
        let name = parse("cpe:/a:hp:insight_diagnostics:7.4.0.1570:-:~~online~win2003~x64~").unwrap();
        assert_eq!(*name.part(), Part::Application);
        assert_eq!(*name.update(), StringAttr::NotApplicable);
        assert_eq!(*name.edition(), StringAttr::Any);
        assert_eq!(*name.sw_edition(), value("online"));
        assert_eq!(*name.target_sw(), value("win2003"));
        assert_eq!(*name.target_hw(), value("x64"));
        assert_eq!(*name.other(), StringAttr::Any);
    }

    #[test]
    fn test_parse_language_component() {
        let name = parse("cpe:/a:microsoft:internet_explorer:8.0.6001:beta::en-us").unwrap();
        assert_eq!(*name.language(), value("en-us"));
    }

    #[test]
    fn test_parse_percent_escapes() {
        let name = parse("cpe:/a:foo%5cbar:big%24money_manager_2010:8.%02:sp%01").unwrap();
        assert_eq!(*name.vendor(), value(r"foo\bar"));
        assert_eq!(*name.product(), value("big$money_manager_2010"));
        assert_eq!(*name.version(), value("8.*"));
        assert_eq!(*name.update(), value("sp?"));
    }

    #[test]
    fn test_parse_envelope_errors() {
        assert_eq!(
            parse("a:microsoft:internet_explorer").unwrap_err(),
            Error::UriEnvelope
        );
        assert!(matches!(
            parse("cpe:/a:v:p:1:u:e:l:extra").unwrap_err(),
            Error::ComponentCount { .. }
        ));
        assert!(matches!(
            parse("cpe:/a:v:p:1:u:~one~two").unwrap_err(),
            Error::EditionGroup { found: 3 }
        ));
    }

    #[test]
    fn test_parse_bad_percent_escape() {
        assert!(matches!(
            parse("cpe:/a:bad%zzvendor").unwrap_err(),
            Error::InvalidPercentEscape(_)
        ));
        assert!(matches!(
            parse("cpe:/a:truncated%2").unwrap_err(),
            Error::InvalidPercentEscape(_)
        ));
    }

    #[test]
    fn test_round_trip() {
        for text in [
            "cpe:/a:microsoft:internet_explorer:8.0.6001:beta",
            "cpe:/a:hp:insight_diagnostics:7.4.0.1570:-:~~online~win2003~x64~",
            "cpe:/a:hp:openview_network_manager:7.51::~~~linux~~",
            "cpe:/o:microsoft:windows_2000",
        ] {
            let name = parse(text).unwrap();
            assert_eq!(render(&name), text, "round-trip of {text}");
        }
    }
}
