//! Textual bindings of the CPE naming model
//!
//! Three independent encode/decode pairs translate between `Name` and a
//! concrete syntax: the Well-Formed Name form, the CPE 2.2 URI form, and
//! the CPE 2.3 formatted-string form. Each module exposes
//! `parse(&str) -> Result<Name>` and `render(&Name) -> String`.

pub mod formatted;
pub mod uri;
pub mod wfn;

use crate::error::{Error, Result};

/// Remove backslash escaping from a WFN or formatted-string value.
/// A dangling trailing backslash is an error.
pub(crate) fn unescape(value: &str) -> Result<String> {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) => out.push(next),
                None => {
                    return Err(Error::InvalidAttribute {
                        attribute: "string",
                        value: value.to_string(),
                    })
                }
            }
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

/// Backslash-escape every character of `raw` that appears in `reserved`
pub(crate) fn escape(raw: &str, reserved: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if reserved.contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape() {
        assert_eq!(unescape(r"8\.0\.6001").unwrap(), "8.0.6001");
        assert_eq!(unescape(r"foo\\bar").unwrap(), r"foo\bar");
        assert_eq!(unescape("beta").unwrap(), "beta");
        assert!(unescape(r"dangling\").is_err());
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a.b", "."), r"a\.b");
        assert_eq!(escape("plain", "."), "plain");
    }
}
