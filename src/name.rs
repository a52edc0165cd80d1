//! The CPE name aggregate
//!
//! A `Name` is one part attribute plus ten string attributes in a fixed
//! order. A fresh name is fully open: every string attribute is `Any` and
//! the part is `NotSet`. Mutation goes through typed setters that reject
//! invalid values; parsing and rendering delegate to the binding codecs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::attribute::StringAttr;
use crate::binding;
use crate::error::{Error, Result};
use crate::part::Part;

/// A CPE name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub(crate) part: Part,
    pub(crate) vendor: StringAttr,
    pub(crate) product: StringAttr,
    pub(crate) version: StringAttr,
    pub(crate) update: StringAttr,
    pub(crate) edition: StringAttr,
    pub(crate) language: StringAttr,
    pub(crate) sw_edition: StringAttr,
    pub(crate) target_sw: StringAttr,
    pub(crate) target_hw: StringAttr,
    pub(crate) other: StringAttr,
}

impl Name {
    /// Create an empty name: part `NotSet`, every string attribute `Any`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a name for an application
    pub fn application(vendor: &str, product: &str, version: &str) -> Result<Self> {
        let mut name = Self::new();
        name.set_part(Part::Application)?;
        name.set_vendor(StringAttr::new(vendor)?)?;
        name.set_product(StringAttr::new(product)?)?;
        name.set_version(StringAttr::new(version)?)?;
        Ok(name)
    }

    /// Create a name for an operating system
    pub fn operating_system(vendor: &str, product: &str, version: &str) -> Result<Self> {
        let mut name = Self::new();
        name.set_part(Part::OperatingSystem)?;
        name.set_vendor(StringAttr::new(vendor)?)?;
        name.set_product(StringAttr::new(product)?)?;
        name.set_version(StringAttr::new(version)?)?;
        Ok(name)
    }

    /// Parse a name, auto-detecting the binding from its prefix
    pub fn parse(input: &str) -> Result<Self> {
        trace!("parsing CPE name: {}", input);

        if input.starts_with("wfn:[") {
            binding::wfn::parse(input)
        } else if input.starts_with("cpe:2.3:") {
            binding::formatted::parse(input)
        } else if input.starts_with("cpe:/") {
            binding::uri::parse(input)
        } else {
            Err(Error::UnknownFormat(input.to_string()))
        }
    }

    /// Parse a name from the WFN binding
    pub fn from_wfn(input: &str) -> Result<Self> {
        binding::wfn::parse(input)
    }

    /// Parse a name from the URI (CPE 2.2) binding
    pub fn from_uri(input: &str) -> Result<Self> {
        binding::uri::parse(input)
    }

    /// Parse a name from the formatted-string (CPE 2.3) binding
    pub fn from_formatted_string(input: &str) -> Result<Self> {
        binding::formatted::parse(input)
    }

    /// Render in the WFN binding
    pub fn to_wfn(&self) -> String {
        binding::wfn::render(self)
    }

    /// Render in the URI (CPE 2.2) binding
    pub fn to_uri(&self) -> String {
        binding::uri::render(self)
    }

    /// Render in the formatted-string (CPE 2.3) binding
    pub fn to_formatted_string(&self) -> String {
        binding::formatted::render(self)
    }

    pub fn part(&self) -> &Part {
        &self.part
    }

    /// Set the part. Rejects `NotSet`.
    pub fn set_part(&mut self, part: Part) -> Result<()> {
        if !part.is_valid() {
            return Err(Error::InvalidPart(format!("{:?}", part)));
        }
        self.part = part;
        Ok(())
    }

    pub fn vendor(&self) -> &StringAttr {
        &self.vendor
    }

    pub fn set_vendor(&mut self, value: StringAttr) -> Result<()> {
        set_checked(&mut self.vendor, value, "vendor")
    }

    pub fn product(&self) -> &StringAttr {
        &self.product
    }

    pub fn set_product(&mut self, value: StringAttr) -> Result<()> {
        set_checked(&mut self.product, value, "product")
    }

    pub fn version(&self) -> &StringAttr {
        &self.version
    }

    pub fn set_version(&mut self, value: StringAttr) -> Result<()> {
        set_checked(&mut self.version, value, "version")
    }

    pub fn update(&self) -> &StringAttr {
        &self.update
    }

    pub fn set_update(&mut self, value: StringAttr) -> Result<()> {
        set_checked(&mut self.update, value, "update")
    }

    pub fn edition(&self) -> &StringAttr {
        &self.edition
    }

    pub fn set_edition(&mut self, value: StringAttr) -> Result<()> {
        set_checked(&mut self.edition, value, "edition")
    }

    pub fn language(&self) -> &StringAttr {
        &self.language
    }

    pub fn set_language(&mut self, value: StringAttr) -> Result<()> {
        set_checked(&mut self.language, value, "language")
    }

    pub fn sw_edition(&self) -> &StringAttr {
        &self.sw_edition
    }

    pub fn set_sw_edition(&mut self, value: StringAttr) -> Result<()> {
        set_checked(&mut self.sw_edition, value, "sw_edition")
    }

    pub fn target_sw(&self) -> &StringAttr {
        &self.target_sw
    }

    pub fn set_target_sw(&mut self, value: StringAttr) -> Result<()> {
        set_checked(&mut self.target_sw, value, "target_sw")
    }

    pub fn target_hw(&self) -> &StringAttr {
        &self.target_hw
    }

    pub fn set_target_hw(&mut self, value: StringAttr) -> Result<()> {
        set_checked(&mut self.target_hw, value, "target_hw")
    }

    pub fn other(&self) -> &StringAttr {
        &self.other
    }

    pub fn set_other(&mut self, value: StringAttr) -> Result<()> {
        set_checked(&mut self.other, value, "other")
    }

    /// The ten string attributes with their canonical names, in render order
    pub(crate) fn string_fields(&self) -> [(&'static str, &StringAttr); 10] {
        [
            ("vendor", &self.vendor),
            ("product", &self.product),
            ("version", &self.version),
            ("update", &self.update),
            ("edition", &self.edition),
            ("language", &self.language),
            ("sw_edition", &self.sw_edition),
            ("target_sw", &self.target_sw),
            ("target_hw", &self.target_hw),
            ("other", &self.other),
        ]
    }
}

fn set_checked(slot: &mut StringAttr, value: StringAttr, attribute: &'static str) -> Result<()> {
    if !value.is_valid() {
        return Err(Error::InvalidAttribute {
            attribute,
            value: value.raw().unwrap_or_default().to_string(),
        });
    }
    *slot = value;
    Ok(())
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_formatted_string())
    }
}

impl FromStr for Name {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Name::parse(s)
    }
}
