//! Coordinate Reference System handling
//!
//! CRS values are PROJ definition strings. EPSG codes are resolved through
//! an embedded lookup table.

use std::collections::HashMap;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::errors::{WarpError, WarpResult};

/// WGS 84 geographic coordinates (EPSG:4326)
pub const CRS_EPSG4326: &str = "+proj=longlat +datum=WGS84 +no_defs";

/// Arctic polar stereographic (EPSG:3995), the auxiliary frame for north-pole rings
pub const CRS_ARCTIC_POLAR_STEREOGRAPHIC: &str =
    "+proj=stere +lat_0=90 +lat_ts=71 +lon_0=0 +k=1 +x_0=0 +y_0=0 +datum=WGS84 +units=m +no_defs";

/// Antarctic polar stereographic (EPSG:3031), the auxiliary frame for south-pole rings
pub const CRS_ANTARCTIC_POLAR_STEREOGRAPHIC: &str =
    "+proj=stere +lat_0=-90 +lat_ts=-71 +lon_0=0 +k=1 +x_0=0 +y_0=0 +datum=WGS84 +units=m +no_defs";

lazy_static! {
    static ref EPSG_DEFINITIONS: EpsgDefinitions = {
        let content = include_str!("../../epsg_codes.toml");
        EpsgDefinitions::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse EPSG definitions: {}", e);
            EpsgDefinitions::default()
        })
    };
    static ref EPSG_PATTERN: Regex = Regex::new(r"(?i)^epsg:(.*)$").expect("EPSG code pattern must compile");
}

/// Table of EPSG codes and their PROJ definitions
#[derive(Debug, Default)]
pub struct EpsgDefinitions {
    definitions: HashMap<u32, String>,
}

impl EpsgDefinitions {
    /// Parse definitions from a TOML document with a `[definitions]` table
    pub fn from_str(content: &str) -> WarpResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(WarpError::GenericError(format!("Failed to parse TOML: {}", e))),
        };

        let mut defs = EpsgDefinitions::default();
        if let Some(table) = toml_value.get("definitions").and_then(|v| v.as_table()) {
            for (k, v) in table {
                if let (Ok(code), Some(definition)) = (k.parse::<u32>(), v.as_str()) {
                    defs.definitions.insert(code, definition.to_string());
                }
            }
        }

        Ok(defs)
    }

    /// Look up a code, falling back to the derived UTM zones
    pub fn get(&self, code: u32) -> Option<String> {
        if let Some(definition) = self.definitions.get(&code) {
            return Some(definition.clone());
        }
        match code {
            32601..=32660 => Some(format!(
                "+proj=utm +zone={} +datum=WGS84 +units=m +no_defs",
                code - 32600
            )),
            32701..=32760 => Some(format!(
                "+proj=utm +zone={} +south +datum=WGS84 +units=m +no_defs",
                code - 32700
            )),
            _ => None,
        }
    }

    /// Number of explicitly listed codes
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// True if no code is listed
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// A CRS as given by a caller: an EPSG number or a definition string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrsCode<'a> {
    /// Numeric EPSG code
    Epsg(u32),
    /// `"EPSG:<n>"`, or a PROJ definition passed through unchanged
    Text(&'a str),
}

impl From<u32> for CrsCode<'static> {
    fn from(code: u32) -> Self {
        CrsCode::Epsg(code)
    }
}

impl<'a> From<&'a str> for CrsCode<'a> {
    fn from(text: &'a str) -> Self {
        CrsCode::Text(text)
    }
}

/// Resolve a CRS code to a PROJ definition string
///
/// `"EPSG:<n>"` and `"epsg:<n>"` are looked up; any other text is assumed
/// to already be a definition and is returned unchanged.
pub fn get_crs<'a>(code: impl Into<CrsCode<'a>>) -> WarpResult<String> {
    match code.into() {
        CrsCode::Epsg(epsg) => lookup_epsg(epsg, &epsg.to_string()),
        CrsCode::Text(text) => {
            let captured = EPSG_PATTERN
                .captures(text.trim())
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string());
            match captured {
                Some(number) => {
                    let epsg = number
                        .trim()
                        .parse::<u32>()
                        .map_err(|_| WarpError::InvalidCode(text.to_string()))?;
                    lookup_epsg(epsg, text)
                }
                None => Ok(text.to_string()),
            }
        }
    }
}

fn lookup_epsg(epsg: u32, given: &str) -> WarpResult<String> {
    let definition = EPSG_DEFINITIONS
        .get(epsg)
        .ok_or_else(|| WarpError::InvalidCode(given.to_string()))?;
    debug!("Resolved EPSG:{} to '{}'", epsg, definition);
    Ok(definition)
}

/// Two definitions denote the same CRS (ignoring surrounding whitespace)
pub fn same_crs(a: &str, b: &str) -> bool {
    a.trim() == b.trim()
}

/// True for the WGS 84 geographic definition
pub fn is_geographic(crs: &str) -> bool {
    same_crs(crs, CRS_EPSG4326)
}
