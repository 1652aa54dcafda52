/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::{fmt, str::FromStr};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize,Deserialize};
use crate::errors::{malformed_tle, CoraOrbitalError, Result};

// tolerant extraction of two-line element sets from pasted text.
// We only locate the element lines by their line number prefix - checksums and column layout are
// verified later by the SGP4 element decoder, which reports them as malformed TLEs

pub const LINE1_PREFIX: &str = "1 ";
pub const LINE2_PREFIX: &str = "2 ";

lazy_static! {
    /// regex to extract the NORAD catalog number from element line 1, e.g. "1 54234U 22150A ..."
    pub static ref CATALOG_NUMBER_RE: Regex = Regex::new( r"^1 +(\d{1,5})").unwrap();
}

/// the two canonical element lines plus an optional object name (the "line 0" of 3-line sets)
#[derive(Debug,Clone,PartialEq,Eq,Serialize,Deserialize)]
pub struct ElementSet {
    pub name: Option<String>,
    pub line1: String,
    pub line2: String,
}

impl ElementSet {
    /// create a nameless element set from two lines that have to carry the correct prefixes
    pub fn from_lines (line1: &str, line2: &str) -> Result<Self> {
        let line1 = line1.trim();
        let line2 = line2.trim();

        if !line1.starts_with(LINE1_PREFIX) { return Err( malformed_tle!("line 1 does not start with '{}'", LINE1_PREFIX)) }
        if !line2.starts_with(LINE2_PREFIX) { return Err( malformed_tle!("line 2 does not start with '{}'", LINE2_PREFIX)) }

        Ok( ElementSet { name: None, line1: line1.to_string(), line2: line2.to_string() })
    }

    /// the object name without a 3LE "0 " line number prefix
    pub fn object_name (&self)->Option<&str> {
        self.name.as_deref().map( |n| n.strip_prefix("0 ").unwrap_or(n).trim())
    }

    pub fn catalog_number (&self)->Option<u32> {
        CATALOG_NUMBER_RE.captures( &self.line1).and_then( |cap| cap[1].parse::<u32>().ok())
    }

    /// the element lines without name, suitable for re-parsing
    pub fn to_two_line_text (&self)->String {
        format!("{}\n{}", self.line1, self.line2)
    }

    pub fn to_text (&self)->String {
        match &self.name {
            Some(name) => format!("{}\n{}\n{}", name, self.line1, self.line2),
            None => self.to_two_line_text()
        }
    }
}

impl FromStr for ElementSet {
    type Err = CoraOrbitalError;

    fn from_str (s: &str) -> Result<Self> {
        parse_tle_block(s)
    }
}

impl fmt::Display for ElementSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

#[inline]
fn is_element_line (line: &str)->bool {
    line.starts_with(LINE1_PREFIX) || line.starts_with(LINE2_PREFIX)
}

/// parse a block of pasted TLE text, which can be a 2-line set, a 3-line set with leading name or
/// a loose collection of up to three lines in arbitrary order.
/// We first try the positional layout and fall back to a prefix based scan of all lines if that does
/// not yield correctly prefixed element lines
pub fn parse_tle_block (text: &str) -> Result<ElementSet> {
    let lines: Vec<&str> = text.lines().map(|l| l.trim()).filter(|l| !l.is_empty()).collect();
    if lines.len() < 2 {
        return Err( malformed_tle!("TLE must contain at least 2 non-empty lines, got {}", lines.len()))
    }

    let (name, l1, l2) = if lines.len() >= 3 && !is_element_line(lines[0]) {
        (Some(lines[0]), lines[1], lines[2])
    } else {
        (None, lines[0], lines[1])
    };

    let (l1, l2) = if l1.starts_with(LINE1_PREFIX) && l2.starts_with(LINE2_PREFIX) {
        (l1, l2)
    } else {
        let l1 = lines.iter().find( |l| l.starts_with(LINE1_PREFIX));
        let l2 = lines.iter().find( |l| l.starts_with(LINE2_PREFIX));
        match (l1, l2) {
            (Some(l1), Some(l2)) => (*l1, *l2),
            _ => return Err( malformed_tle!("could not find proper TLE line 1 / line 2"))
        }
    };

    Ok( ElementSet { name: name.map(|n| n.to_string()), line1: l1.to_string(), line2: l2.to_string() })
}
