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

use cora_orbital::{errors::CoraOrbitalError, tle::{parse_tle_block, ElementSet}};

/* #region test-data *************************************************************/

const NAME: &str = "0 NOAA 21";
const LINE1: &str = "1 54234U 22150A   25076.92835707  .00000366  00000-0  19403-3 0  9994";
const LINE2: &str = "2 54234  98.7204  17.0432 0002710  72.7407 287.4066 14.19556514121811";

/* #endregion test-data */

fn assert_lines (es: &ElementSet) {
    assert_eq!( es.line1, LINE1);
    assert_eq!( es.line2, LINE2);
}

#[test]
fn test_two_line () {
    let es = parse_tle_block( &format!("{LINE1}\n{LINE2}")).unwrap();
    println!("{es}");
    assert_lines(&es);
    assert!( es.name.is_none());
}

#[test]
fn test_three_line () {
    let es = parse_tle_block( &format!("{NAME}\n{LINE1}\n{LINE2}\n")).unwrap();
    println!("{es}");
    assert_lines(&es);
    assert_eq!( es.name.as_deref(), Some(NAME));
    assert_eq!( es.object_name(), Some("NOAA 21"));
    assert_eq!( es.catalog_number(), Some(54234));
}

#[test]
fn test_loose_layouts () {
    // blank lines and surrounding whitespace
    let es = parse_tle_block( &format!("\n   {NAME}  \n\n\t{LINE1}\n   {LINE2}   \n\n")).unwrap();
    assert_lines(&es);
    assert_eq!( es.name.as_deref(), Some(NAME));

    // reversed element lines
    let es = parse_tle_block( &format!("{LINE2}\n{LINE1}")).unwrap();
    assert_lines(&es);
    assert!( es.name.is_none());

    // name and reversed element lines
    let es = parse_tle_block( &format!("{NAME}\n{LINE2}\n{LINE1}")).unwrap();
    assert_lines(&es);
    assert_eq!( es.name.as_deref(), Some(NAME));

    // trailing name
    let es = parse_tle_block( &format!("{LINE1}\n{LINE2}\n{NAME}")).unwrap();
    assert_lines(&es);
    assert!( es.name.is_none());

    // name in the middle
    let es = parse_tle_block( &format!("{LINE2}\n{NAME}\n{LINE1}")).unwrap();
    assert_lines(&es);
}

#[test]
fn test_malformed () {
    let inputs = [
        String::new(),
        "   \n  \n".to_string(),
        LINE1.to_string(),
        format!("{NAME}\n{LINE1}"),
        format!("{NAME}\n{LINE2}\nsomething else"),
        "this is\nnot a TLE\nat all".to_string(),
        format!("{}\n{}", LINE1.replacen("1 ", "1", 1), LINE2),
    ];

    for input in &inputs {
        match parse_tle_block(input) {
            Err(CoraOrbitalError::MalformedTle(msg)) => println!("rejected: {msg}"),
            other => panic!("input {input:?} should be malformed, got {other:?}")
        }
    }
}

#[test]
fn test_idempotent () {
    let es = parse_tle_block( &format!("{NAME}\n{LINE2}\n{LINE1}")).unwrap();
    let es2 = parse_tle_block( &es.to_two_line_text()).unwrap();
    let es3 = parse_tle_block( &es2.to_two_line_text()).unwrap();

    assert_eq!( es2.line1, es.line1);
    assert_eq!( es2.line2, es.line2);
    assert_eq!( es2, es3);
    assert_eq!( es2, ElementSet::from_lines(LINE1, LINE2).unwrap());

    let es4: ElementSet = es.to_text().parse().unwrap();
    assert_eq!( es4, es);
}

#[test]
fn test_from_lines () {
    assert!( ElementSet::from_lines( LINE2, LINE1).is_err());
    assert!( ElementSet::from_lines( LINE1, NAME).is_err());
    let es = ElementSet::from_lines( &format!("  {LINE1} "), LINE2).unwrap();
    assert_lines(&es);
}
