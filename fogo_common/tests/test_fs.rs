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
#![allow(unused)]

use regex::Regex;
use fogo_common::fs::*;

// run with "cargo test test_xx -- --nocapture"

#[test]
fn test_sanitized_filename() {
    assert_eq!( sanitized_filename("area.shp"), Some("area.shp"));
    assert_eq!( sanitized_filename("../../etc/area.shp"), Some("area.shp"));
    assert_eq!( sanitized_filename("C:\\tmp\\area.dbf"), Some("area.dbf"));
    assert_eq!( sanitized_filename(".."), None);
    assert_eq!( sanitized_filename("dir/"), None);
    assert_eq!( sanitized_filename(""), None);
}

#[test]
fn test_matching_files() {
    let dir = tempfile::tempdir().unwrap();
    set_filepath_contents( dir.path(), "b.shp", b"b").unwrap();
    set_filepath_contents( dir.path(), "a.SHP", b"a").unwrap();
    set_filepath_contents( dir.path(), "a.dbf", b"a").unwrap();

    let re = Regex::new(r"(?i).*\.shp$").unwrap();
    let files = matching_files_in_dir( &dir.path(), &re).unwrap();
    for f in &files { println!("{f:?}"); }

    assert_eq!( files.len(), 2);
    assert_eq!( filename( &files[0]), Some("a.SHP"));
    assert!( has_extension( &files[0], "shp"));
    assert!( !has_extension( &files[0], "dbf"));

    assert_eq!( filepath_contents_as_string( &files[1]).unwrap(), "b");
    assert!( matching_files_in_dir( &dir.path().join("nope"), &re).is_err());
}
