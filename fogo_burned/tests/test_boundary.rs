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

use std::path::PathBuf;
use fogo_burned::boundary::BoundaryCatalog;

// run with "cargo test test_xx -- --nocapture"

const BOUNDARIES: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    { "type": "Feature", "properties": { "NM_MUNICIP": "IMPERATRIZ" },
      "geometry": { "type": "Point", "coordinates": [-47.5, -5.5] } },
    { "type": "Feature", "properties": { "NM_MUNICIP": "BACABAL" },
      "geometry": { "type": "Point", "coordinates": [-44.8, -4.2] } },
    { "type": "Feature", "properties": { "OTHER": "CAXIAS" },
      "geometry": { "type": "Point", "coordinates": [-43.4, -4.9] } },
    { "type": "Feature", "properties": { "NM_MUNICIP": "CODÓ" },
      "geometry": null },
    { "type": "Feature", "properties": { "NM_MUNICIP": 42 },
      "geometry": { "type": "Point", "coordinates": [-44.0, -4.0] } }
  ]
}"#;

#[test]
fn test_sorted_names() {
    let catalog = BoundaryCatalog::from_geojson_str( BOUNDARIES, "NM_MUNICIP").unwrap();
    println!("names: {:?}", catalog.names());

    assert_eq!( catalog.names(), vec!["BACABAL", "IMPERATRIZ"]);
    assert_eq!( catalog.len(), 2);
    assert!( catalog.contains("IMPERATRIZ"));
    assert!( !catalog.contains("CAXIAS"));
    assert!( catalog.get("CODÓ").is_none());
    assert!( catalog.load_error().is_none());
}

#[test]
fn test_not_a_collection() {
    let res = BoundaryCatalog::from_geojson_str( r#"{ "type": "Point", "coordinates": [0.0, 0.0] }"#, "NM_MUNICIP");
    assert!( res.is_err());
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("municipios.geojson");
    std::fs::write( &path, BOUNDARIES).unwrap();

    let catalog = BoundaryCatalog::load( &path, "NM_MUNICIP").unwrap();
    assert_eq!( catalog.len(), 2);
}

#[test]
fn test_load_or_empty() {
    let path = PathBuf::from("/nonexistent/municipios.geojson");
    let catalog = BoundaryCatalog::load_or_empty( &path, "NM_MUNICIP");
    println!("load error: {:?}", catalog.load_error());

    assert!( catalog.is_empty());
    assert!( catalog.names().is_empty());
    assert!( catalog.load_error().is_some());
}
