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

use geojson::Value;
use fogo_burned::{
    DEFAULT_AREA_NAME, aoi::*, boundary::BoundaryCatalog, shp::UploadedFile, errors::FogoBurnedError
};

// run with "cargo test test_xx -- --nocapture"

const CATALOG: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    { "type": "Feature", "properties": { "NM_MUNICIP": "SÃO LUÍS" },
      "geometry": { "type": "Polygon", "coordinates": [[[-44.4,-2.6],[-44.1,-2.6],[-44.1,-2.4],[-44.4,-2.4],[-44.4,-2.6]]] } },
    { "type": "Feature", "properties": { "NM_MUNICIP": "BALSAS" },
      "geometry": { "type": "Polygon", "coordinates": [[[-46.5,-8.0],[-46.0,-8.0],[-46.0,-7.5],[-46.5,-7.5],[-46.5,-8.0]]] } }
  ]
}"#;

const FEATURE: &str = r#"{ "type": "Feature", "properties": {},
  "geometry": { "type": "Polygon", "coordinates": [[[-45.0,-5.0],[-44.0,-5.0],[-44.0,-4.0],[-45.0,-4.0],[-45.0,-5.0]]] } }"#;

fn catalog()->BoundaryCatalog {
    BoundaryCatalog::from_geojson_str( CATALOG, "NM_MUNICIP").unwrap()
}

fn upload()->Vec<UploadedFile> {
    vec![ UploadedFile::new( "area.shp", vec![0u8;4]) ]
}

#[test]
fn test_select_precedence() {
    let (input, ignored) = AoiInput::select( upload(), Some(FEATURE.to_string()), Some("BALSAS".to_string()));
    assert_eq!( input.source(), Some(AoiSource::FileUpload));
    assert_eq!( ignored, vec![AoiSource::PastedText, AoiSource::NamedLookup]);

    let (input, ignored) = AoiInput::select( Vec::new(), Some(FEATURE.to_string()), Some("BALSAS".to_string()));
    assert_eq!( input.source(), Some(AoiSource::PastedText));
    assert_eq!( ignored, vec![AoiSource::NamedLookup]);

    // blank text does not count as input
    let (input, ignored) = AoiInput::select( Vec::new(), Some("  \n".to_string()), Some("BALSAS".to_string()));
    assert_eq!( input.source(), Some(AoiSource::NamedLookup));
    assert!( ignored.is_empty());

    let (input, ignored) = AoiInput::select( Vec::new(), None, Some(String::new()));
    assert!( input.is_none());
    assert!( ignored.is_empty());
}

#[test]
fn test_pasted_feature() {
    let (input, _) = AoiInput::select( Vec::new(), Some(FEATURE.to_string()), None);
    let aoi = resolve_aoi( &input, &catalog()).unwrap().unwrap();
    println!("aoi = {aoi:?}");

    assert_eq!( aoi.name, DEFAULT_AREA_NAME);
    assert!( matches!( aoi.geometry.value, Value::Polygon(_)));
}

#[test]
fn test_pasted_feature_collection() {
    let text = format!(r#"{{ "type": "FeatureCollection", "features": [ {FEATURE}, {FEATURE} ] }}"#);
    let geometry = parse_geojson_text( &text).unwrap();
    let Value::Polygon(rings) = geometry.value else { panic!("not a polygon") };
    assert_eq!( rings[0][0], vec![-45.0, -5.0]);
}

#[test]
fn test_pasted_bare_geometry() {
    let geometry = parse_geojson_text( r#"{ "type": "Point", "coordinates": [-44.3, -2.5] }"#).unwrap();
    assert_eq!( geometry.value, Value::Point( vec![-44.3, -2.5]));
}

#[test]
fn test_malformed_text() {
    assert!( parse_geojson_text( "{ not json").is_err());
    assert!( parse_geojson_text( "[1,2,3]").is_err());
    assert!( parse_geojson_text( r#"{ "type": "FeatureCollection", "features": [] }"#).is_err());
    assert!( parse_geojson_text( r#"{ "type": "Polygon", "coordinates": "nope" }"#).is_err());

    let (input, _) = AoiInput::select( Vec::new(), Some("{ not json".to_string()), Some("BALSAS".to_string()));
    assert!( resolve_aoi( &input, &catalog()).is_err()); // the named lookup is not used as fallback
}

#[test]
fn test_geometry_collection_rejected() {
    let collection = r#"{ "type": "GeometryCollection", "geometries": [
        { "type": "Point", "coordinates": [-44.3, -2.5] },
        { "type": "Polygon", "coordinates": [[[-45.0,-5.0],[-44.0,-5.0],[-44.0,-4.0],[-45.0,-5.0]]] }
    ] }"#;
    let res = parse_geojson_text( collection);
    assert!( matches!( res, Err(FogoBurnedError::AoiError(_))));

    let feature = format!(r#"{{ "type": "Feature", "properties": {{}}, "geometry": {collection} }}"#);
    let (input, _) = AoiInput::select( Vec::new(), Some(feature), None);
    assert!( resolve_aoi( &input, &catalog()).is_err());
}

#[test]
fn test_named_lookup() {
    let catalog = catalog();

    let (input, _) = AoiInput::select( Vec::new(), None, Some("SÃO LUÍS".to_string()));
    let aoi = resolve_aoi( &input, &catalog).unwrap().unwrap();
    assert_eq!( aoi.name, "SÃO LUÍS");
    assert_eq!( &aoi.geometry, catalog.get("SÃO LUÍS").unwrap());

    let (input, _) = AoiInput::select( Vec::new(), None, Some("São Luís".to_string())); // exact match only
    let res = resolve_aoi( &input, &catalog);
    assert!( matches!( res, Err(FogoBurnedError::AoiError(_))));
}

#[test]
fn test_no_input() {
    let (input, _) = AoiInput::select( Vec::new(), None, None);
    assert!( resolve_aoi( &input, &catalog()).unwrap().is_none());
}

#[test]
fn test_broken_upload() {
    let (input, _) = AoiInput::select( upload(), None, None);
    let res = resolve_aoi( &input, &catalog());
    println!("broken upload: {res:?}");
    assert!( res.is_err());
}
