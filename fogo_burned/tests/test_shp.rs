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

use std::{fs, path::Path};
use geojson::Value;
use shapefile::{Point, Polygon, PolygonRing, Polyline, Shape, dbase::{self, FieldName, FieldValue, Record, TableWriterBuilder}};
use fogo_burned::{shp::*, errors::FogoBurnedError};

// run with "cargo test test_xx -- --nocapture"

fn square (x0: f64, y0: f64, d: f64)->Vec<Point> {
    vec![ Point::new(x0,y0), Point::new(x0,y0+d), Point::new(x0+d,y0+d), Point::new(x0+d,y0), Point::new(x0,y0) ]
}

/// write a single polygon shapefile and return its components as uploads
fn polygon_shapefile (dir: &Path, name: Option<&str>)->Vec<UploadedFile> {
    let shp_path = dir.join("area.shp");
    {
        let table = TableWriterBuilder::new().add_character_field( FieldName::try_from("name").unwrap(), 50);
        let mut writer = shapefile::Writer::from_path( &shp_path, table).unwrap();

        let polygon = Polygon::new( PolygonRing::Outer( square( -45.0, -5.0, 1.0)));
        let mut record = Record::default();
        record.insert( "name".to_string(), FieldValue::Character( name.map( |s| s.to_string())));
        writer.write_shape_and_record( &polygon, &record).unwrap();
    }

    let mut files: Vec<UploadedFile> = fs::read_dir(dir).unwrap().filter_map( |e| e.ok()).map( |e| {
        let path = e.path();
        UploadedFile::new( path.file_name().unwrap().to_string_lossy(), fs::read(&path).unwrap())
    }).collect();
    files.sort_by( |a,b| a.name.cmp(&b.name));
    files
}

#[test]
fn test_read_uploaded_polygon() {
    let dir = tempfile::tempdir().unwrap();
    let files = polygon_shapefile( dir.path(), Some("Lago Açu"));
    let names: Vec<&str> = files.iter().map( |f| f.name.as_str()).collect();
    println!("uploaded: {names:?}");

    let (geometry, name) = read_uploaded_shapefile( &files).unwrap();
    println!("geometry: {geometry:?}");

    assert_eq!( name.as_deref(), Some("Lago Açu"));
    let Value::Polygon(rings) = geometry.value else { panic!("not a polygon") };
    assert_eq!( rings.len(), 1);
    assert_eq!( rings[0].len(), 5);
}

#[test]
fn test_unnamed_upload() {
    let dir = tempfile::tempdir().unwrap();
    let files = polygon_shapefile( dir.path(), None);
    let (_, name) = read_uploaded_shapefile( &files).unwrap();
    assert!( name.is_none());
}

#[test]
fn test_incomplete_upload() {
    let dir = tempfile::tempdir().unwrap();
    let files: Vec<UploadedFile> = polygon_shapefile( dir.path(), Some("x")).into_iter()
        .filter( |f| !f.name.ends_with(".dbf"))
        .collect();

    let res = read_uploaded_shapefile( &files);
    println!("incomplete upload: {res:?}");
    assert!( matches!( res, Err(FogoBurnedError::AoiError(_))));
}

#[test]
fn test_missing_shx() {
    let dir = tempfile::tempdir().unwrap();
    let files: Vec<UploadedFile> = polygon_shapefile( dir.path(), Some("x")).into_iter()
        .filter( |f| !f.name.ends_with(".shx"))
        .collect();
    assert!( files.iter().any( |f| f.name == "area.shp"));
    assert!( files.iter().any( |f| f.name == "area.dbf"));

    let res = read_uploaded_shapefile( &files);
    println!("upload without index: {res:?}");
    assert!( matches!( res, Err(FogoBurnedError::AoiError(_))));
}

#[test]
fn test_no_shp_upload() {
    let dir = tempfile::tempdir().unwrap();
    let files = vec![ UploadedFile::new( "area.dbf", vec![0u8;8]), UploadedFile::new( "area.shx", vec![0u8;8]) ];
    let res = store_uploads( dir.path(), &files);
    assert!( matches!( res, Err(FogoBurnedError::AoiError(_))));
}

#[test]
fn test_store_uploads() {
    let dir = tempfile::tempdir().unwrap();
    let files = vec![
        UploadedFile::new( "b.shp", vec![1]), UploadedFile::new( "b.shx", vec![2]), UploadedFile::new( "b.dbf", vec![3]),
        UploadedFile::new( "a.prj", vec![4]),
    ];
    let shp_path = store_uploads( dir.path(), &files).unwrap();
    assert_eq!( shp_path.file_name().unwrap(), "b.shp");
    assert_eq!( fs::read( dir.path().join("b.dbf")).unwrap(), vec![3u8]);
}

#[test]
fn test_shape_conversion() {
    let point = Shape::Point( Point::new( -44.0, -5.0));
    assert_eq!( shape_to_value( &point).unwrap(), Value::Point( vec![-44.0, -5.0]));

    let line = Shape::Polyline( Polyline::new( vec![ Point::new(0.0,0.0), Point::new(1.0,1.0) ]));
    assert!( matches!( shape_to_value( &line).unwrap(), Value::LineString(_)));

    let lines = Shape::Polyline( Polyline::with_parts( vec![
        vec![ Point::new(0.0,0.0), Point::new(1.0,1.0) ],
        vec![ Point::new(2.0,2.0), Point::new(3.0,3.0) ],
    ]));
    assert!( matches!( shape_to_value( &lines).unwrap(), Value::MultiLineString(ref l) if l.len() == 2));

    let polygons = Shape::Polygon( Polygon::with_rings( vec![
        PolygonRing::Outer( square( -46.0, -6.0, 2.0)),
        PolygonRing::Inner( square( -45.5, -5.5, 0.5).into_iter().rev().collect()),
        PolygonRing::Outer( square( -40.0, -6.0, 1.0)),
    ]));
    let Value::MultiPolygon(polys) = shape_to_value( &polygons).unwrap() else { panic!("not a multipolygon") };
    assert_eq!( polys.len(), 2);
    assert_eq!( polys[0].len(), 2); // outer ring with hole
    assert_eq!( polys[1].len(), 1);
}
