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

//! reading area of interest geometries from (uploaded) ESRI shapefiles

use std::path::{Path,PathBuf};
use geojson::{Geometry, Value};
use regex::Regex;
use lazy_static::lazy_static;
use shapefile::{Shape, PolygonRing, dbase::{FieldValue, Record}};
use tracing::debug;
use fogo_common::fs::{filestem, has_extension, matching_files_in_dir, sanitized_filename, set_filepath_contents};

use crate::errors::{aoi_error, Result};

lazy_static! {
    static ref SHP_RE: Regex = Regex::new(r"(?i).*\.shp$").unwrap();
}

/// the shapefile components we need
pub const REQUIRED_EXTENSIONS: [&str;3] = ["shp", "shx", "dbf"];

/// attribute that holds the area name
pub const NAME_ATTRIBUTE: &str = "name";

/// a file received from a client
#[derive(Debug,Clone)]
pub struct UploadedFile {
    pub name: String,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn new (name: impl ToString, data: Vec<u8>)->Self {
        UploadedFile { name: name.to_string(), data }
    }
}

/// store uploaded files in `dir` and return the path of the first (by name) `.shp` file.
/// Fails if there is no `.shp` file or if its `.shx` or `.dbf` companion is missing
pub fn store_uploads (dir: &Path, files: &[UploadedFile])->Result<PathBuf> {
    for file in files {
        if let Some(fname) = sanitized_filename( &file.name) {
            set_filepath_contents( dir, fname, &file.data)?;
        }
    }

    let shp_path = matching_files_in_dir( &dir, &SHP_RE)?.into_iter().next()
        .ok_or( aoi_error!("no .shp file in upload"))?;
    check_components( &shp_path)?;

    Ok(shp_path)
}

fn check_components (shp_path: &Path)->Result<()> {
    let stem = filestem( &shp_path).ok_or( aoi_error!("invalid shapefile name {:?}", shp_path))?;
    let dir = shp_path.parent().ok_or( aoi_error!("no dir for {:?}", shp_path))?;

    for ext in &REQUIRED_EXTENSIONS[1..] {
        let found = std::fs::read_dir(dir)?.filter_map( |e| e.ok()).any( |e| {
            let p = e.path();
            filestem( &p) == Some(stem) && has_extension( &p, ext)
        });
        if !found {
            return Err( aoi_error!("incomplete shapefile upload, missing {stem}.{ext}"))
        }
    }
    Ok(())
}

/// read the first shape of a shapefile and the optional name attribute of its record
pub fn read_first_shape<P: AsRef<Path>> (shp_path: P)->Result<(Geometry,Option<String>)> {
    let mut reader = shapefile::Reader::from_path( shp_path.as_ref())?;

    let (shape,record) = reader.iter_shapes_and_records().next()
        .ok_or( aoi_error!("shapefile has no shapes"))??;
    debug!("read first shape of {:?}: {:?}", shp_path.as_ref(), shape.shapetype());

    let value = shape_to_value( &shape)?;
    Ok( (Geometry::new(value), record_name( &record)) )
}

/// the uploaded files are only kept for the duration of this call
pub fn read_uploaded_shapefile (files: &[UploadedFile])->Result<(Geometry,Option<String>)> {
    let dir = tempfile::tempdir()?;
    let shp_path = store_uploads( dir.path(), files)?;
    read_first_shape( &shp_path)
}

fn record_name (record: &Record)->Option<String> {
    match record.get( NAME_ATTRIBUTE) {
        Some(FieldValue::Character(Some(s))) | Some(FieldValue::Memo(s)) => {
            let s = s.trim();
            if s.is_empty() { None } else { Some(s.to_string()) }
        }
        _ => None
    }
}

pub fn shape_to_value (shape: &Shape)->Result<Value> {
    match shape {
        Shape::Polygon(p) => Ok( rings_to_value( p.rings(), |p| vec![p.x, p.y])),
        Shape::PolygonM(p) => Ok( rings_to_value( p.rings(), |p| vec![p.x, p.y])),
        Shape::PolygonZ(p) => Ok( rings_to_value( p.rings(), |p| vec![p.x, p.y])),

        Shape::Polyline(p) => Ok( parts_to_value( p.parts(), |p| vec![p.x, p.y])),
        Shape::PolylineM(p) => Ok( parts_to_value( p.parts(), |p| vec![p.x, p.y])),
        Shape::PolylineZ(p) => Ok( parts_to_value( p.parts(), |p| vec![p.x, p.y])),

        Shape::Point(p) => Ok( Value::Point( vec![p.x, p.y])),
        Shape::PointM(p) => Ok( Value::Point( vec![p.x, p.y])),
        Shape::PointZ(p) => Ok( Value::Point( vec![p.x, p.y])),

        Shape::Multipoint(p) => Ok( Value::MultiPoint( p.points().iter().map(|p| vec![p.x, p.y]).collect())),
        Shape::MultipointM(p) => Ok( Value::MultiPoint( p.points().iter().map(|p| vec![p.x, p.y]).collect())),
        Shape::MultipointZ(p) => Ok( Value::MultiPoint( p.points().iter().map(|p| vec![p.x, p.y]).collect())),

        other => Err( aoi_error!("unsupported shape type {:?}", other.shapetype()))
    }
}

/// each outer ring starts a new polygon, inner rings are holes of the preceding outer ring.
/// A single polygon is returned as `Polygon`, otherwise as `MultiPolygon`
fn rings_to_value<P> (rings: &[PolygonRing<P>], xy: impl Fn(&P)->Vec<f64>)->Value {
    let mut polygons: Vec<Vec<Vec<Vec<f64>>>> = Vec::new();

    for ring in rings {
        let positions: Vec<Vec<f64>> = ring.points().iter().map(&xy).collect();
        match ring {
            PolygonRing::Outer(_) => polygons.push( vec![positions]),
            PolygonRing::Inner(_) => {
                if let Some(last) = polygons.last_mut() {
                    last.push( positions)
                } else { // no preceding outer ring
                    polygons.push( vec![positions])
                }
            }
        }
    }

    if polygons.len() == 1 {
        Value::Polygon( polygons.remove(0))
    } else {
        Value::MultiPolygon( polygons)
    }
}

fn parts_to_value<P> (parts: &[Vec<P>], xy: impl Fn(&P)->Vec<f64>)->Value {
    let mut lines: Vec<Vec<Vec<f64>>> = parts.iter().map( |part| part.iter().map(&xy).collect()).collect();
    if lines.len() == 1 {
        Value::LineString( lines.remove(0))
    } else {
        Value::MultiLineString( lines)
    }
}
