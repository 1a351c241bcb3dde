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

//! resolving the area of interest from one of three mutually exclusive inputs

use serde::Serialize;
use serde_json::Value as JsonValue;
use geojson::{Geometry, Value};

use crate::{
    DEFAULT_AREA_NAME, boundary::BoundaryCatalog, shp::{UploadedFile, read_uploaded_shapefile},
    errors::{aoi_error, parse_error, Result}
};

/// the active area of interest
#[derive(Debug,Clone,Serialize,PartialEq)]
pub struct BoundaryGeometry {
    pub name: String,
    pub geometry: Geometry,
}

/// which input channel an area of interest came from
#[derive(Debug,Clone,Copy,Serialize,PartialEq,Eq)]
#[serde(rename_all="camelCase")]
pub enum AoiSource {
    FileUpload,
    PastedText,
    NamedLookup,
}

impl AoiSource {
    pub fn label (&self)->&'static str {
        match self {
            AoiSource::FileUpload => "upload de shapefile",
            AoiSource::PastedText => "GeoJSON inserido",
            AoiSource::NamedLookup => "seleção de município",
        }
    }
}

#[derive(Debug,Clone)]
pub enum AoiInput {
    FileUpload(Vec<UploadedFile>),
    PastedText(String),
    NamedLookup(String),
    None
}

impl AoiInput {
    /// pick the first non-empty input in fixed precedence order: upload, pasted text, named lookup.
    /// Also returns the sources of non-empty inputs that were ignored
    pub fn select (files: Vec<UploadedFile>, text: Option<String>, name: Option<String>)->(AoiInput,Vec<AoiSource>) {
        let text = text.filter( |s| !s.trim().is_empty());
        let name = name.filter( |s| !s.is_empty());

        let mut candidates: Vec<AoiInput> = Vec::with_capacity(3);
        if !files.is_empty() { candidates.push( AoiInput::FileUpload(files)) }
        if let Some(text) = text { candidates.push( AoiInput::PastedText(text)) }
        if let Some(name) = name { candidates.push( AoiInput::NamedLookup(name)) }

        let mut it = candidates.into_iter();
        let selected = it.next().unwrap_or(AoiInput::None);
        let ignored = it.filter_map( |c| c.source()).collect();

        (selected, ignored)
    }

    pub fn source (&self)->Option<AoiSource> {
        match self {
            AoiInput::FileUpload(_) => Some(AoiSource::FileUpload),
            AoiInput::PastedText(_) => Some(AoiSource::PastedText),
            AoiInput::NamedLookup(_) => Some(AoiSource::NamedLookup),
            AoiInput::None => None
        }
    }

    pub fn is_none (&self)->bool { matches!(self, AoiInput::None) }
}

/// resolve the area of interest. `Ok(None)` means there was no input
pub fn resolve_aoi (input: &AoiInput, catalog: &BoundaryCatalog)->Result<Option<BoundaryGeometry>> {
    match input {
        AoiInput::FileUpload(files) => {
            let (geometry, name) = read_uploaded_shapefile( files)?;
            let name = name.unwrap_or_else( || DEFAULT_AREA_NAME.to_string());
            Ok( Some( BoundaryGeometry { name, geometry }) )
        }
        AoiInput::PastedText(text) => {
            let geometry = parse_geojson_text( text)?;
            Ok( Some( BoundaryGeometry { name: DEFAULT_AREA_NAME.to_string(), geometry }) )
        }
        AoiInput::NamedLookup(name) => {
            let geometry = catalog.get( name).ok_or( aoi_error!("unknown municipality {name}"))?;
            check_supported( geometry)?;
            Ok( Some( BoundaryGeometry { name: name.clone(), geometry: geometry.clone() }) )
        }
        AoiInput::None => Ok(None)
    }
}

/// accepts a bare Geometry, a Feature (we use its `geometry`) or a FeatureCollection (we use the geometry
/// of the first feature)
pub fn parse_geojson_text (text: &str)->Result<Geometry> {
    let json: JsonValue = serde_json::from_str( text)?;
    let obj = json.as_object().ok_or( parse_error!("GeoJSON is not an object"))?;

    let geometry_json = if let Some(geometry) = obj.get("geometry") {
        geometry
    } else if obj.get("type").and_then(|t| t.as_str()) == Some("FeatureCollection") {
        obj.get("features")
            .and_then( |fs| fs.as_array())
            .and_then( |fs| fs.first())
            .and_then( |f| f.get("geometry"))
            .ok_or( parse_error!("FeatureCollection has no feature geometry"))?
    } else {
        &json
    };

    let geometry = Geometry::from_json_value( geometry_json.clone())?;
    check_supported( &geometry)?;
    Ok(geometry)
}

/// the remote reduction needs a single (possibly multi-part) geometry
fn check_supported (geometry: &Geometry)->Result<()> {
    if let Value::GeometryCollection(_) = geometry.value {
        Err( aoi_error!("GeometryCollection is not supported as area of interest, use a (Multi)Polygon"))
    } else {
        Ok(())
    }
}
