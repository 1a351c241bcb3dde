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

//! helpers for GeoJSON geometries in geographic (WGS84 degree) coordinates.
//! We keep geometries as [geojson::Geometry] (the exchange format of the remote service and the browser)
//! and convert to [geo] types where we need algorithms.

use geo::BoundingRect;
use geojson::{Geometry, Value};

use crate::BoundingBox;

pub type GeoCoord = geo::Coord<f64>;

/// the GeoJSON type name of a geometry value
pub fn geometry_type_name (value: &Value)->&'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

/// does the geometry enclose an area
pub fn is_areal (value: &Value)->bool {
    matches!( value, Value::Polygon(_) | Value::MultiPolygon(_))
}

pub fn to_geo_geometry (geometry: &Geometry)->Result<geo_types::Geometry<f64>,geojson::Error> {
    geo_types::Geometry::<f64>::try_from( geometry.value.clone())
}

/// bounding box of a geometry. Returns `None` for empty or invalid geometries
pub fn bounding_box (geometry: &Geometry)->Option<BoundingBox> {
    to_geo_geometry( geometry).ok()
        .and_then( |g| g.bounding_rect())
        .map( |r| BoundingBox::new( r.min().x, r.min().y, r.max().x, r.max().y))
}

/// (lon,lat) center of the bounding box of a geometry
pub fn bbox_center (geometry: &Geometry)->Option<GeoCoord> {
    bounding_box( geometry).map( |bbox| {
        let (x,y) = bbox.center();
        GeoCoord { x, y }
    })
}
