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

use serde::{Serialize,Deserialize};

pub mod macros;
pub mod fs;
pub mod geo;
pub mod net;

// a global fn that can be used with serde(skip_serializing_if="fogo_common::is_none")
#[inline] pub fn is_none<T> (opt: &Option<T>)->bool { opt.is_none() }

/// geographic bounds in degrees, ordered as in GeoJSON `bbox` members
#[derive(Debug,Copy,Clone,Serialize,Deserialize,PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64
}

impl BoundingBox {
    pub fn new (west: f64, south: f64, east: f64, north: f64)->Self {
        BoundingBox{ west, south, east, north }
    }

    pub fn to_wsen (&self)->[f64;4] {
        [self.west, self.south, self.east, self.north]
    }

    /// (lon,lat) midpoint. Boxes crossing the antimeridian are not handled
    pub fn center (&self)->(f64,f64) {
        ((self.west + self.east) / 2.0, (self.south + self.north) / 2.0)
    }
}
