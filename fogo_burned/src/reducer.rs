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

use async_trait::async_trait;
use geojson::Geometry;

use crate::{FogoConfig, errors::Result};

/// a request for the area of all pixels within `geometry` that burned in `month` of `year`
#[derive(Debug,Clone)]
pub struct BurnedAreaRequest<'a> {
    pub image_asset: &'a str,
    pub band: String,
    pub year: u16,
    pub month: u8,
    pub geometry: &'a Geometry,
    pub scale: f64,
    pub max_pixels: f64,
}

impl<'a> BurnedAreaRequest<'a> {
    pub fn new (config: &'a FogoConfig, geometry: &'a Geometry, year: u16, month: u8)->Self {
        BurnedAreaRequest {
            image_asset: config.image_asset.as_str(),
            band: config.band_name(year),
            year,
            month,
            geometry,
            scale: config.scale,
            max_pixels: config.max_pixels,
        }
    }
}

/// the remote service that performs the masked region reduction
#[async_trait]
pub trait RemoteReducer: Send + Sync {
    /// burned area in square meters. Errors if the service fails or does not return a numeric value
    async fn burned_area (&self, request: &BurnedAreaRequest<'_>)->Result<f64>;

    /// check if we can access the service (e.g. credentials are valid)
    async fn check_access (&self)->Result<()>;
}
