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

//! monthly burned area statistics for user defined areas of interest, based on the MapBiomas Fogo
//! monthly burned area image. The raster reduction happens on a remote geospatial analytics service
//! (Earth Engine) - this crate resolves the area of interest, requests one area reduction per (year,month),
//! shapes the results into tables/charts and serves them.

use std::path::PathBuf;
use serde::{Serialize,Deserialize};
use fogo_build::define_load_config;

pub mod errors;
pub use errors::Result;

pub mod months;
pub mod boundary;
pub mod shp;
pub mod aoi;
pub mod reducer;
pub mod earth_engine;
pub mod stats;
pub mod presentation;
pub mod analysis;
pub mod service;

define_load_config!{}

/// label of the (single) burned class in the dataset
pub const FIRE_CLASS: &str = "Fogo";
pub const NO_FIRE_CLASS: &str = "Sem Fogo";

pub const FIRE_COLOR: &str = "#e31a1c";
pub const NO_FIRE_COLOR: &str = "#f0f0f0";

/// display name for areas that come without a name
pub const DEFAULT_AREA_NAME: &str = "Área Carregada";

/// dataset, selection range and reduction parameters
#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct FogoConfig {
    /// the remote image asset id of the monthly burned area collection
    pub image_asset: String,

    /// yearly band names are `<band_prefix><year>`, pixel values are the month (1..12) in which the pixel burned
    pub band_prefix: String,

    pub class_label: String,

    /// inclusive range of selectable years
    pub first_year: u16,
    pub last_year: u16,

    pub default_years: Vec<u16>,
    pub default_months: Vec<u8>,

    /// resolution of the region reduction in meters
    pub scale: f64,

    /// pixel cap of the region reduction
    pub max_pixels: f64,

    /// GeoJSON FeatureCollection with named boundaries
    #[serde(deserialize_with="fogo_build::deserialize_expand_path")]
    pub boundary_path: PathBuf,

    /// feature property that holds the boundary name
    pub boundary_name_property: String,
}

impl FogoConfig {
    pub fn band_name (&self, year: u16)->String {
        format!("{}{}", self.band_prefix, year)
    }

    pub fn available_years (&self)->Vec<u16> {
        (self.first_year..=self.last_year).collect()
    }

    pub fn is_available_year (&self, year: u16)->bool {
        year >= self.first_year && year <= self.last_year
    }
}

impl Default for FogoConfig {
    fn default()->Self {
        FogoConfig {
            image_asset: "projects/mapbiomas-public/assets/brazil/fire/collection4/mapbiomas_fire_collection4_monthly_burned_v1".to_string(),
            band_prefix: "burned_monthly_".to_string(),
            class_label: FIRE_CLASS.to_string(),
            first_year: 2019,
            last_year: 2024,
            default_years: vec![2022],
            default_months: vec![1],
            scale: 30.0,
            max_pixels: 1e13,
            boundary_path: PathBuf::from("assets/municipios_ma.geojson"),
            boundary_name_property: "NM_MUNICIP".to_string(),
        }
    }
}
