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

//! named boundaries (municipalities) that can be selected as area of interest. The catalog is loaded once
//! from a GeoJSON FeatureCollection and is read-only afterwards

use std::{collections::BTreeMap, path::Path, sync::OnceLock};
use geojson::{GeoJson, Geometry};
use tracing::{info,warn};
use fogo_common::fs::filepath_contents_as_string;

use crate::{FogoConfig, errors::{parse_error, Result}};

#[derive(Debug,Default)]
pub struct BoundaryCatalog {
    map: BTreeMap<String,Geometry>,

    /// set if the catalog could not be loaded, in which case it is empty
    load_error: Option<String>,
}

impl BoundaryCatalog {
    /// parse a FeatureCollection. Features without a string `name_property` or without geometry are skipped,
    /// the last feature wins for duplicated names
    pub fn from_geojson_str (s: &str, name_property: &str)->Result<Self> {
        let geojson: GeoJson = s.parse()?;
        let GeoJson::FeatureCollection(fc) = geojson else {
            return Err( parse_error!("boundary dataset is not a FeatureCollection"))
        };

        let mut map = BTreeMap::new();
        for feature in fc.features.into_iter() {
            let name = feature.property(name_property).and_then(|v| v.as_str()).map(|s| s.to_string());
            if let (Some(name), Some(geometry)) = (name, feature.geometry) {
                if !name.is_empty() {
                    map.insert( name, geometry);
                }
            }
        }

        Ok( BoundaryCatalog { map, load_error: None } )
    }

    pub fn load<P: AsRef<Path>> (path: &P, name_property: &str)->Result<Self> {
        let s = filepath_contents_as_string( path)?;
        Self::from_geojson_str( &s, name_property)
    }

    /// this does not fail - load errors result in an empty catalog that remembers the error
    pub fn load_or_empty<P: AsRef<Path>> (path: &P, name_property: &str)->Self {
        match Self::load( path, name_property) {
            Ok(catalog) => {
                info!("loaded {} boundaries from {:?}", catalog.len(), path.as_ref());
                catalog
            }
            Err(e) => {
                warn!("failed to load boundary dataset {:?}: {}", path.as_ref(), e);
                BoundaryCatalog { map: BTreeMap::new(), load_error: Some(e.to_string()) }
            }
        }
    }

    /// boundary names in alphabetical order
    pub fn names (&self)->Vec<&str> {
        self.map.keys().map( |k| k.as_str()).collect()
    }

    /// exact name match
    pub fn get (&self, name: &str)->Option<&Geometry> {
        self.map.get(name)
    }

    pub fn contains (&self, name: &str)->bool {
        self.map.contains_key(name)
    }

    pub fn len (&self)->usize { self.map.len() }

    pub fn is_empty (&self)->bool { self.map.is_empty() }

    pub fn load_error (&self)->Option<&str> { self.load_error.as_deref() }
}

static BOUNDARY_CATALOG: OnceLock<BoundaryCatalog> = OnceLock::new();

/// the process-wide catalog. The first call loads it from the configured dataset, subsequent calls
/// return the same instance (there is no invalidation)
pub fn boundary_catalog (config: &FogoConfig)->&'static BoundaryCatalog {
    BOUNDARY_CATALOG.get_or_init( || BoundaryCatalog::load_or_empty( &config.boundary_path, &config.boundary_name_property))
}
