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

//! burned area statistics: flat per (year,month) records and their monthly/yearly aggregations

use std::collections::BTreeMap;
use serde::{Serialize,Deserialize};
use geojson::Geometry;
use tracing::{info,warn};

use crate::{FogoConfig, months::{MONTHS, month_name}, reducer::{BurnedAreaRequest, RemoteReducer}};

pub const SQM_PER_SQKM: f64 = 1e6;

#[derive(Debug,Clone,Serialize,Deserialize,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct StatRecord {
    pub year: u16,
    pub month: u8,
    pub class_label: String,
    pub area_km2: f64,
}

#[derive(Debug,Clone,Serialize,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct MonthlyRow {
    pub year: u16,
    pub month: u8,
    pub month_name: &'static str,
    pub class_label: String,
    pub area_km2: f64,
}

/// year is a display string so that charts use a categorical axis
#[derive(Debug,Clone,Serialize,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct YearlyRow {
    pub year: String,
    pub class_label: String,
    pub area_km2: f64,
}

pub fn round2 (x: f64)->f64 {
    (x * 100.0).round() / 100.0
}

pub fn sqm_to_sqkm (sqm: f64)->f64 {
    sqm / SQM_PER_SQKM
}

/// request the burned area for all 12 months of each year in `years`. Requests are sequential.
/// Each failed request (service error, missing or non-numeric value) results in a zero area for its month
/// and does not affect the other months
pub async fn compute_stat_records (reducer: &dyn RemoteReducer, config: &FogoConfig, geometry: &Geometry, years: &[u16])->Vec<StatRecord> {
    let mut records = Vec::with_capacity( years.len() * 12);

    for &year in years {
        for month in MONTHS {
            let request = BurnedAreaRequest::new( config, geometry, year, month);
            let area_km2 = match reducer.burned_area( &request).await {
                Ok(sqm) if sqm.is_finite() => round2( sqm_to_sqkm( sqm)),
                Ok(sqm) => {
                    warn!("non-finite area for {year}-{month}: {sqm}, using 0");
                    0.0
                }
                Err(e) => {
                    warn!("no area for {year}-{month}: {e}, using 0");
                    0.0
                }
            };
            records.push( StatRecord { year, month, class_label: config.class_label.clone(), area_km2 });
        }
        info!("computed burned area statistics for {year}");
    }

    records
}

/// sum records by (year,month,class) and keep the rows for `months`. An empty `months` selection keeps all months.
/// Rows are sorted by (year,month,class)
pub fn aggregate_monthly (records: &[StatRecord], months: &[u8])->Vec<MonthlyRow> {
    let mut sums: BTreeMap<(u16,u8,&str),f64> = BTreeMap::new();
    for r in records {
        *sums.entry( (r.year, r.month, r.class_label.as_str())).or_insert(0.0) += r.area_km2;
    }

    sums.into_iter()
        .filter( |((_,month,_),_)| months.is_empty() || months.contains(month))
        .filter_map( |((year,month,class_label),area_km2)| {
            month_name(month).map( |month_name| MonthlyRow { year, month, month_name, class_label: class_label.to_string(), area_km2 })
        })
        .collect()
}

/// sum monthly rows by (year,class). Rows are sorted by (year,class)
pub fn aggregate_yearly (monthly: &[MonthlyRow])->Vec<YearlyRow> {
    let mut sums: BTreeMap<(u16,&str),f64> = BTreeMap::new();
    for r in monthly {
        *sums.entry( (r.year, r.class_label.as_str())).or_insert(0.0) += r.area_km2;
    }

    sums.into_iter()
        .map( |((year,class_label),area_km2)| YearlyRow { year: year.to_string(), class_label: class_label.to_string(), area_km2 })
        .collect()
}
