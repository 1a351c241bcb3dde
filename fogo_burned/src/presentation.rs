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

//! presentation descriptors for map, charts and table. Rendering itself (map tiles, chart drawing) is
//! done by the client - we only provide data and styling

use std::collections::BTreeMap;
use std::fmt::Write;
use serde::Serialize;
use geojson::Geometry;
use fogo_common::{is_none, geo::bbox_center};

use crate::{
    FogoConfig, FIRE_CLASS, FIRE_COLOR, NO_FIRE_CLASS, NO_FIRE_COLOR, 
    aoi::BoundaryGeometry, months::month_name, stats::{MonthlyRow, YearlyRow}
};

pub const DEFAULT_CENTER: LatLon = LatLon { lat: -5.0, lon: -45.0 };
pub const DEFAULT_ZOOM: u8 = 6;
pub const AOI_ZOOM: u8 = 9;

pub const MAX_HIGHLIGHT: &str = "#d4edda";
pub const MIN_HIGHLIGHT: &str = "#f8d7da";

/// class -> color
pub fn class_colors ()->BTreeMap<String,String> {
    BTreeMap::from([
        (NO_FIRE_CLASS.to_string(), NO_FIRE_COLOR.to_string()),
        (FIRE_CLASS.to_string(), FIRE_COLOR.to_string()),
    ])
}

/* #region map ***************************************************************************************/

#[derive(Debug,Clone,Copy,Serialize,PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug,Clone,Serialize)]
#[serde(tag="type", rename_all="camelCase")]
pub enum MapLayer {
    /// outline of the area of interest
    #[serde(rename_all="camelCase")]
    Boundary { name: String, geometry: Geometry, color: String, width: u32 },

    /// binary raster overlay of the pixels of `band` that burned in `month`
    #[serde(rename_all="camelCase")]
    BurnedMonth { name: String, year: u16, month: u8, band: String, min: u8, max: u8, palette: [String;2] },
}

#[derive(Debug,Clone,Serialize)]
pub struct MapView {
    pub center: LatLon,
    pub zoom: u8,
    pub layers: Vec<MapLayer>,
}

/// one burned-month overlay per (year,month), plus the area outline if we have an area of interest
pub fn build_map (config: &FogoConfig, aoi: Option<&BoundaryGeometry>, years: &[u16], months: &[u8])->MapView {
    let mut layers = Vec::with_capacity( 1 + years.len() * months.len());
    let mut center = DEFAULT_CENTER;
    let mut zoom = DEFAULT_ZOOM;

    if let Some(aoi) = aoi {
        if let Some(c) = bbox_center( &aoi.geometry) {
            center = LatLon { lat: c.y, lon: c.x };
            zoom = AOI_ZOOM;
        }
        layers.push( MapLayer::Boundary { 
            name: "Área de estudo".to_string(), 
            geometry: aoi.geometry.clone(), 
            color: "red".to_string(), 
            width: 2 
        });
    }

    for &year in years {
        for &month in months {
            if let Some(mname) = month_name(month) {
                layers.push( MapLayer::BurnedMonth {
                    name: format!("Fogo {year} - {mname}"),
                    year,
                    month,
                    band: config.band_name(year),
                    min: 0,
                    max: 1,
                    palette: [NO_FIRE_COLOR.to_string(), FIRE_COLOR.to_string()]
                });
            }
        }
    }

    MapView { center, zoom, layers }
}

/* #endregion map */

/* #region charts ************************************************************************************/

#[derive(Debug,Clone,Copy,Serialize,PartialEq)]
#[serde(rename_all="camelCase")]
pub enum AxisType {
    Auto,
    Category,
}

#[derive(Debug,Clone,Serialize)]
pub struct BarPoint {
    pub x: String,
    pub y: f64,
}

/// bars of one class
#[derive(Debug,Clone,Serialize)]
pub struct BarSeries {
    pub name: String,
    pub color: Option<String>,
    pub points: Vec<BarPoint>,
}

/// an animation frame. Static charts have a single frame without label
#[derive(Debug,Clone,Serialize)]
pub struct ChartFrame {
    #[serde(skip_serializing_if="is_none")]
    pub label: Option<String>,
    pub series: Vec<BarSeries>,
}

#[derive(Debug,Clone,Serialize)]
#[serde(rename_all="camelCase")]
pub struct BarChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub x_axis_type: AxisType,
    pub bar_mode: String,
    pub height: u32,
    pub frames: Vec<ChartFrame>,
}

fn series_of<'a> (points: impl Iterator<Item=(&'a str,String,f64)>)->Vec<BarSeries> {
    let colors = class_colors();
    let mut by_class: BTreeMap<&str,Vec<BarPoint>> = BTreeMap::new();
    for (class_label,x,y) in points {
        by_class.entry( class_label).or_default().push( BarPoint{x,y});
    }

    by_class.into_iter().map( |(class_label,points)| {
        BarSeries { name: class_label.to_string(), color: colors.get(class_label).cloned(), points }
    }).collect()
}

/// grouped bars of area by month name, one animation frame per year
pub fn monthly_chart (rows: &[MonthlyRow])->BarChart {
    let mut by_year: BTreeMap<u16,Vec<&MonthlyRow>> = BTreeMap::new();
    for r in rows { by_year.entry(r.year).or_default().push(r); }

    let frames = by_year.into_iter().map( |(year,rows)| {
        let series = series_of( rows.iter().map( |r| (r.class_label.as_str(), r.month_name.to_string(), r.area_km2)));
        ChartFrame { label: Some(year.to_string()), series }
    }).collect();

    BarChart {
        title: "EVOLUÇÃO MENSAL DAS ÁREAS COM FOGO".to_string(),
        x_title: "Mês Nome".to_string(),
        y_title: "Área (km²)".to_string(),
        x_axis_type: AxisType::Auto,
        bar_mode: "group".to_string(),
        height: 500,
        frames
    }
}

/// grouped bars of area by (categorical) year
pub fn yearly_chart (rows: &[YearlyRow])->BarChart {
    let series = series_of( rows.iter().map( |r| (r.class_label.as_str(), r.year.clone(), r.area_km2)));

    BarChart {
        title: "ACUMULADO ANUAL DAS ÁREAS COM FOGO".to_string(),
        x_title: "Ano".to_string(),
        y_title: "Área (km²)".to_string(),
        x_axis_type: AxisType::Category,
        bar_mode: "group".to_string(),
        height: 400,
        frames: vec![ ChartFrame { label: None, series } ]
    }
}

/* #endregion charts */

/* #region table *************************************************************************************/

#[derive(Debug,Clone,Serialize,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct TableCell {
    pub value: f64,
    pub text: String,
    pub is_max: bool,
    pub is_min: bool,

    /// if a cell is both row max and min (e.g. single column) the min highlight is used
    #[serde(skip_serializing_if="is_none")]
    pub background: Option<&'static str>,
}

#[derive(Debug,Clone,Serialize,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct TableRow {
    pub year: u16,
    pub month_name: &'static str,
    pub cells: Vec<TableCell>,
}

/// pivot of (year,month name) rows and class columns
#[derive(Debug,Clone,Serialize,PartialEq)]
pub struct PivotTable {
    pub index: [&'static str;2],
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

/// missing (row,class) values are 0. Each row flags all cells that are equal to its max/min value
pub fn pivot_table (monthly: &[MonthlyRow])->PivotTable {
    let mut columns: Vec<String> = monthly.iter().map( |r| r.class_label.clone()).collect();
    columns.sort();
    columns.dedup();

    let mut values: BTreeMap<(u16,u8),(&'static str,BTreeMap<&str,f64>)> = BTreeMap::new();
    for r in monthly {
        let e = values.entry( (r.year,r.month)).or_insert_with( || (r.month_name, BTreeMap::new()));
        *e.1.entry( r.class_label.as_str()).or_insert(0.0) += r.area_km2;
    }

    let rows = values.into_iter().map( |((year,_),(month_name,class_values))| {
        let row_values: Vec<f64> = columns.iter().map( |c| class_values.get(c.as_str()).copied().unwrap_or(0.0)).collect();
        let max = row_values.iter().copied().fold( f64::NEG_INFINITY, f64::max);
        let min = row_values.iter().copied().fold( f64::INFINITY, f64::min);

        let cells = row_values.into_iter().map( |value| {
            let is_max = value == max;
            let is_min = value == min;
            let background = if is_min { Some(MIN_HIGHLIGHT) } else if is_max { Some(MAX_HIGHLIGHT) } else { None };
            TableCell { value, text: format!("{:.2}", value), is_max, is_min, background }
        }).collect();

        TableRow { year, month_name, cells }
    }).collect();

    PivotTable { index: ["Ano", "Mês Nome"], columns, rows }
}

/// plain text rendering for terminals. Row maxima are marked with '▲', minima with '▼'
pub fn render_text_table (table: &PivotTable)->String {
    let mut headers: Vec<String> = table.index.iter().map( |s| s.to_string()).collect();
    headers.extend( table.columns.iter().cloned());

    let lines: Vec<Vec<String>> = table.rows.iter().map( |row| {
        let mut line = vec![ row.year.to_string(), row.month_name.to_string() ];
        for cell in &row.cells {
            let mark = match (cell.is_max, cell.is_min) {
                (true,true) => " ▲▼",
                (true,false) => " ▲",
                (false,true) => " ▼",
                _ => ""
            };
            line.push( format!("{}{}", cell.text, mark));
        }
        line
    }).collect();

    let mut widths: Vec<usize> = headers.iter().map( |h| h.chars().count()).collect();
    for line in &lines {
        for (i,s) in line.iter().enumerate() {
            widths[i] = widths[i].max( s.chars().count());
        }
    }

    let mut out = String::new();
    write_table_line( &mut out, &headers, &widths);
    let sep: Vec<String> = widths.iter().map( |w| "-".repeat(*w)).collect();
    write_table_line( &mut out, &sep, &widths);
    for line in &lines {
        write_table_line( &mut out, line, &widths);
    }
    out
}

fn write_table_line (out: &mut String, cols: &[String], widths: &[usize]) {
    for (i,(s,w)) in cols.iter().zip(widths.iter()).enumerate() {
        if i > 0 { out.push_str("  ") }
        let pad = w.saturating_sub( s.chars().count());
        if i < 2 { // index columns are left aligned
            let _ = write!( out, "{}{}", s, " ".repeat(pad));
        } else {
            let _ = write!( out, "{}{}", " ".repeat(pad), s);
        }
    }
    out.push('\n');
}

/* #endregion table */
