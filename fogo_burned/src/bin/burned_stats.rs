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

use std::{fs, path::PathBuf};
use anyhow::{Result, anyhow};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fogo_burned::{
    load_config, FogoConfig, boundary::boundary_catalog,
    aoi::AoiInput, shp::UploadedFile,
    earth_engine::{EarthEngineConfig, EarthEngineReducer},
    analysis::{AnalysisRequest, Notice, run_analysis},
    presentation::render_text_table
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "compute monthly and yearly burned area statistics for an area of interest")]
pub struct Args {
    /// years to analyze (default from fogo.ron)
    #[arg(short, long, num_args=1.., value_delimiter = ',')]
    pub years: Vec<u16>,

    /// months (1..12) to include. If not set all months are shown
    #[arg(short, long, num_args=1.., value_delimiter = ',')]
    pub months: Vec<u8>,

    /// name of a municipality from the boundary catalog
    #[arg(long)]
    pub municipality: Option<String>,

    /// file containing a GeoJSON Feature, FeatureCollection or geometry
    #[arg(long)]
    pub geojson: Option<PathBuf>,

    /// shapefile components (.shp, .shx, .dbf and optional .prj)
    #[arg(long, num_args=1..)]
    pub shapefile: Vec<PathBuf>,
}

fn read_uploads (paths: &[PathBuf])->Result<Vec<UploadedFile>> {
    let mut files = Vec::with_capacity( paths.len());
    for path in paths {
        let name = path.file_name().and_then( |s| s.to_str()).ok_or_else( || anyhow!("invalid filename {path:?}"))?;
        files.push( UploadedFile::new( name, fs::read( path)?));
    }
    Ok(files)
}

#[tokio::main]
async fn main()->Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    fogo_build::set_bin_context!();

    let args = Args::parse();

    let config: FogoConfig = load_config("fogo.ron")?;
    let ee_config: EarthEngineConfig = load_config("earth_engine.ron")?;
    let reducer = EarthEngineReducer::new( ee_config)?;
    let catalog = boundary_catalog( &config);

    let files = read_uploads( &args.shapefile)?;
    let text = if let Some(path) = &args.geojson { Some( fs::read_to_string( path)?) } else { None };
    let (aoi, ignored_inputs) = AoiInput::select( files, text, args.municipality.clone());

    let years = if args.years.is_empty() { config.default_years.clone() } else { args.years.clone() };
    let request = AnalysisRequest { years, months: args.months.clone(), aoi, ignored_inputs };

    let report = run_analysis( &config, catalog, &reducer, request).await;

    for notice in &report.notices {
        match notice {
            Notice::Success(msg) => println!("[ok]    {msg}"),
            Notice::Info(msg) => println!("[info]  {msg}"),
            Notice::Warning(msg) => println!("[warn]  {msg}"),
            Notice::Error(msg) => println!("[error] {msg}"),
        }
    }

    if let Some(stats) = &report.statistics {
        if let Some(heading) = &report.heading { println!("\n{heading}\n") }
        println!("{}", render_text_table( &stats.table));

        println!("\nTotal anual (km²):");
        for row in &stats.yearly {
            println!("  {}  {:>12.2}", row.year, row.area_km2);
        }
    } else if report.area.is_none() {
        println!("Nenhuma área de estudo definida.");
    }

    if report.notices.iter().any( |n| n.is_error()) {
        std::process::exit(1);
    }
    Ok(())
}
