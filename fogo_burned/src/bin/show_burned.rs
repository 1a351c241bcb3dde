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

use std::{path::PathBuf, sync::Arc};
use anyhow::Result;
use clap::Parser;
use tracing::{info,warn};
use tracing_subscriber::EnvFilter;
use serde::Deserialize;

use fogo_burned::{
    load_config, FogoConfig, boundary::boundary_catalog, reducer::RemoteReducer,
    earth_engine::{EarthEngineConfig, EarthEngineReducer},
    service::{ServerConfig, ServiceState, build_router, spawn_server_task}
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "serve MapBiomas Fogo burned area statistics")]
pub struct Args {
    /// explicit path of the fogo config (default is lookup of "fogo.ron")
    #[arg(long)]
    pub fogo_config: Option<PathBuf>,

    /// explicit path of the Earth Engine config (default is lookup of "earth_engine.ron")
    #[arg(long)]
    pub ee_config: Option<PathBuf>,

    /// explicit path of the server config (default is lookup of "server.ron")
    #[arg(long)]
    pub server_config: Option<PathBuf>,

    /// route prefix
    #[arg(long, default_value = "fogo")]
    pub name: String,
}

fn config_from<C> (path: &Option<PathBuf>, filename: &str)->Result<C> where C: for<'a> Deserialize<'a> {
    let config = if let Some(path) = path { fogo_build::load_config_path( path)? } else { load_config( filename)? };
    Ok(config)
}

#[tokio::main]
async fn main()->Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    fogo_build::set_bin_context!();

    let args = Args::parse();

    let config: FogoConfig = config_from( &args.fogo_config, "fogo.ron")?;
    let ee_config: EarthEngineConfig = config_from( &args.ee_config, "earth_engine.ron")?;
    let server_config: ServerConfig = config_from( &args.server_config, "server.ron")?;

    let reducer = EarthEngineReducer::new( ee_config)?;
    match reducer.check_access().await {
        Ok(()) => info!("Earth Engine access verified"),
        Err(e) => warn!("Earth Engine not accessible, statistics will report zero areas: {e}")
    }

    let catalog = boundary_catalog( &config);
    if let Some(e) = catalog.load_error() {
        warn!("no boundaries available: {e}");
    } else {
        info!("loaded {} boundaries from {:?}", catalog.len(), config.boundary_path);
    }

    let state = ServiceState { config: Arc::new(config), catalog, reducer: Arc::new(reducer) };
    let router = build_router( &args.name, state, server_config.max_upload_size);

    info!("serving on {}/{}", server_config.url(), args.name);
    spawn_server_task( &server_config, router).await?;

    Ok(())
}
