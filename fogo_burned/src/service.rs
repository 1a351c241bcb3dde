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

//! HTTP interface. All routes are under `/<name>` (default "fogo"):
//! 
//!    GET  /fogo/years                  selectable and default years
//!    GET  /fogo/months                 selectable months with names, default months
//!    GET  /fogo/municipalities         alphabetically sorted boundary names
//!    GET  /fogo/municipalities/{name}  boundary geometry as GeoJSON
//!    POST /fogo/analysis               multipart form: years, months, municipality, geojson, shapefile parts
//!    POST /fogo/analysis-json          JSON body (same as multipart, without uploads)
//! 
//! Analysis responses are always `200 OK` with an `AnalysisReport` that lists problems as notices.

use std::{net::SocketAddr, sync::Arc};
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, Path as AxumPath, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Serialize,Deserialize};
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::{info,error};

use crate::{
    FogoConfig, aoi::AoiInput, boundary::BoundaryCatalog, months::month_options, reducer::RemoteReducer,
    shp::UploadedFile, analysis::{AnalysisRequest, run_analysis}
};

/// request body cap of the analysis routes (shapefile uploads)
pub const DEFAULT_MAX_UPLOAD_SIZE: usize = 200 * 1024 * 1024;

fn default_max_upload_size()->usize { DEFAULT_MAX_UPLOAD_SIZE }

#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct ServerConfig {
    pub sock_addr: SocketAddr,

    /// max size in bytes of analysis request bodies
    #[serde(default="default_max_upload_size")]
    pub max_upload_size: usize,
}

impl ServerConfig {
    pub fn url (&self)->String {
        format!("http://{}", self.sock_addr)
    }
}

/// serve `router` on the configured socket address
pub fn spawn_server_task (config: &ServerConfig, router: Router) -> JoinHandle<()> {
    let sock_addr = config.sock_addr;

    tokio::spawn( async move {
        match tokio::net::TcpListener::bind(sock_addr).await {
            Ok(listener) => {
                if let Err(e) = axum::serve( listener, router).await {
                    error!("server terminated: {e}");
                }
            }
            Err(e) => error!("failed to bind {sock_addr}: {e}")
        }
    })
}

/// shared (read-only) service state
#[derive(Clone)]
pub struct ServiceState {
    pub config: Arc<FogoConfig>,
    pub catalog: &'static BoundaryCatalog,
    pub reducer: Arc<dyn RemoteReducer>,
}

#[derive(Serialize,Debug)]
pub struct YearsResponse {
    pub available: Vec<u16>,
    pub default: Vec<u16>,
}

#[derive(Serialize,Debug)]
pub struct MonthOption {
    pub month: u8,
    pub name: &'static str,
}

#[derive(Serialize,Debug)]
pub struct MonthsResponse {
    pub available: Vec<MonthOption>,
    pub default: Vec<u8>,
}

#[derive(Serialize,Debug)]
pub struct MunicipalitiesResponse {
    pub names: Vec<String>,
    #[serde(skip_serializing_if="fogo_common::is_none")]
    pub error: Option<String>,
}

/// analysis request without uploads
#[derive(Deserialize,Debug,Default)]
#[serde(default)]
pub struct AnalysisQuery {
    pub years: Vec<u16>,
    pub months: Vec<u8>,
    pub municipality: Option<String>,
    pub geojson: Option<String>,
}

impl AnalysisQuery {
    pub fn into_request (self, files: Vec<UploadedFile>)->AnalysisRequest {
        let (aoi, ignored_inputs) = AoiInput::select( files, self.geojson, self.municipality);
        AnalysisRequest { years: self.years, months: self.months, aoi, ignored_inputs }
    }
}

/// `max_upload_size` replaces the default body limit of axum extractors (2MB), which is too small for
/// detailed boundary shapefiles
pub fn build_router (name: &str, state: ServiceState, max_upload_size: usize)->Router {
    Router::new()
        .route( &format!("/{name}/years"), get( years_handler))
        .route( &format!("/{name}/months"), get( months_handler))
        .route( &format!("/{name}/municipalities"), get( municipalities_handler))
        .route( &format!("/{name}/municipalities/{{name}}"), get( municipality_handler))
        .route( &format!("/{name}/analysis"), post( analysis_handler))
        .route( &format!("/{name}/analysis-json"), post( analysis_json_handler))
        .layer( DefaultBodyLimit::max( max_upload_size))
        .layer( TraceLayer::new_for_http())
        .with_state( state)
}

async fn years_handler (State(state): State<ServiceState>)->Json<YearsResponse> {
    Json( YearsResponse { available: state.config.available_years(), default: state.config.default_years.clone() })
}

async fn months_handler (State(state): State<ServiceState>)->Json<MonthsResponse> {
    let available = month_options().into_iter().map( |(month,name)| MonthOption{month,name}).collect();
    Json( MonthsResponse { available, default: state.config.default_months.clone() })
}

async fn municipalities_handler (State(state): State<ServiceState>)->Json<MunicipalitiesResponse> {
    let names = state.catalog.names().into_iter().map( |s| s.to_string()).collect();
    Json( MunicipalitiesResponse { names, error: state.catalog.load_error().map( |s| s.to_string()) })
}

async fn municipality_handler (State(state): State<ServiceState>, AxumPath(name): AxumPath<String>)->Response {
    match state.catalog.get( &name) {
        Some(geometry) => Json( geometry.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, format!("unknown municipality {name}")).into_response()
    }
}

async fn analysis_json_handler (State(state): State<ServiceState>, Json(query): Json<AnalysisQuery>)->Response {
    let request = query.into_request( Vec::new());
    let report = run_analysis( &state.config, state.catalog, state.reducer.as_ref(), request).await;
    Json( report).into_response()
}

async fn analysis_handler (State(state): State<ServiceState>, multipart: Multipart)->Response {
    match read_multipart_query( multipart).await {
        Ok((query,files)) => {
            let request = query.into_request( files);
            let report = run_analysis( &state.config, state.catalog, state.reducer.as_ref(), request).await;
            Json( report).into_response()
        }
        Err(msg) => (StatusCode::BAD_REQUEST, msg).into_response()
    }
}

/// fields are `years` and `months` (repeated or comma separated), `municipality`, `geojson`.
/// Every part with a filename is taken as a shapefile component
async fn read_multipart_query (mut multipart: Multipart)->Result<(AnalysisQuery,Vec<UploadedFile>),String> {
    let mut query = AnalysisQuery::default();
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err( |e| e.to_string())? {
        let field_name = field.name().unwrap_or_default().to_string();

        if let Some(file_name) = field.file_name().map( |s| s.to_string()) {
            let data = field.bytes().await.map_err( |e| e.to_string())?;
            if !data.is_empty() {
                files.push( UploadedFile::new( file_name, data.to_vec()));
            }
            continue;
        }

        let text = field.text().await.map_err( |e| e.to_string())?;
        match field_name.as_str() {
            "years" => query.years.extend( parse_list::<u16>( &text)?),
            "months" => query.months.extend( parse_list::<u8>( &text)?),
            "municipality" => query.municipality = Some(text),
            "geojson" => query.geojson = Some(text),
            other => info!("ignoring unknown form field {other}")
        }
    }

    Ok( (query,files) )
}

fn parse_list<T: std::str::FromStr> (s: &str)->Result<Vec<T>,String> {
    s.split(',')
        .map( |e| e.trim())
        .filter( |e| !e.is_empty())
        .map( |e| e.parse::<T>().map_err( |_| format!("invalid value '{e}'")))
        .collect()
}
