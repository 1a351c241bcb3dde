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

//! [RemoteReducer] implementation for the Earth Engine REST API. Computations are sent as serialized
//! expression graphs to
//! 
//!    POST <base_url>/v1/projects/<project>/value:compute
//! 
//! with a body of `{"expression": {"result": "0", "values": {"0": <value-node>}}}`, where value nodes are
//! either `{"constantValue": ..}` or `{"functionInvocationValue": {"functionName": .., "arguments": {..}}}`.
//! The response is `{"result": <value>}`

use std::time::Duration;
use async_trait::async_trait;
use serde::{Serialize,Deserialize};
use serde_json::{json, Value as JsonValue, Map as JsonMap};
use reqwest::Client;
use geojson::{Geometry, Value};
use tracing::debug;
use fogo_common::{geo::{geometry_type_name, is_areal}, net::{create_client, json_headers, post_json_query}};

use crate::{reducer::{BurnedAreaRequest, RemoteReducer}, errors::{op_failed, FogoBurnedError, Result}};

#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct EarthEngineConfig {
    pub base_url: String,

    /// the cloud project that is billed for computations
    pub project: String,

    /// OAuth2 access token. Use a "$ENV_VAR" reference instead of storing it in the config file
    #[serde(deserialize_with="fogo_build::deserialize_env_string")]
    pub access_token: String,

    pub timeout: Duration,
}

#[derive(Deserialize,Debug)]
struct ComputeValueResponse {
    result: JsonValue
}

pub struct EarthEngineReducer {
    config: EarthEngineConfig,
    client: Client,
}

impl EarthEngineReducer {
    pub fn new (config: EarthEngineConfig)->Result<Self> {
        let client = create_client( Some(config.timeout))?;
        Ok( EarthEngineReducer { config, client } )
    }

    pub fn compute_url (&self)->String {
        format!("{}/v1/projects/{}/value:compute", self.config.base_url.trim_end_matches('/'), self.config.project)
    }

    async fn compute_value (&self, expression: JsonValue)->Result<JsonValue> {
        let token = if self.config.access_token.is_empty() { None } else { Some(self.config.access_token.as_str()) };
        let headers = json_headers( token)?;
        let body = json!({ "expression": expression });

        let response: ComputeValueResponse = post_json_query( &self.client, &self.compute_url(), headers, &body).await?;
        Ok( response.result )
    }
}

#[async_trait]
impl RemoteReducer for EarthEngineReducer {
    async fn burned_area (&self, request: &BurnedAreaRequest<'_>)->Result<f64> {
        let expression = burned_area_expression( request)?;
        let result = self.compute_value( expression).await?;
        debug!("{} month {}: {}", request.band, request.month, result);
        extract_band_value( &result, &request.band)
    }

    async fn check_access (&self)->Result<()> {
        let result = self.compute_value( expression( constant(1))).await?;
        if result.as_i64() == Some(1) { Ok(()) } else { Err( op_failed!("unexpected access check result {}", result)) }
    }
}

/* #region expression graph ***************************************************************************/

pub fn constant (v: impl Into<JsonValue>)->JsonValue {
    json!({ "constantValue": v.into() })
}

pub fn invoke (function_name: &str, args: Vec<(&str,JsonValue)>)->JsonValue {
    let arguments: JsonMap<String,JsonValue> = args.into_iter().map( |(k,v)| (k.to_string(), v)).collect();
    json!({ "functionInvocationValue": { "functionName": function_name, "arguments": arguments } })
}

/// wrap a single value node into an expression
pub fn expression (node: JsonValue)->JsonValue {
    json!({ "result": "0", "values": { "0": node } })
}

/// the server side geometry constructor for a GeoJSON geometry
pub fn geometry_node (geometry: &Geometry)->Result<JsonValue> {
    let coordinates = match &geometry.value {
        Value::Point(c) => serde_json::to_value(c)?,
        Value::MultiPoint(c) => serde_json::to_value(c)?,
        Value::LineString(c) => serde_json::to_value(c)?,
        Value::MultiLineString(c) => serde_json::to_value(c)?,
        Value::Polygon(c) => serde_json::to_value(c)?,
        Value::MultiPolygon(c) => serde_json::to_value(c)?,
        Value::GeometryCollection(_) => return Err( op_failed!("geometry collections are not supported"))
    };

    let function_name = format!("GeometryConstructors.{}", geometry_type_name( &geometry.value));
    let mut args = vec![ ("coordinates", constant(coordinates)) ];
    if is_areal( &geometry.value) {
        args.push( ("evenOdd", constant(true)));
    }

    Ok( invoke( &function_name, args) )
}

/// `image.select(band).eq(month).multiply(pixelArea).reduceRegion(sum, geometry, scale, maxPixels)`
pub fn burned_area_expression (request: &BurnedAreaRequest<'_>)->Result<JsonValue> {
    let image = invoke( "Image.load", vec![ ("id", constant(request.image_asset)) ]);
    let band = invoke( "Image.select", vec![
        ("input", image),
        ("bandSelectors", constant( json!([request.band])))
    ]);
    let mask = invoke( "Image.eq", vec![
        ("image1", band),
        ("image2", invoke( "Image.constant", vec![ ("value", constant(request.month)) ]))
    ]);
    let area = invoke( "Image.multiply", vec![
        ("image1", mask),
        ("image2", invoke( "Image.pixelArea", vec![]))
    ]);
    let reduction = invoke( "Image.reduceRegion", vec![
        ("image", area),
        ("reducer", invoke( "Reducer.sum", vec![])),
        ("geometry", geometry_node( request.geometry)?),
        ("scale", constant(request.scale)),
        ("maxPixels", constant(request.max_pixels))
    ]);

    Ok( expression( reduction) )
}

/// the reduction result is a dictionary keyed by band name. Missing keys and null values (e.g. empty masks) are errors
pub fn extract_band_value (result: &JsonValue, band: &str)->Result<f64> {
    result.get( band)
        .and_then( |v| v.as_f64())
        .ok_or( FogoBurnedError::MissingValueError( band.to_string()))
}

/* #endregion expression graph */
