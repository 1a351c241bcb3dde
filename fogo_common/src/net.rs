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

//! common utility functions for network operations

use std::time::Duration;
use reqwest::{header::{HeaderMap,HeaderValue,AUTHORIZATION,CONTENT_TYPE,ACCEPT}, Client, StatusCode, Response};
use serde::{de::DeserializeOwned,Serialize};

use crate::define_error;

define_error!{ pub FogoNetError = 
    IOError(#[from] std::io::Error) : "IO error: {0}",
    NotFoundError(String) : "not found {0}",
    AuthError(String) : "not authorized {0}",
    HttpError(#[from] reqwest::Error) : "http error: {0}",
    OpFailed(String) : "operation failed: {0}",
    ParseError(String) : "parse error: {0}"
}

pub type Result<T> = std::result::Result<T, FogoNetError>;

/// a client with a per-request timeout. Note this does not fail if the timeout is not set
pub fn create_client (timeout: Option<Duration>)->Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok( builder.build()? )
}

/// JSON request headers with an optional bearer token
pub fn json_headers (bearer_token: Option<&str>)->Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    if let Some(token) = bearer_token {
        let v = HeaderValue::from_str( format!("Bearer {token}").as_str())
            .map_err(|e| FogoNetError::OpFailed(format!("invalid auth header: {e}")))?;
        headers.insert(AUTHORIZATION, v);
    }

    Ok(headers)
}

pub async fn post_json_query<T,U> (client: &Client, url: &str, headers: HeaderMap, data: &T) -> Result<U> where T: Serialize, U: DeserializeOwned {
    let response = client.post( url)
        .headers( headers)
        .json( data)
        .send().await?;

    match response.status() {
        StatusCode::OK => {
            from_json( response).await
        }
        StatusCode::NOT_FOUND => {
            Err( FogoNetError::NotFoundError(format!("{url}")))
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err( FogoNetError::AuthError(format!("{url}")))
        }
        other => {
            let msg = response.text().await.unwrap_or_default();
            Err( FogoNetError::OpFailed(format!("response status {other:?}: {msg}")))
        }
    }
}

pub async fn from_json<T> (response: Response)->Result<T> where T: DeserializeOwned {
    let bytes = response.bytes().await?;
    serde_json::from_slice( &bytes).map_err(|e| FogoNetError::ParseError(e.to_string()))
}
