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

use std::path::{Path,PathBuf};
use crate::{BinContext, find_resource_file, errors::Result, utils::file_contents_as_bytes};

pub const CONFIGS: &'static str = "configs";

pub fn find_config_file (ctx: &Option<&BinContext>, resource_crate: &str, filename: &str) -> Option<PathBuf> {
    find_resource_file( CONFIGS, ctx, resource_crate, filename)
}

/// load a RON config from an explicit pathname (e.g. from a command line argument)
pub fn load_config_path<C,P> (path: P) -> Result<C> where C: for <'a> serde::Deserialize<'a>, P: AsRef<Path> {
    let data = file_contents_as_bytes( path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

/// the macro that needs to be expanded at the top of crates (lib.rs) that define configs.
/// Config users call the defined `load_config(..)` function to instantiate config structs
#[macro_export]
macro_rules! define_load_config {
    () => {
        mod configs {
            /// load config using the fogo_build lookup mechanism
            pub fn load_config<C> (filename: &str) -> fogo_build::Result<C> where C: for <'a> serde::Deserialize<'a> {
                let bin_ctx = fogo_build::BIN_CONTEXT.get();
                let resource_crate = env!("CARGO_PKG_NAME");

                if let Some(path) = fogo_build::find_config_file( &bin_ctx, resource_crate, filename) {
                    return fogo_build::load_config_path( &path)
                }

                Err( fogo_build::FogoBuildError::ResourceNotFoundError(filename.to_string()) )
            }
        }
        pub use configs::*; // make load_config() visible at the crate level
    }
}
