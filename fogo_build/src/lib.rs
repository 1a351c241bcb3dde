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

//! resource lookup for fogo crates. Each crate that has configs expands `define_load_config!{}` at its top
//! level, which defines a crate-local `load_config(filename)` function. Configs are RON files that are looked up
//! in the following order:
//!
//!   1. `$FOGO_HOME/configs/<crate>/<file>`
//!   2. `<workspace-parent>/configs/<crate>/<file>`
//!   3. `$HOME/.fogo/configs/<crate>/<file>`
//!   4. `<workspace>/<crate>/configs/<file>` (defaults that are kept within the repository)
//!
//! Steps 1-3 also check a bin specific override `configs/<bin-crate>/<bin-name>/<crate>/<file>` if the
//! executable has set a [`BinContext`] (see [`set_bin_context`]).

use std::{env, path::{Path,PathBuf}, sync::OnceLock};

#[macro_use]
mod utils;
pub use utils::*;

mod configs;
pub use configs::*;

mod errors;
pub use errors::*;

/* #region bin globals *******************************************************************/

#[derive(Debug)]
pub struct BinContext {
    pub bin_name: String,
    pub bin_crate: String,
    pub proc_id: Option<u32>,
}

impl BinContext {
    pub fn set (bin_name: &str, bin_crate: &str, proc_id: Option<u32>) {
        // a second set is harmless (e.g. from tests) - first one wins
        let _ = BIN_CONTEXT.set( Self{ bin_name: bin_name.to_string(), bin_crate: bin_crate.to_string(), proc_id });
    }
}

pub static BIN_CONTEXT: OnceLock<BinContext> = OnceLock::new();

/// this has to be called (once) from the bin source
#[macro_export]
macro_rules! set_bin_context {
    () => {
        fogo_build::BinContext::set( env!("CARGO_BIN_NAME"), env!("CARGO_PKG_NAME"), Some(std::process::id()))
    }
}

/* #endregion bin globals */

/* #region resource lookup ***************************************************************/

fn find_resource_file (resource_dir: &str, ctx: &Option<&BinContext>, resource_crate: &str, filename: &str) -> Option<PathBuf> {
    if let Ok(fogo_home) = env::var("FOGO_HOME") {
        let mut path = PathBuf::from( fogo_home);
        if find_external_resource( &mut path, resource_dir, ctx, resource_crate, filename) { return Some(path) }
    }

    // the first dir outside the source repo
    if let Some(mut path) = get_workspace_parent() {
        if find_external_resource( &mut path, resource_dir, ctx, resource_crate, filename) { return Some(path) }
    }

    if let Ok(usr_home) = env::var("HOME") {
        let mut path = PathBuf::from( usr_home);
        path.push(".fogo");
        if find_external_resource( &mut path, resource_dir, ctx, resource_crate, filename) { return Some(path) }
    }

    if let Some(mut path) = get_workspace_dir() {
        if path_cond!( is_file, &mut path, resource_crate, resource_dir, filename) { return Some(path) }
    }

    None
}

fn find_external_resource (path: &mut PathBuf, resource_dir: &str, bin_ctx: &Option<&BinContext>, resource_crate: &str, filename: &str)->bool {
    if let Some(ctx) = bin_ctx {
        let bin_crate = ctx.bin_crate.as_str();
        let bin_name = ctx.bin_name.as_str();
        if path_cond!( is_file, path, resource_dir, bin_crate, bin_name, resource_crate, filename) { return true }
    }

    path_cond!( is_file, path, resource_dir, resource_crate, filename)
}

/* #endregion resource lookup */
