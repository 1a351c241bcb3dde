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

use serde::{Deserialize,Deserializer};
use std::{io::Read, path::{Path,PathBuf}, fs::File, env};
use crate::errors::Result;

pub fn file_contents_as_bytes (path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();
    let mut contents: Vec<u8> = Vec::with_capacity(len as usize);
    file.read_to_end(&mut contents)?;
    Ok(contents)
}

/// expand leading `$VAR` path elements from the environment. Unknown vars are kept verbatim
pub fn expand_path (path: impl AsRef<Path>)->PathBuf {
    let mut res = PathBuf::new();
    for e in path.as_ref().iter() {
        match e.to_str() {
            Some(s) if s.starts_with('$') => {
                if let Ok(se) = env::var(&s[1..]) { res.push(se) } else { res.push(s) }
            }
            _ => res.push(e)
        }
    }
    res
}

/// use as `#[serde(deserialize_with="fogo_build::deserialize_expand_path")]`
pub fn deserialize_expand_path <'a,D>(deserializer: D) -> std::result::Result<PathBuf,D::Error> where D: Deserializer<'a> {
    String::deserialize(deserializer).map( |s| expand_path( Path::new( s.as_str())))
}

/// if the whole string is a `$VAR` reference replace it with the env value (or an empty string if not set).
/// This is mostly used for secrets that should not be stored in config files
pub fn env_expand (s: &str)->String {
    if let Some(var) = s.strip_prefix('$') {
        env::var(var).unwrap_or_default()
    } else {
        s.to_string()
    }
}

/// use as `#[serde(deserialize_with="fogo_build::deserialize_env_string")]`
pub fn deserialize_env_string <'a,D>(deserializer: D) -> std::result::Result<String,D::Error> where D: Deserializer<'a> {
    String::deserialize(deserializer).map( |s| env_expand( s.as_str()))
}

/// modify path and check if path condition holds. If not revert the path to its previous state
#[macro_export]
macro_rules! path_cond {
    ( $pred:ident, $path_expr:expr, $($e:expr),* ) => {
        {
            let path: &mut PathBuf = $path_expr;
            let n0 = path.components().count();
            $( path.push($e); )*
            if path.$pred() { 
                true
            } else {
                let mut n = path.components().count();
                while n > n0 { path.pop(); n -= 1; }
                false
            }
        }
    }
}

/// this is the highest parent from the current dir that still has a Cargo.toml
pub fn get_workspace_dir()->Option<PathBuf> {
    if let Ok(mut path) = env::current_dir() {
        if !path.join("Cargo.toml").is_file() { return None }
        while path.parent().map( |p| p.join("Cargo.toml").is_file()).unwrap_or(false) {
            path.pop();
        }
        return Some(path)
    }
    None
}

pub fn get_workspace_parent()->Option<PathBuf> {
    get_workspace_dir().and_then( |p| p.parent().map( |pp| pp.to_path_buf()))
}
