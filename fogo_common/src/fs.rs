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

use std::fs::{self,File};
use std::io::{self,Read,Write,ErrorKind};
use std::path::{Path,PathBuf};
use regex::Regex;

use crate::io_error;

type Result<T> = std::result::Result<T,std::io::Error>;

pub fn filename<'a,T: AsRef<Path>> (path: &'a T)->Option<&'a str> {
    path.as_ref().file_name().and_then(|ostr| ostr.to_str())
}

pub fn extension<'a,T: AsRef<Path>> (path: &'a T)->Option<&'a str> {
    path.as_ref().extension().and_then(|ostr| ostr.to_str())
}

pub fn filestem <'a,T: AsRef<Path>> (path: &'a T)->Option<&'a str> {
    path.as_ref().file_stem().and_then(|ostr| ostr.to_str())
}

/// case insensitive extension check (without '.')
pub fn has_extension<T: AsRef<Path>> (path: &T, ext: &str)->bool {
    extension(path).map( |e| e.eq_ignore_ascii_case(ext)).unwrap_or(false)
}

/// the last path element of a client provided name, which can contain '/' or '\\' separators.
/// Returns `None` for empty names and names that only consist of '.' chars
pub fn sanitized_filename (name: &str)->Option<&str> {
    let fname = name.rsplit( |c| c == '/' || c == '\\').next()?.trim();
    if fname.is_empty() || fname.chars().all(|c| c == '.') { None } else { Some(fname) }
}

pub fn file_contents_as_string (file: &mut fs::File) -> Result<String> {
    let len = file.metadata()?.len();
    let mut contents = String::with_capacity(len as usize);
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

pub fn filepath_contents_as_string <P: AsRef<Path>> (path: &P) -> Result<String> {
    let mut file = File::open(path)?;
    file_contents_as_string( &mut file)
}

pub fn set_filepath_contents (dir: impl AsRef<Path>, filename: &str, new_contents: &[u8]) -> Result<PathBuf>  {
    let path = dir.as_ref().join(filename);
    let mut file = File::create(&path)?;
    file.write_all(new_contents)?;
    Ok(path)
}

/// non-recursive list of regular files in `dir` whose name matches `fname_regex`, sorted by name
pub fn matching_files_in_dir<P: AsRef<Path>> (dir: &P, fname_regex: &Regex) -> Result<Vec<PathBuf>> {
    let dir: &Path = dir.as_ref();
    let mut list: Vec<PathBuf> = Vec::new();

    if dir.is_dir() {
        for entry in fs::read_dir(dir)? {
            if let Ok(entry) = entry {
                if let Some(fname) = entry.file_name().to_str() {
                    if fname_regex.is_match( fname) && entry.path().is_file() {
                        list.push(entry.path())
                    }
                }
            }
        }
    } else {
        return Err( io_error!(ErrorKind::NotFound, "dir {:?}", dir))
    }

    list.sort();
    Ok(list)
}
