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

use std::{io::Write, path::PathBuf};
use serde::Deserialize;
use fogo_build::{load_config_path, env_expand, expand_path, FogoBuildError};

// run with "cargo test test_xx -- --nocapture"

#[derive(Deserialize,Debug)]
struct TestConfig {
    name: String,
    years: Vec<u16>,
    scale: f64,
}

#[test]
fn test_load_config_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!( file, r#"TestConfig( name: "fogo", years: [2019, 2020], scale: 30.0 )"#).unwrap();

    let config: TestConfig = load_config_path( file.path()).unwrap();
    println!("{config:?}");
    assert_eq!( config.name, "fogo");
    assert_eq!( config.years, vec![2019, 2020]);
    assert_eq!( config.scale, 30.0);
}

#[test]
fn test_load_config_errors() {
    let res: Result<TestConfig,FogoBuildError> = load_config_path( "/this/does/not/exist.ron");
    assert!( matches!( res, Err(FogoBuildError::IOError(_))));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!( file, "TestConfig( name: 42 )").unwrap();
    let res: Result<TestConfig,FogoBuildError> = load_config_path( file.path());
    assert!( matches!( res, Err(FogoBuildError::RonSerdeError(_))));
}

#[test]
fn test_env_expand() {
    unsafe { std::env::set_var( "FOGO_TEST_TOKEN", "secret"); }
    assert_eq!( env_expand("$FOGO_TEST_TOKEN"), "secret");
    assert_eq!( env_expand("literal"), "literal");
    assert_eq!( env_expand("$FOGO_TEST_NOT_SET"), "");

    unsafe { std::env::set_var( "FOGO_TEST_DIR", "/tmp/fogo"); }
    assert_eq!( expand_path("$FOGO_TEST_DIR/assets/x.geojson"), PathBuf::from("/tmp/fogo/assets/x.geojson"));
    assert_eq!( expand_path("assets/x.geojson"), PathBuf::from("assets/x.geojson"));
}
