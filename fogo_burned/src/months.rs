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

//! calendar months as used in selections and chart labels

pub const MONTHS: std::ops::RangeInclusive<u8> = 1..=12;

pub const MONTH_NAMES: [&str;12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho",
    "Julho", "Agosto", "Setembro", "Outubro", "Novembro", "Dezembro"
];

/// localized name of month 1..12
pub fn month_name (month: u8)->Option<&'static str> {
    if MONTHS.contains(&month) { Some(MONTH_NAMES[(month-1) as usize]) } else { None }
}

pub fn is_valid_month (month: u8)->bool {
    MONTHS.contains(&month)
}

/// (month, name) pairs for selection lists
pub fn month_options ()->Vec<(u8,&'static str)> {
    MONTHS.map( |m| (m, MONTH_NAMES[(m-1) as usize])).collect()
}
