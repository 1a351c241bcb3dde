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

//! the linear recompute that is triggered by each user interaction:
//! resolve area of interest -> map -> statistics -> charts and table

use serde::Serialize;
use tracing::{info,warn};

use crate::{
    FogoConfig, aoi::{AoiInput, AoiSource, BoundaryGeometry, resolve_aoi}, boundary::BoundaryCatalog,
    months::is_valid_month, reducer::RemoteReducer,
    stats::{MonthlyRow, StatRecord, YearlyRow, aggregate_monthly, aggregate_yearly, compute_stat_records},
    presentation::{BarChart, MapView, PivotTable, build_map, monthly_chart, pivot_table, yearly_chart}
};

/// user visible messages. Failures are reported here instead of failing the request
#[derive(Debug,Clone,Serialize,PartialEq)]
#[serde(tag="level", content="message", rename_all="camelCase")]
pub enum Notice {
    Success(String),
    Info(String),
    Warning(String),
    Error(String),
}

impl Notice {
    pub fn is_error (&self)->bool { matches!( self, Notice::Error(_)) }
}

#[derive(Debug,Clone)]
pub struct AnalysisRequest {
    pub years: Vec<u16>,
    pub months: Vec<u8>,
    pub aoi: AoiInput,

    /// non-empty inputs that were overridden by a higher precedence input
    pub ignored_inputs: Vec<AoiSource>,
}

#[derive(Debug,Clone,Serialize)]
#[serde(rename_all="camelCase")]
pub struct Statistics {
    pub records: Vec<StatRecord>,
    pub monthly: Vec<MonthlyRow>,
    pub yearly: Vec<YearlyRow>,
    pub monthly_chart: BarChart,
    pub yearly_chart: BarChart,
    pub table: PivotTable,
}

#[derive(Debug,Clone,Serialize)]
#[serde(rename_all="camelCase")]
pub struct AnalysisReport {
    pub area: Option<BoundaryGeometry>,
    pub heading: Option<String>,
    pub notices: Vec<Notice>,
    pub map: MapView,
    pub statistics: Option<Statistics>,
}

/// sorted, de-duplicated years within the configured range
fn checked_years (config: &FogoConfig, years: &[u16], notices: &mut Vec<Notice>)->Vec<u16> {
    let mut checked: Vec<u16> = years.iter().copied().filter( |y| {
        let ok = config.is_available_year(*y);
        if !ok { notices.push( Notice::Warning( format!("ano {y} não disponível, ignorado"))) }
        ok
    }).collect();
    checked.sort();
    checked.dedup();
    checked
}

fn checked_months (months: &[u8], notices: &mut Vec<Notice>)->Vec<u8> {
    let mut checked: Vec<u8> = months.iter().copied().filter( |m| {
        let ok = is_valid_month(*m);
        if !ok { notices.push( Notice::Warning( format!("mês {m} inválido, ignorado"))) }
        ok
    }).collect();
    checked.sort();
    checked.dedup();
    checked
}

fn resolve_with_notices (input: &AoiInput, catalog: &BoundaryCatalog, notices: &mut Vec<Notice>)->Option<BoundaryGeometry> {
    match resolve_aoi( input, catalog) {
        Ok(Some(aoi)) => {
            let msg = match input {
                AoiInput::FileUpload(_) => "Shapefile carregado com sucesso!".to_string(),
                AoiInput::PastedText(_) => "GeoJSON carregado com sucesso!".to_string(),
                _ => format!("Município {} carregado com sucesso!", aoi.name)
            };
            notices.push( Notice::Success(msg));
            Some(aoi)
        }
        Ok(None) => None,
        Err(e) => {
            warn!("failed to resolve area of interest: {e}");
            let msg = match input {
                AoiInput::PastedText(_) => format!("Erro no GeoJSON: {e}"),
                _ => format!("Erro: {e}")
            };
            notices.push( Notice::Error(msg));
            None
        }
    }
}

/// this never fails - problems are reported as notices and result in a report without (or with partial) statistics
pub async fn run_analysis (config: &FogoConfig, catalog: &BoundaryCatalog, reducer: &dyn RemoteReducer, request: AnalysisRequest)->AnalysisReport {
    let mut notices = Vec::new();

    if let Some(e) = catalog.load_error() {
        notices.push( Notice::Error( format!("Erro ao carregar GeoJSON: {e}")));
    }

    let years = checked_years( config, &request.years, &mut notices);
    let months = checked_months( &request.months, &mut notices);

    // a selection without any valid month is not the same as no selection (which shows all months)
    let no_valid_month = !request.months.is_empty() && months.is_empty();
    if no_valid_month {
        notices.push( Notice::Error( "Nenhum mês válido selecionado.".to_string()));
    }

    let area = resolve_with_notices( &request.aoi, catalog, &mut notices);
    if area.is_some() && !request.ignored_inputs.is_empty() {
        let ignored: Vec<&str> = request.ignored_inputs.iter().map( |s| s.label()).collect();
        notices.push( Notice::Info( format!("Usando {}, ignorado: {}", 
            request.aoi.source().map(|s| s.label()).unwrap_or("-"), ignored.join(", "))));
    }

    let map = build_map( config, area.as_ref(), &years, &months);

    let mut heading = None;
    let mut statistics = None;

    if let Some(aoi) = &area && !years.is_empty() && !no_valid_month {
        info!("computing statistics for {} years {:?}", aoi.name, years);
        heading = Some( format!("ESTATÍSTICAS MENSAL E ANUAL - {}", aoi.name.to_uppercase()));

        let records = compute_stat_records( reducer, config, &aoi.geometry, &years).await;

        if months.is_empty() {
            notices.push( Notice::Info( "Nenhum mês selecionado. Exibindo todos os meses.".to_string()));
        }
        let monthly = aggregate_monthly( &records, &months);
        let yearly = aggregate_yearly( &monthly);

        statistics = Some( Statistics {
            monthly_chart: monthly_chart( &monthly),
            yearly_chart: yearly_chart( &yearly),
            table: pivot_table( &monthly),
            records, monthly, yearly,
        });
    }

    AnalysisReport { area, heading, notices, map, statistics }
}
