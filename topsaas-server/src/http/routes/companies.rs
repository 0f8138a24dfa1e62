//! Company endpoints

use axum::{extract::State, routing::get, Json, Router};
use serde::Deserialize;
use topsaas_core::{CompanyFilter, CompanyRead, PageRequest, Paginated, ValidationError};

use crate::http::error::ApiError;
use crate::http::extractors::ValidQuery;
use crate::http::state::AppState;
use crate::services;

/// Query parameters for GET /companies
#[derive(Debug, Default, Deserialize)]
pub struct CompanyListParams {
    pub industry_id: Option<i64>,
    pub location_id: Option<i64>,
    /// 1-based, default 1
    pub page: Option<u32>,
    /// 1..=100, default 20
    pub size: Option<u32>,
}

impl CompanyListParams {
    pub fn into_parts(self) -> Result<(CompanyFilter, PageRequest), ValidationError> {
        let page = PageRequest::from_optional(self.page, self.size)?;
        let filter = CompanyFilter {
            industry_id: self.industry_id,
            location_id: self.location_id,
        };
        Ok((filter, page))
    }
}

/// GET /companies - filtered, paginated company listing
async fn list_companies(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<CompanyListParams>,
) -> Result<Json<Paginated<CompanyRead>>, ApiError> {
    let (filter, page) = params.into_parts()?;
    let result = services::list_companies(state.companies(), filter, page).await?;
    Ok(Json(result))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/companies", get(list_companies))
}
