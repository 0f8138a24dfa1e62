//! In-memory repositories for service and route tests

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;
use topsaas_core::{CompanyFilter, CompanyRecord, IndustryRead, LocationRead, PageRequest};

use super::{CompanyRepository, IndustryRepository, LocationRepository};
use crate::gateway::GatewayError;

pub fn sample_companies() -> Vec<CompanyRecord> {
    serde_json::from_value(json!([
        {
            "id": 1,
            "name": "Figma",
            "products": "Design collaboration tool",
            "founding_year": 2012,
            "total_funding": 200000000,
            "arr": 150000000,
            "valuation": 10000000000i64,
            "industry_id": 1,
            "location_id": 1,
            "industry": {"name": "SaaS"},
            "location": {"city": "San Francisco", "state": "CA", "country": "USA"}
        },
        {
            "id": 2,
            "name": "Stripe",
            "products": "Payment processing",
            "founding_year": 2010,
            "total_funding": 650000000,
            "arr": 500000000,
            "valuation": 95000000000i64,
            "industry_id": 2,
            "location_id": 1,
            "industry": {"name": "FinTech"},
            "location": {"city": "San Francisco", "state": "CA", "country": "USA"}
        }
    ]))
    .expect("sample companies decode")
}

pub fn sample_industries() -> Vec<IndustryRead> {
    vec![
        IndustryRead {
            id: 2,
            name: "FinTech".into(),
        },
        IndustryRead {
            id: 3,
            name: "HRTech".into(),
        },
        IndustryRead {
            id: 1,
            name: "SaaS".into(),
        },
    ]
}

pub fn sample_locations() -> Vec<LocationRead> {
    vec![
        LocationRead {
            id: 3,
            city: "London".into(),
            state: None,
            country: "UK".into(),
        },
        LocationRead {
            id: 2,
            city: "New York".into(),
            state: Some("NY".into()),
            country: "USA".into(),
        },
    ]
}

/// Company repository returning fixed rows and recording what it was asked
pub struct StaticCompanies {
    pub rows: Vec<CompanyRecord>,
    pub total: u64,
    pub list_calls: Mutex<Vec<(CompanyFilter, PageRequest)>>,
    pub count_calls: Mutex<Vec<CompanyFilter>>,
}

impl StaticCompanies {
    pub fn new(rows: Vec<CompanyRecord>, total: u64) -> Self {
        Self {
            rows,
            total,
            list_calls: Mutex::new(Vec::new()),
            count_calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CompanyRepository for StaticCompanies {
    async fn list(
        &self,
        filter: &CompanyFilter,
        page: PageRequest,
    ) -> Result<Vec<CompanyRecord>, GatewayError> {
        self.list_calls.lock().unwrap().push((*filter, page));
        Ok(self.rows.clone())
    }

    async fn count(&self, filter: &CompanyFilter) -> Result<u64, GatewayError> {
        self.count_calls.lock().unwrap().push(*filter);
        Ok(self.total)
    }
}

pub struct StaticIndustries(pub Vec<IndustryRead>);

#[async_trait]
impl IndustryRepository for StaticIndustries {
    async fn list_all(&self) -> Result<Vec<IndustryRead>, GatewayError> {
        Ok(self.0.clone())
    }
}

pub struct StaticLocations(pub Vec<LocationRead>);

#[async_trait]
impl LocationRepository for StaticLocations {
    async fn list_all(&self) -> Result<Vec<LocationRead>, GatewayError> {
        Ok(self.0.clone())
    }
}

/// Every read fails as if the gateway were down
pub struct Unavailable;

fn unavailable() -> GatewayError {
    GatewayError::Status {
        status: 503,
        message: "service unavailable".into(),
    }
}

#[async_trait]
impl CompanyRepository for Unavailable {
    async fn list(
        &self,
        _filter: &CompanyFilter,
        _page: PageRequest,
    ) -> Result<Vec<CompanyRecord>, GatewayError> {
        Err(unavailable())
    }

    async fn count(&self, _filter: &CompanyFilter) -> Result<u64, GatewayError> {
        Err(unavailable())
    }
}

#[async_trait]
impl IndustryRepository for Unavailable {
    async fn list_all(&self) -> Result<Vec<IndustryRead>, GatewayError> {
        Err(unavailable())
    }
}

#[async_trait]
impl LocationRepository for Unavailable {
    async fn list_all(&self) -> Result<Vec<LocationRead>, GatewayError> {
        Err(unavailable())
    }
}
