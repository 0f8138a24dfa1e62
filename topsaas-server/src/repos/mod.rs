//! Repositories, one per table
//!
//! Each trait mirrors the reads a service needs. The gateway-backed
//! implementations forward filters unchanged and return raw rows; all
//! shaping happens in the service layer.

pub mod companies;
pub mod industries;
pub mod locations;

#[cfg(test)]
pub(crate) mod fixtures;

use async_trait::async_trait;
use topsaas_core::{CompanyFilter, CompanyRecord, IndustryRead, LocationRead, PageRequest};

use crate::gateway::GatewayError;

pub use companies::{CompanyRepo, COMPANY_SELECT};
pub use industries::IndustryRepo;
pub use locations::LocationRepo;

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// One page of companies with industry and location embedded.
    async fn list(
        &self,
        filter: &CompanyFilter,
        page: PageRequest,
    ) -> Result<Vec<CompanyRecord>, GatewayError>;

    /// Number of companies matching the filter.
    async fn count(&self, filter: &CompanyFilter) -> Result<u64, GatewayError>;
}

#[async_trait]
pub trait IndustryRepository: Send + Sync {
    /// All industries ordered by name.
    async fn list_all(&self) -> Result<Vec<IndustryRead>, GatewayError>;
}

#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// All locations ordered by city.
    async fn list_all(&self) -> Result<Vec<LocationRead>, GatewayError>;
}
