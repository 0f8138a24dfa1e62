//! Company repository
//!
//! Embeds industry and location in the same request (no N+1).

use async_trait::async_trait;
use topsaas_core::{CompanyFilter, CompanyRecord, PageRequest};

use super::CompanyRepository;
use crate::gateway::{GatewayClient, GatewayError, TableQuery};

const TABLE: &str = "company";

/// Select list with embedded relations
pub const COMPANY_SELECT: &str = "*, industry(name), location(city, state, country)";

pub struct CompanyRepo {
    client: GatewayClient,
}

impl CompanyRepo {
    pub fn new(client: GatewayClient) -> Self {
        Self { client }
    }

    fn filtered(query: TableQuery, filter: &CompanyFilter) -> TableQuery {
        query
            .eq_opt("industry_id", filter.industry_id)
            .eq_opt("location_id", filter.location_id)
    }

    /// Query for one page of companies.
    pub fn list_query(filter: &CompanyFilter, page: PageRequest) -> TableQuery {
        Self::filtered(TableQuery::table(TABLE).select(COMPANY_SELECT), filter)
            .range(page.offset(), page.range_end())
    }

    /// Query for the matching row count.
    pub fn count_query(filter: &CompanyFilter) -> TableQuery {
        Self::filtered(TableQuery::table(TABLE), filter)
    }
}

#[async_trait]
impl CompanyRepository for CompanyRepo {
    async fn list(
        &self,
        filter: &CompanyFilter,
        page: PageRequest,
    ) -> Result<Vec<CompanyRecord>, GatewayError> {
        self.client
            .fetch_rows(&Self::list_query(filter, page))
            .await
    }

    async fn count(&self, filter: &CompanyFilter) -> Result<u64, GatewayError> {
        self.client.count(&Self::count_query(filter)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(query: &TableQuery, key: &str, value: &str) -> bool {
        query
            .query_pairs()
            .iter()
            .any(|(k, v)| k == key && v == value)
    }

    fn has_key(query: &TableQuery, key: &str) -> bool {
        query.query_pairs().iter().any(|(k, _)| k == key)
    }

    #[test]
    fn list_without_filters() {
        let q = CompanyRepo::list_query(&CompanyFilter::default(), PageRequest::default());

        assert_eq!(q.table_name(), "company");
        assert!(has(&q, "select", "*,industry(name),location(city,state,country)"));
        assert!(has(&q, "offset", "0"));
        assert!(has(&q, "limit", "20"));
        assert!(!has_key(&q, "industry_id"));
        assert!(!has_key(&q, "location_id"));
    }

    #[test]
    fn list_forwards_filters() {
        let filter = CompanyFilter {
            industry_id: Some(1),
            location_id: Some(2),
        };
        let q = CompanyRepo::list_query(&filter, PageRequest::default());

        assert!(has(&q, "industry_id", "eq.1"));
        assert!(has(&q, "location_id", "eq.2"));
    }

    #[test]
    fn list_offset_for_second_page() {
        let q = CompanyRepo::list_query(
            &CompanyFilter::default(),
            PageRequest::new(2, 20).unwrap(),
        );
        assert!(has(&q, "offset", "20"));
        assert!(has(&q, "limit", "20"));
    }

    #[test]
    fn count_uses_same_filters_without_range() {
        let filter = CompanyFilter {
            industry_id: Some(1),
            location_id: None,
        };
        let q = CompanyRepo::count_query(&filter);

        assert!(has(&q, "select", "*"));
        assert!(has(&q, "industry_id", "eq.1"));
        assert!(!has_key(&q, "location_id"));
        assert!(!has_key(&q, "offset"));
        assert!(!has_key(&q, "limit"));
    }
}
