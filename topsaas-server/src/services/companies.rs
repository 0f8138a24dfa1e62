use topsaas_core::{CompanyFilter, CompanyRead, PageRequest, Paginated};

use crate::gateway::GatewayError;
use crate::repos::CompanyRepository;

/// One page of companies plus pagination metadata.
///
/// The page rows and the total are fetched with the same filter; `page` and
/// `size` in the envelope echo the request.
pub async fn list_companies(
    repo: &dyn CompanyRepository,
    filter: CompanyFilter,
    page: PageRequest,
) -> Result<Paginated<CompanyRead>, GatewayError> {
    let (rows, total) = tokio::try_join!(repo.list(&filter, page), repo.count(&filter))?;

    tracing::debug!(
        industry_id = ?filter.industry_id,
        location_id = ?filter.location_id,
        page = page.page,
        size = page.size,
        rows = rows.len(),
        total,
        "listed companies"
    );

    Ok(Paginated::new(rows, total, page).map(CompanyRead::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::fixtures::{sample_companies, StaticCompanies, Unavailable};

    #[tokio::test]
    async fn delegates_to_repository() {
        let repo = StaticCompanies::new(sample_companies(), 2);

        let result = list_companies(&repo, CompanyFilter::default(), PageRequest::default())
            .await
            .unwrap();

        assert_eq!(repo.list_calls.lock().unwrap().len(), 1);
        assert_eq!(repo.count_calls.lock().unwrap().len(), 1);
        assert_eq!(result.items.len(), 2);
    }

    #[tokio::test]
    async fn pagination_metadata() {
        let repo = StaticCompanies::new(sample_companies(), 100);

        let page = PageRequest::new(1, 20).unwrap();
        let result = list_companies(&repo, CompanyFilter::default(), page)
            .await
            .unwrap();

        assert_eq!(result.total, 100);
        assert_eq!(result.page, 1);
        assert_eq!(result.size, 20);
        assert_eq!(result.total_pages, 5);
    }

    #[tokio::test]
    async fn zero_total() {
        let repo = StaticCompanies::new(vec![], 0);

        let result = list_companies(&repo, CompanyFilter::default(), PageRequest::default())
            .await
            .unwrap();

        assert!(result.items.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.total_pages, 0);
    }

    #[tokio::test]
    async fn filters_passed_to_both_reads() {
        let repo = StaticCompanies::new(vec![], 0);
        let filter = CompanyFilter {
            industry_id: Some(1),
            location_id: Some(2),
        };
        let page = PageRequest::new(2, 50).unwrap();

        list_companies(&repo, filter, page).await.unwrap();

        assert_eq!(*repo.list_calls.lock().unwrap(), vec![(filter, page)]);
        assert_eq!(*repo.count_calls.lock().unwrap(), vec![filter]);
    }

    #[tokio::test]
    async fn shapes_rows() {
        let repo = StaticCompanies::new(sample_companies(), 2);

        let result = list_companies(&repo, CompanyFilter::default(), PageRequest::default())
            .await
            .unwrap();

        let figma = &result.items[0];
        assert_eq!(figma.name, "Figma");
        assert_eq!(figma.industry, "SaaS");
        assert_eq!(figma.location, "San Francisco, CA, USA");

        let stripe = &result.items[1];
        assert_eq!(stripe.industry, "FinTech");
    }

    #[tokio::test]
    async fn propagates_gateway_failure() {
        let err = list_companies(&Unavailable, CompanyFilter::default(), PageRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Status { status: 503, .. }));
    }
}
