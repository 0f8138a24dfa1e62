use topsaas_core::IndustryRead;

use crate::gateway::GatewayError;
use crate::repos::IndustryRepository;

/// All industries, in the order the repository returns them (by name).
pub async fn list_industries(
    repo: &dyn IndustryRepository,
) -> Result<Vec<IndustryRead>, GatewayError> {
    repo.list_all().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::fixtures::{sample_industries, StaticIndustries};

    #[tokio::test]
    async fn returns_repository_rows() {
        let repo = StaticIndustries(sample_industries());
        let industries = list_industries(&repo).await.unwrap();

        assert_eq!(industries, sample_industries());
    }

    #[tokio::test]
    async fn empty_table() {
        let repo = StaticIndustries(vec![]);
        assert!(list_industries(&repo).await.unwrap().is_empty());
    }
}
