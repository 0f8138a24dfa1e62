use async_trait::async_trait;
use topsaas_core::IndustryRead;

use super::IndustryRepository;
use crate::gateway::{GatewayClient, GatewayError, TableQuery};

pub struct IndustryRepo {
    client: GatewayClient,
}

impl IndustryRepo {
    pub fn new(client: GatewayClient) -> Self {
        Self { client }
    }

    pub fn list_query() -> TableQuery {
        TableQuery::table("industry").order("name", true)
    }
}

#[async_trait]
impl IndustryRepository for IndustryRepo {
    async fn list_all(&self) -> Result<Vec<IndustryRead>, GatewayError> {
        self.client.fetch_rows(&Self::list_query()).await
    }
}
