use async_trait::async_trait;
use topsaas_core::LocationRead;

use super::LocationRepository;
use crate::gateway::{GatewayClient, GatewayError, TableQuery};

pub struct LocationRepo {
    client: GatewayClient,
}

impl LocationRepo {
    pub fn new(client: GatewayClient) -> Self {
        Self { client }
    }

    pub fn list_query() -> TableQuery {
        TableQuery::table("location").order("city", true)
    }
}

#[async_trait]
impl LocationRepository for LocationRepo {
    async fn list_all(&self) -> Result<Vec<LocationRead>, GatewayError> {
        self.client.fetch_rows(&Self::list_query()).await
    }
}
