use topsaas_core::LocationRead;

use crate::gateway::GatewayError;
use crate::repos::LocationRepository;

/// All locations, in the order the repository returns them (by city).
pub async fn list_locations(
    repo: &dyn LocationRepository,
) -> Result<Vec<LocationRead>, GatewayError> {
    repo.list_all().await
}
