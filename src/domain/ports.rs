use crate::domain::model::ObservationPage;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Anything that can answer "which observations carry this Mushroom Observer
/// URL in their custom field".
#[async_trait]
pub trait ObservationSource: Send + Sync {
    async fn observations_by_mo_url(&self, mo_url: &str) -> Result<ObservationPage>;
}
