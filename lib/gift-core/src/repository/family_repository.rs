use shared_types::FamilyId;

use super::error::DataLayerError;
use crate::model::family::{Family, FamilyRelations};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait FamilyRepository: Send + Sync {
    async fn get_family(
        &self,
        id: &FamilyId,
        relations: &FamilyRelations,
    ) -> Result<Option<Family>, DataLayerError>;
}
