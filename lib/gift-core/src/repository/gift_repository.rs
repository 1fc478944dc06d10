use shared_types::GiftId;

use super::error::DataLayerError;
use crate::model::gift::{Gift, GiftRelations};

/// There is no way to set `claimed_quantity` directly: it only moves through
/// [`GiftRepository::reserve_quantity`] and [`GiftRepository::release_quantity`].
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait GiftRepository: Send + Sync {
    async fn get_gift(
        &self,
        id: &GiftId,
        relations: &GiftRelations,
    ) -> Result<Option<Gift>, DataLayerError>;

    /// Atomically adds `quantity` to the claimed quantity, but only if the result stays within
    /// the total quantity.
    ///
    /// Returns the new claimed quantity, or `None` if the remaining capacity is too small
    /// (or the gift disappeared).
    async fn reserve_quantity(
        &self,
        id: &GiftId,
        quantity: u32,
    ) -> Result<Option<u32>, DataLayerError>;

    /// Atomically subtracts `quantity` from the claimed quantity.
    ///
    /// Fails with [`DataLayerError::RecordNotUpdated`] if that would make it negative.
    async fn release_quantity(&self, id: &GiftId, quantity: u32) -> Result<u32, DataLayerError>;
}
