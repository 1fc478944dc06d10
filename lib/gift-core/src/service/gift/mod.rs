use std::sync::Arc;

use crate::repository::gift_repository::GiftRepository;

pub mod dto;
mod mapper;
pub mod service;

#[derive(Clone)]
pub struct GiftService {
    gift_repository: Arc<dyn GiftRepository>,
}

impl GiftService {
    pub(crate) fn new(gift_repository: Arc<dyn GiftRepository>) -> Self {
        Self { gift_repository }
    }
}
