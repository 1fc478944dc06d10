use std::sync::Arc;

use crate::proto::session_provider::SessionProvider;
use crate::repository::email_template_repository::EmailTemplateRepository;

mod defaults;
pub mod dto;
mod mapper;
pub mod service;

#[derive(Clone)]
pub struct EmailTemplateService {
    email_template_repository: Arc<dyn EmailTemplateRepository>,
    session_provider: Arc<dyn SessionProvider>,
}

impl EmailTemplateService {
    pub(crate) fn new(
        email_template_repository: Arc<dyn EmailTemplateRepository>,
        session_provider: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            email_template_repository,
            session_provider,
        }
    }
}
