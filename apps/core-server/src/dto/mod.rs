pub mod error;
pub mod mapper;
pub(crate) mod response;
