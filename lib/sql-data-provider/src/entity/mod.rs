pub mod campaign;
pub mod claim;
pub mod email_template;
pub mod family;
pub mod gift;
pub mod organisation;
pub mod person;
