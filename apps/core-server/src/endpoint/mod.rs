pub mod claim;
pub mod email_template;
pub mod gift;
pub mod misc;
