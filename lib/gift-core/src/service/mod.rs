pub mod claim;
pub mod email_template;
pub mod error;
pub mod gift;

#[cfg(test)]
pub(crate) mod test_utilities;
