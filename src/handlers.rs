pub mod customers;
pub mod dashboard;
pub mod i18n;
pub mod orders;
pub mod preferences;
