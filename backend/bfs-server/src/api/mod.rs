pub mod auth;
pub mod calculators;
pub mod catalog;
pub mod cookies;
pub mod dashboard;
pub mod error;
pub mod extractors;
pub mod settings;
