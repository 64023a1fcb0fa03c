pub mod activity;
pub mod contact_message;
pub mod currency;
pub mod drug_price;
pub mod financial_summary;
pub mod insurance_plan;
pub mod investment;
pub mod plan_type;
pub mod provider;
pub mod role;
pub mod session;
pub mod theme;
pub mod user;
pub mod user_settings;
