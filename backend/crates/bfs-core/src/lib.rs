pub mod calculators;
pub mod catalog;
pub mod comparison;
pub mod error;
pub mod models;
pub mod validation;

pub use calculators::investment::{InvestmentInput, InvestmentProjection, YearBalance, project_investment};
pub use calculators::life_insurance::{LifeInsuranceInput, LifeInsuranceNeeds, life_insurance_needs};
pub use calculators::mortgage::{MortgageInput, MortgageQuote, mortgage_payment};
pub use comparison::drug_price_filter::DrugPriceFilter;
pub use comparison::plan_filter::PlanFilter;
pub use comparison::provider_filter::ProviderFilter;
pub use comparison::{Filter, apply_filter};
pub use error::{CoreError, CoreResult};
pub use models::activity::Activity;
pub use models::contact_message::ContactMessage;
pub use models::currency::Currency;
pub use models::drug_price::DrugPrice;
pub use models::financial_summary::{AssetAllocation, FinancialSummary};
pub use models::insurance_plan::InsurancePlan;
pub use models::investment::Investment;
pub use models::plan_type::PlanType;
pub use models::provider::Provider;
pub use models::role::Role;
pub use models::session::Session;
pub use models::theme::Theme;
pub use models::user::{PublicUser, User};
pub use models::user_settings::UserSettings;

#[cfg(test)]
mod tests;
