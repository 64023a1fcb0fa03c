pub mod catalog;
pub mod drug_price_dto;
pub mod drug_price_list_response;
pub mod plan_dto;
pub mod plan_list_query;
pub mod plan_list_response;
pub mod provider_dto;
pub mod provider_list_response;
