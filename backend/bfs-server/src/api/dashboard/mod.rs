pub mod activity_list_query;
pub mod activity_list_response;
pub mod dashboard;
pub mod financial_summary_response;
