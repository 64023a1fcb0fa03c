pub mod settings;
pub mod settings_response;
pub mod update_profile_request;
