use bfs_core::Provider;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderDto {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub location: String,
    pub network: String,
    pub accepting_new_patients: bool,
}

impl From<&Provider> for ProviderDto {
    fn from(provider: &Provider) -> Self {
        Self {
            id: provider.id.to_string(),
            name: provider.name.to_string(),
            specialty: provider.specialty.to_string(),
            location: provider.location.to_string(),
            network: provider.network.to_string(),
            accepting_new_patients: provider.accepting_new_patients,
        }
    }
}
