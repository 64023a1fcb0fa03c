use crate::Provider;
use crate::comparison::{Filter, text_matches};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderFilter {
    pub name: Option<String>,
    pub specialty: Option<String>,
    pub location: Option<String>,
    pub network: Option<String>,
}

impl Filter<Provider> for ProviderFilter {
    fn matches(&self, provider: &Provider) -> bool {
        text_matches(self.name.as_deref(), provider.name)
            && text_matches(self.specialty.as_deref(), provider.specialty)
            && text_matches(self.location.as_deref(), provider.location)
            && text_matches(self.network.as_deref(), provider.network)
    }
}
