use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Provider {
    pub id: &'static str,
    pub name: &'static str,
    pub specialty: &'static str,
    pub location: &'static str,
    pub network: &'static str,
    pub accepting_new_patients: bool,
}
