use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ActivityListQuery {
    pub limit: Option<u32>,
}
