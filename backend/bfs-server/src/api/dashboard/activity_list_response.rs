use bfs_core::Activity;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ActivityListResponse {
    pub activities: Vec<Activity>,
}
