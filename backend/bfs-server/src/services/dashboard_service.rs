//! Read side of the dashboard: portfolio summary and activity feed.

use crate::{ApiError, ApiResult, Metrics};

use bfs_core::{Activity, FinancialSummary};
use bfs_db::{ActivityRepository, Cache, InvestmentRepository};

use log::warn;
use sqlx::SqlitePool;
use uuid::Uuid;

pub const DEFAULT_ACTIVITY_LIMIT: u32 = 20;
pub const MAX_ACTIVITY_LIMIT: u32 = 100;

const SUMMARY_NAMESPACE: &str = "financial-summary";

#[derive(Clone)]
pub struct DashboardService {
    investments: InvestmentRepository,
    activities: ActivityRepository,
    cache: Cache,
    metrics: Metrics,
}

impl DashboardService {
    pub fn new(pool: SqlitePool, cache: Cache, metrics: Metrics) -> Self {
        Self {
            investments: InvestmentRepository::new(pool.clone()),
            activities: ActivityRepository::new(pool),
            cache,
            metrics,
        }
    }

    /// Portfolio totals, served from the cache when possible.
    ///
    /// Cache failures degrade to a database read.
    pub async fn financial_summary(&self, user_id: Uuid) -> ApiResult<FinancialSummary> {
        let key = Cache::key(SUMMARY_NAMESPACE, user_id);

        if self.cache.is_enabled() {
            match self.cache.get_json::<FinancialSummary>(&key).await {
                Ok(Some(summary)) => {
                    self.metrics.cache_lookup("hit");
                    return Ok(summary);
                }
                Ok(None) => self.metrics.cache_lookup("miss"),
                Err(e) => {
                    self.metrics.cache_lookup("error");
                    warn!("Cache read failed for {}: {}", key, e);
                }
            }
        }

        let holdings = self.investments.list_for_user(user_id).await?;
        let summary = FinancialSummary::from_investments(&holdings);

        if let Err(e) = self.cache.set_json(&key, &summary).await {
            warn!("Cache write failed for {}: {}", key, e);
        }

        Ok(summary)
    }

    /// Most recent activity, newest first.
    ///
    /// `None` uses the default page size; larger requests are capped.
    pub async fn recent_activity(
        &self,
        user_id: Uuid,
        limit: Option<u32>,
    ) -> ApiResult<Vec<Activity>> {
        let limit = resolve_activity_limit(limit)?;
        Ok(self.activities.list_recent(user_id, limit).await?)
    }
}

#[track_caller]
pub fn resolve_activity_limit(limit: Option<u32>) -> ApiResult<u32> {
    match limit {
        None => Ok(DEFAULT_ACTIVITY_LIMIT),
        Some(0) => Err(ApiError::validation(
            Some("limit"),
            "limit must be at least 1",
        )),
        Some(limit) => Ok(limit.min(MAX_ACTIVITY_LIMIT)),
    }
}
