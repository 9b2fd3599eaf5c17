use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::agency::Agency;
use crate::models::candidate::Candidate;
use crate::models::employer::Employer;
use crate::services::registry::RegistryStore;

pub const RECENT_ACTIVITY_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Candidate,
    Employer,
    Agency,
}

/// One entry of the combined "recent activity" feed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: Uuid,
    pub role: Role,
    pub display_name: String,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBreakdown {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_registrations: usize,
    pub candidates: StatusBreakdown,
    pub employers: StatusBreakdown,
    pub agencies: StatusBreakdown,
    pub pending_review: usize,
    pub verified_partners: usize,
}

pub fn status_breakdown<'a>(statuses: impl IntoIterator<Item = &'a str>) -> StatusBreakdown {
    let mut breakdown = StatusBreakdown::default();
    for status in statuses {
        breakdown.total += 1;
        match status {
            "pending" => breakdown.pending += 1,
            "approved" => breakdown.approved += 1,
            "rejected" => breakdown.rejected += 1,
            _ => {}
        }
    }
    breakdown
}

/// Newest first, then truncated to the feed limit.
pub fn sort_recent(items: &mut Vec<ActivityItem>) {
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    items.truncate(RECENT_ACTIVITY_LIMIT);
}

/// Server-fed rendition of the admin dashboard: the three collections are
/// fetched in full and every figure is recomputed from the in-memory arrays
/// on each call. There is no SQL aggregation behind these numbers.
#[derive(Clone)]
pub struct DashboardService {
    candidates: RegistryStore<Candidate>,
    employers: RegistryStore<Employer>,
    agencies: RegistryStore<Agency>,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            candidates: RegistryStore::new(pool.clone()),
            employers: RegistryStore::new(pool.clone()),
            agencies: RegistryStore::new(pool),
        }
    }

    pub async fn stats(&self) -> Result<DashboardStats> {
        let candidates = self.candidates.list().await?;
        let employers = self.employers.list().await?;
        let agencies = self.agencies.list().await?;

        let candidate_stats = status_breakdown(candidates.iter().map(|c| c.status.as_str()));
        let employer_stats = status_breakdown(employers.iter().map(|e| e.status.as_str()));
        let agency_stats = status_breakdown(agencies.iter().map(|a| a.status.as_str()));

        let verified_partners = employers.iter().filter(|e| e.verified).count()
            + agencies.iter().filter(|a| a.verified).count();

        Ok(DashboardStats {
            total_registrations: candidate_stats.total + employer_stats.total + agency_stats.total,
            pending_review: candidate_stats.pending + employer_stats.pending + agency_stats.pending,
            candidates: candidate_stats,
            employers: employer_stats,
            agencies: agency_stats,
            verified_partners,
        })
    }

    pub async fn recent_activity(&self) -> Result<Vec<ActivityItem>> {
        let candidates = self.candidates.list().await?;
        let employers = self.employers.list().await?;
        let agencies = self.agencies.list().await?;

        let mut items: Vec<ActivityItem> = Vec::with_capacity(
            candidates.len() + employers.len() + agencies.len(),
        );
        items.extend(candidates.iter().map(|c| ActivityItem {
            id: c.id,
            role: Role::Candidate,
            display_name: c.full_name(),
            status: c.status.clone(),
            created_at: c.created_at,
        }));
        items.extend(employers.iter().map(|e| ActivityItem {
            id: e.id,
            role: Role::Employer,
            display_name: e.company_name.clone(),
            status: e.status.clone(),
            created_at: e.created_at,
        }));
        items.extend(agencies.iter().map(|a| ActivityItem {
            id: a.id,
            role: Role::Agency,
            display_name: a.agency_name.clone(),
            status: a.status.clone(),
            created_at: a.created_at,
        }));

        sort_recent(&mut items);
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item(name: &str, minutes_ago: i64) -> ActivityItem {
        ActivityItem {
            id: Uuid::new_v4(),
            role: Role::Candidate,
            display_name: name.to_string(),
            status: "pending".to_string(),
            created_at: Some(
                Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
                    - chrono::Duration::minutes(minutes_ago),
            ),
        }
    }

    #[test]
    fn breakdown_counts_each_status() {
        let statuses = ["pending", "approved", "pending", "rejected", "pending"];
        let breakdown = status_breakdown(statuses);
        assert_eq!(breakdown.total, 5);
        assert_eq!(breakdown.pending, 3);
        assert_eq!(breakdown.approved, 1);
        assert_eq!(breakdown.rejected, 1);
    }

    #[test]
    fn breakdown_ignores_unknown_statuses_in_per_state_counts() {
        let breakdown = status_breakdown(["pending", "archived"]);
        assert_eq!(breakdown.total, 2);
        assert_eq!(breakdown.pending, 1);
        assert_eq!(breakdown.approved, 0);
        assert_eq!(breakdown.rejected, 0);
    }

    #[test]
    fn recent_feed_is_newest_first() {
        let mut items = vec![item("old", 30), item("newest", 0), item("mid", 10)];
        sort_recent(&mut items);
        let names: Vec<_> = items.iter().map(|i| i.display_name.as_str()).collect();
        assert_eq!(names, ["newest", "mid", "old"]);
    }

    #[test]
    fn recent_feed_is_truncated_to_the_limit() {
        let mut items: Vec<ActivityItem> =
            (0..RECENT_ACTIVITY_LIMIT + 20).map(|i| item("x", i as i64)).collect();
        sort_recent(&mut items);
        assert_eq!(items.len(), RECENT_ACTIVITY_LIMIT);
    }

    #[test]
    fn records_without_timestamps_sort_last() {
        let mut no_ts = item("none", 0);
        no_ts.created_at = None;
        let mut items = vec![no_ts, item("stamped", 5)];
        sort_recent(&mut items);
        assert_eq!(items[0].display_name, "stamped");
        assert_eq!(items[1].display_name, "none");
    }
}
