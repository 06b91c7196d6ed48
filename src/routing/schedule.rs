//! Visit-day assignment.
//!
//! Ranks circles by member count, keeps the top N, sequences them with the
//! nearest-neighbor heuristic, and numbers them `1, 2, 3, …` in route order.
//! Every other circle loses its visit order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::sequencer::nearest_neighbor_order;
use crate::models::{Circle, Coordinate};

/// Which circles compete for the top-N slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingScope {
    /// Top N per owner; each owner's days start at 1.
    #[default]
    PerOwner,
    /// Top N across all owners, then sequenced per owner with one day
    /// counter running across owner groups in the order owners appear in
    /// the ranking.
    Global,
}

/// Parameters for [`assign_visit_days`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Number of circles to schedule (per owner or in total, by scope).
    pub top_count: usize,
    #[serde(default)]
    pub scope: RankingScope,
}

impl ScheduleConfig {
    pub fn per_owner(top_count: usize) -> Self {
        Self {
            top_count,
            scope: RankingScope::PerOwner,
        }
    }

    pub fn global(top_count: usize) -> Self {
        Self {
            top_count,
            scope: RankingScope::Global,
        }
    }
}

/// Assigns `visit_order` to the largest circles in route order.
///
/// All existing visit orders are cleared first, so repeated calls never
/// leave stale values. Ranking is by descending `member_count`, ties by
/// input order. Each owner group starts from its entry in `homes` if
/// present, else from the centroid of the circles being sequenced.
///
/// Returns the number of circles scheduled.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use u_territory::models::{Circle, Coordinate};
/// use u_territory::routing::{assign_visit_days, ScheduleConfig};
///
/// let members = |n: usize| (0..n).map(|i| format!("m{i}")).collect::<Vec<_>>();
/// let mut circles = vec![
///     Circle::new("1", Coordinate::new(0.0, 0.0), 1000.0, "#000", "E1", members(2)),
///     Circle::new("2", Coordinate::new(0.0, 0.1), 1000.0, "#000", "E1", members(5)),
///     Circle::new("3", Coordinate::new(0.0, 0.2), 1000.0, "#000", "E1", members(4)),
/// ];
/// let scheduled = assign_visit_days(&mut circles, &ScheduleConfig::per_owner(2), &HashMap::new());
/// assert_eq!(scheduled, 2);
/// assert_eq!(circles[0].visit_order(), None);
/// assert!(circles[1].visit_order().is_some());
/// assert!(circles[2].visit_order().is_some());
/// ```
pub fn assign_visit_days(
    circles: &mut [Circle],
    config: &ScheduleConfig,
    homes: &HashMap<String, Coordinate>,
) -> usize {
    for c in circles.iter_mut() {
        c.clear_visit_order();
    }
    if config.top_count == 0 || circles.is_empty() {
        return 0;
    }

    let groups: Vec<Vec<usize>> = match config.scope {
        RankingScope::PerOwner => group_by_owner(circles, (0..circles.len()).collect())
            .into_iter()
            .map(|group| top_by_size(circles, group, config.top_count))
            .collect(),
        RankingScope::Global => {
            let ranked = top_by_size(circles, (0..circles.len()).collect(), config.top_count);
            group_by_owner(circles, ranked)
        }
    };

    let mut day: u32 = 0;
    let mut scheduled = 0;
    for group in groups {
        if config.scope == RankingScope::PerOwner {
            day = 0;
        }
        let owner = circles[group[0]].owner().to_string();
        let centers: Vec<Coordinate> = group.iter().map(|&i| circles[i].center()).collect();
        let start = match homes.get(&owner) {
            Some(&home) => home,
            None => Coordinate::mean(centers.iter().copied()).unwrap_or_default(),
        };

        for pos in nearest_neighbor_order(&centers, start) {
            day += 1;
            circles[group[pos]].set_visit_order(day);
            scheduled += 1;
        }
        log::debug!(
            "schedule: owner {owner} got {} visit days, last day {day}",
            group.len()
        );
    }

    log::info!(
        "schedule: {scheduled} of {} circles scheduled ({:?}, top {})",
        circles.len(),
        config.scope,
        config.top_count
    );
    scheduled
}

/// The `top` indices with the most members, largest first, ties by
/// position in `indices`.
fn top_by_size(circles: &[Circle], mut indices: Vec<usize>, top: usize) -> Vec<usize> {
    indices.sort_by(|&a, &b| circles[b].member_count().cmp(&circles[a].member_count()));
    indices.truncate(top);
    indices
}

/// Splits `indices` into per-owner groups, owners in first-encounter order,
/// each group keeping the order of `indices`.
fn group_by_owner(circles: &[Circle], indices: Vec<usize>) -> Vec<Vec<usize>> {
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut slot: HashMap<&str, usize> = HashMap::new();
    for i in indices {
        let owner = circles[i].owner();
        match slot.get(owner) {
            Some(&g) => groups[g].push(i),
            None => {
                slot.insert(owner, groups.len());
                groups.push(vec![i]);
            }
        }
    }
    groups
}
