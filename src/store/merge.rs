// ABOUTME: Identifier-keyed merge of run collections and canonical run ordering
// ABOUTME: Incoming runs overwrite existing runs sharing an id; results are newest first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

use runlog_core::models::{Run, RunId};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Sort runs into canonical order: descending by date, ties keep their order
pub fn sort_runs(runs: &mut [Run]) {
    runs.sort_by_key(|run| Reverse(run.date()));
}

/// Union two collections by identifier, last writer wins
///
/// An overwritten run keeps the position of the run it replaces before the
/// final sort, so merging a collection with itself is a no-op.
#[must_use]
pub fn merge(existing: Vec<Run>, incoming: Vec<Run>) -> Vec<Run> {
    let mut merged = existing;
    let mut positions: HashMap<RunId, usize> = merged
        .iter()
        .enumerate()
        .map(|(index, run)| (run.id().clone(), index))
        .collect();

    for run in incoming {
        if let Some(&index) = positions.get(run.id()) {
            merged[index] = run;
        } else {
            positions.insert(run.id().clone(), merged.len());
            merged.push(run);
        }
    }

    sort_runs(&mut merged);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn run(id: &str, day: u32, km: f64) -> Run {
        Run::new(
            RunId::from(id),
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            km,
            1800,
        )
    }

    #[test]
    fn test_incoming_overwrites_by_id() {
        let merged = merge(vec![run("a", 1, 5.0), run("b", 2, 6.0)], vec![run("a", 1, 8.0)]);
        assert_eq!(merged.len(), 2);
        let a = merged.iter().find(|r| r.id().as_str() == "a").unwrap();
        assert!((a.distance_km() - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_result_is_newest_first() {
        let merged = merge(vec![run("a", 1, 5.0)], vec![run("c", 9, 5.0), run("b", 4, 5.0)]);
        let ids: Vec<&str> = merged.iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, ["c", "b", "a"]);
    }

    #[test]
    fn test_same_day_ties_are_stable() {
        let merged = merge(vec![run("first", 3, 5.0)], vec![run("second", 3, 5.0)]);
        let ids: Vec<&str> = merged.iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[test]
    fn test_merge_with_self_is_idempotent() {
        let runs = vec![run("b", 5, 6.0), run("a", 2, 5.0)];
        assert_eq!(merge(runs.clone(), runs.clone()), runs);
    }
}
