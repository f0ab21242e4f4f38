//! Running top-N collector with distinctness and deterministic ordering.

use std::{cmp::Ordering, collections::BTreeSet};

/// One retained team: its member indices into the pool, in draw order,
/// plus the bookkeeping its ordering needs.
#[derive(Debug, Clone)]
pub(crate) struct TopEntry {
    pub indices: Vec<usize>,
    pub fitness: f32,
    mean_index: f32,
    order: u64,
}

impl TopEntry {
    /// Fitness descending, then lower mean pool index, then first seen.
    fn cmp_rank(&self, other: &Self) -> Ordering {
        other
            .fitness
            .partial_cmp(&self.fitness)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                self.mean_index
                    .partial_cmp(&other.mean_index)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| self.order.cmp(&other.order))
    }
}

/// Keeps the best `capacity` distinct teams seen so far.
///
/// Two teams are the same team when their sorted member-index multisets
/// match; the first occurrence wins and later duplicates are ignored.
#[derive(Debug)]
pub(crate) struct TopTeams {
    capacity: usize,
    entries: Vec<TopEntry>,
    retained_keys: BTreeSet<Vec<usize>>,
    next_order: u64,
}

impl TopTeams {
    pub fn new(capacity: usize) -> Self {
        TopTeams {
            capacity,
            entries: Vec::new(),
            retained_keys: BTreeSet::new(),
            next_order: 0,
        }
    }

    /// Offers one evaluated team.
    pub fn offer(&mut self, indices: &[usize], fitness: f32) {
        let mut key: Vec<usize> = indices.to_vec();
        key.sort_unstable();
        if self.retained_keys.contains(&key) {
            return;
        }

        #[expect(clippy::cast_precision_loss)]
        let mean_index = if indices.is_empty() {
            0.0
        } else {
            indices.iter().sum::<usize>() as f32 / indices.len() as f32
        };
        let entry = TopEntry {
            indices: indices.to_vec(),
            fitness,
            mean_index,
            order: self.next_order,
        };
        self.next_order += 1;

        let position = self
            .entries
            .binary_search_by(|existing| existing.cmp_rank(&entry))
            .unwrap_or_else(|insert_at| insert_at);
        if position >= self.capacity {
            return;
        }
        self.entries.insert(position, entry);
        self.retained_keys.insert(key);

        if self.entries.len() > self.capacity {
            let evicted = self.entries.pop().unwrap();
            let mut evicted_key = evicted.indices;
            evicted_key.sort_unstable();
            self.retained_keys.remove(&evicted_key);
        }
    }

    /// Best retained fitness, if any team was offered.
    pub fn best_fitness(&self) -> Option<f32> {
        self.entries.first().map(|e| e.fitness)
    }

    /// Retained teams, best first.
    pub fn into_entries(self) -> Vec<TopEntry> {
        self.entries
    }
}
