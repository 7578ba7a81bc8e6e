use super::config::StoreConfig;
use super::error::StoreError;
use crate::core::models::ids::AlgorithmId;
use crate::core::models::record::{AlgorithmFields, AlgorithmRecord};
use std::collections::HashSet;
use tracing::{debug, trace, warn};

/// A loaded record whose id was already held by an earlier record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdReassignment {
    /// Position of the record in the loaded sequence.
    pub index: usize,
    pub from: AlgorithmId,
    pub to: AlgorithmId,
}

/// Ordered in-memory collection of algorithm records.
///
/// Insertion order is display order. The store never touches the disk; callers
/// persist after each successful mutation.
#[derive(Debug, Clone, Default)]
pub struct Store {
    records: Vec<AlgorithmRecord>,
    config: StoreConfig,
    // Highest id handed out or loaded during this session.
    high_water: i64,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            records: Vec::new(),
            config,
            high_water: 0,
        }
    }

    /// Seeds the store with previously persisted records, keeping their order.
    ///
    /// Records beyond the configured limit are dropped. A record whose id is
    /// already held by an earlier one gets a fresh id; every such change is
    /// returned.
    pub fn from_records(
        records: Vec<AlgorithmRecord>,
        config: StoreConfig,
    ) -> (Self, Vec<IdReassignment>) {
        let mut records = records;
        if let Some(limit) = config.max_records {
            if records.len() > limit {
                debug!(
                    "Dropping {} records beyond the limit of {}.",
                    records.len() - limit,
                    limit
                );
                records.truncate(limit);
            }
        }
        let high_water = records.iter().map(|r| r.id.0).max().unwrap_or(0).max(0);
        let mut store = Self {
            records,
            config,
            high_water,
        };

        let mut seen = HashSet::with_capacity(store.records.len());
        let mut reassigned = Vec::new();
        for index in 0..store.records.len() {
            let from = store.records[index].id;
            if seen.insert(from) {
                continue;
            }
            match store.next_id() {
                Some(to) => {
                    store.records[index].id = to;
                    seen.insert(to);
                    debug!("Loaded record #{} reused id {}; reassigned to {}.", index, from, to);
                    reassigned.push(IdReassignment { index, from, to });
                }
                None => warn!("No free id left for loaded record #{} (id {}).", index, from),
            }
        }
        (store, reassigned)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn add(&mut self, fields: AlgorithmFields) -> Result<AlgorithmId, StoreError> {
        if let Some(limit) = self.config.max_records {
            if self.records.len() >= limit {
                return Err(StoreError::CapacityExceeded { limit });
            }
        }
        let id = self.next_id().ok_or(StoreError::IdsExhausted)?;
        self.records.push(AlgorithmRecord::new(id, fields));
        debug!("Added algorithm {}.", id);
        Ok(id)
    }

    pub fn update(&mut self, id: AlgorithmId, fields: AlgorithmFields) -> Result<(), StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        record.apply(fields);
        debug!("Updated algorithm {}.", id);
        Ok(())
    }

    /// Removes the record with `id`, returning it if it existed.
    pub fn delete(&mut self, id: AlgorithmId) -> Option<AlgorithmRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        debug!("Deleted algorithm {}.", id);
        Some(self.records.remove(index))
    }

    pub fn find(&self, id: AlgorithmId) -> Option<&AlgorithmRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn all(&self) -> &[AlgorithmRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn next_id(&mut self) -> Option<AlgorithmId> {
        // Stored ids may be arbitrary, so also step past any currently held id.
        let held_max = self.records.iter().map(|r| r.id.0).max().unwrap_or(0);
        let id = match self.high_water.max(held_max).checked_add(1) {
            Some(id) => {
                self.high_water = id;
                id
            }
            None => {
                // The top of the range is taken; use the highest free id instead.
                let held: HashSet<i64> = self.records.iter().map(|r| r.id.0).collect();
                (1..=i64::MAX).rev().find(|candidate| !held.contains(candidate))?
            }
        };
        trace!("Issuing algorithm id {}.", id);
        Some(AlgorithmId(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::record::AlgorithmKind;
    use std::collections::HashSet;

    fn fields(name: &str) -> AlgorithmFields {
        AlgorithmFields {
            name: name.to_string(),
            kind: AlgorithmKind::Pll,
            formula: "R U R' U'".to_string(),
            ..Default::default()
        }
    }

    fn record(id: i64, name: &str) -> AlgorithmRecord {
        AlgorithmRecord::new(AlgorithmId(id), fields(name))
    }

    mod add {
        use super::*;

        #[test]
        fn appends_in_insertion_order() {
            let mut store = Store::default();
            store.add(fields("A")).unwrap();
            store.add(fields("B")).unwrap();
            store.add(fields("C")).unwrap();
            let names: Vec<_> = store.all().iter().map(|r| r.name.as_str()).collect();
            assert_eq!(names, ["A", "B", "C"]);
        }

        #[test]
        fn ids_are_unique_across_many_adds() {
            let mut store = Store::new(StoreConfig { max_records: None });
            let mut seen = HashSet::new();
            for i in 0..200 {
                let id = store.add(fields(&format!("alg {i}"))).unwrap();
                assert!(seen.insert(id));
            }
        }

        #[test]
        fn ids_continue_after_loaded_records() {
            let (mut store, _) = Store::from_records(
                vec![record(1_700_000_123, "a"), record(5, "b")],
                StoreConfig::default(),
            );
            let id = store.add(fields("c")).unwrap();
            assert_eq!(id, AlgorithmId(1_700_000_124));
        }

        #[test]
        fn id_at_the_top_of_the_range_is_not_issued_twice() {
            let (mut store, _) =
                Store::from_records(vec![record(i64::MAX, "top")], StoreConfig::default());
            let first = store.add(fields("a")).unwrap();
            let second = store.add(fields("b")).unwrap();
            assert_eq!(first, AlgorithmId(i64::MAX - 1));
            assert_eq!(second, AlgorithmId(i64::MAX - 2));

            let ids: HashSet<_> = store.all().iter().map(|r| r.id).collect();
            assert_eq!(ids.len(), 3);
        }

        #[test]
        fn deleted_id_is_not_reissued() {
            let mut store = Store::default();
            let _first = store.add(fields("a")).unwrap();
            let second = store.add(fields("b")).unwrap();
            store.delete(second).unwrap();
            let third = store.add(fields("c")).unwrap();
            assert_ne!(third, second);
        }

        #[test]
        fn fails_when_limit_is_reached() {
            let mut store = Store::new(StoreConfig {
                max_records: Some(2),
            });
            store.add(fields("a")).unwrap();
            store.add(fields("b")).unwrap();
            assert_eq!(
                store.add(fields("c")),
                Err(StoreError::CapacityExceeded { limit: 2 })
            );
            assert_eq!(store.len(), 2);
        }
    }

    mod update {
        use super::*;

        #[test]
        fn overwrites_fields_in_place() {
            let mut store = Store::default();
            let a = store.add(fields("a")).unwrap();
            let b = store.add(fields("b")).unwrap();
            store.update(a, fields("renamed")).unwrap();
            assert_eq!(store.all()[0].id, a);
            assert_eq!(store.all()[0].name, "renamed");
            assert_eq!(store.all()[1].id, b);
        }

        #[test]
        fn missing_id_reports_not_found_and_changes_nothing() {
            let mut store = Store::default();
            store.add(fields("a")).unwrap();
            let before = store.all().to_vec();
            assert_eq!(
                store.update(AlgorithmId(999), fields("x")),
                Err(StoreError::NotFound(AlgorithmId(999)))
            );
            assert_eq!(store.all(), before.as_slice());
        }
    }

    mod delete {
        use super::*;

        #[test]
        fn removes_record_and_keeps_order_of_the_rest() {
            let mut store = Store::default();
            let a = store.add(fields("a")).unwrap();
            let b = store.add(fields("b")).unwrap();
            let c = store.add(fields("c")).unwrap();
            assert!(store.delete(b).is_some());
            assert!(store.find(b).is_none());
            let ids: Vec<_> = store.all().iter().map(|r| r.id).collect();
            assert_eq!(ids, [a, c]);
        }

        #[test]
        fn missing_id_is_a_no_op() {
            let mut store = Store::default();
            store.add(fields("a")).unwrap();
            assert!(store.delete(AlgorithmId(42)).is_none());
            assert_eq!(store.len(), 1);
        }
    }

    mod from_records {
        use super::*;

        #[test]
        fn duplicate_ids_get_fresh_ones() {
            let (mut store, reassigned) = Store::from_records(
                vec![record(0, "a"), record(0, "b"), record(4, "c"), record(4, "d")],
                StoreConfig::default(),
            );
            let ids: Vec<_> = store.all().iter().map(|r| r.id.0).collect();
            assert_eq!(ids, [0, 5, 4, 6]);
            assert_eq!(
                reassigned,
                [
                    IdReassignment {
                        index: 1,
                        from: AlgorithmId(0),
                        to: AlgorithmId(5)
                    },
                    IdReassignment {
                        index: 3,
                        from: AlgorithmId(4),
                        to: AlgorithmId(6)
                    },
                ]
            );

            assert!(store.delete(AlgorithmId(0)).is_some());
            assert!(store.find(AlgorithmId(0)).is_none());
            assert_eq!(store.find(AlgorithmId(5)).unwrap().name, "b");
            assert_eq!(store.add(fields("e")).unwrap(), AlgorithmId(7));
        }

        #[test]
        fn unique_ids_are_left_alone() {
            let (_, reassigned) = Store::from_records(
                vec![record(3, "a"), record(1, "b")],
                StoreConfig::default(),
            );
            assert!(reassigned.is_empty());
        }
    }

    #[test]
    fn from_records_truncates_beyond_limit() {
        let (store, _) = Store::from_records(
            vec![record(1, "a"), record(2, "b"), record(3, "c")],
            StoreConfig {
                max_records: Some(2),
            },
        );
        assert_eq!(store.len(), 2);
        assert!(store.find(AlgorithmId(3)).is_none());
    }
}
