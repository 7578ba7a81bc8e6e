use crate::core::models::record::AlgorithmRecord;

/// Returns `true` when `record` should be listed for `query`.
///
/// The name is compared case-insensitively; type and formula are compared
/// case-sensitively. An empty query matches everything.
pub fn matches(record: &AlgorithmRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    record.name.to_lowercase().contains(&query.to_lowercase())
        || record.kind.as_str().contains(query)
        || record.formula.contains(query)
}

/// Filters `records` down to those matching `query`, keeping their order.
pub fn filter<'a>(records: &'a [AlgorithmRecord], query: &str) -> Vec<&'a AlgorithmRecord> {
    records.iter().filter(|r| matches(r, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ids::AlgorithmId;
    use crate::core::models::record::{AlgorithmFields, AlgorithmKind};

    fn record(id: i64, name: &str, kind: AlgorithmKind, formula: &str) -> AlgorithmRecord {
        AlgorithmRecord::new(
            AlgorithmId(id),
            AlgorithmFields {
                name: name.to_string(),
                kind,
                formula: formula.to_string(),
                ..Default::default()
            },
        )
    }

    fn sample() -> Vec<AlgorithmRecord> {
        vec![
            record(1, "Sune", AlgorithmKind::Oll, "R U R' U R U2 R'"),
            record(2, "T-Perm", AlgorithmKind::Pll, "R U R' U' R' F R2 U' R' U' R U R' F'"),
            record(3, "Antisune", AlgorithmKind::Oll, "R U2 R' U' R U' R'"),
            record(4, "Pair insert", AlgorithmKind::F2l, "U R U' R'"),
        ]
    }

    fn ids(found: &[&AlgorithmRecord]) -> Vec<i64> {
        found.iter().map(|r| r.id.0).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let records = sample();
        assert_eq!(ids(&filter(&records, "")), [1, 2, 3, 4]);
    }

    #[test]
    fn name_matches_ignore_case() {
        let records = sample();
        assert_eq!(ids(&filter(&records, "SUNE")), [1, 3]);
        assert_eq!(ids(&filter(&records, "t-perm")), [2]);
    }

    #[test]
    fn type_matches_are_case_sensitive() {
        let records = sample();
        assert_eq!(ids(&filter(&records, "OLL")), [1, 3]);
        assert!(filter(&records, "oll").is_empty());
    }

    #[test]
    fn formula_matches_are_case_sensitive() {
        let records = sample();
        assert_eq!(ids(&filter(&records, "F'")), [2]);
        assert_eq!(ids(&filter(&records, "U2")), [1, 3]);
        assert!(filter(&records, "f'").is_empty());
    }

    #[test]
    fn custom_type_is_searchable() {
        let mut records = sample();
        records.push(record(5, "x", AlgorithmKind::Custom("VLS".into()), "R"));
        assert_eq!(ids(&filter(&records, "VLS")), [5]);
    }

    #[test]
    fn every_result_satisfies_one_rule_and_is_a_subset() {
        let records = sample();
        for query in ["R", "r", "Perm", "U'", "F2L", "zzz", "in"] {
            let found = filter(&records, query);
            assert!(found.len() <= records.len());
            for r in &found {
                assert!(matches(r, query));
            }
        }
    }
}
