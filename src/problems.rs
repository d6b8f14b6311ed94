use std::collections::HashMap;
use std::rc::Rc;

use serde::Deserialize;

const BUNDLED_PROBLEM_STATEMENTS: &str = include_str!("../data/problem_statements.json");

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemStatement {
    pub key: String,
    pub id: String,
    pub domain: String,
    pub problem_text: String,
}

#[derive(Debug, Default, PartialEq)]
pub struct ProblemRegistry {
    records: Vec<Rc<ProblemStatement>>,
    by_key: HashMap<String, usize>,
}

impl ProblemRegistry {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        let records: Vec<ProblemStatement> = serde_json::from_str(raw)
            .map_err(|error| format!("problem statements are not valid JSON: {error}"))?;

        let mut by_key = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let key = record.key.as_str();
            if key.trim().is_empty() {
                return Err(format!("problem statement at position {index} has an empty key"));
            }
            if key.trim() != key {
                return Err(format!("problem statement key `{key}` has surrounding whitespace"));
            }
            if by_key.insert(key.to_string(), index).is_some() {
                return Err(format!("duplicate problem statement key `{key}`"));
            }
        }

        Ok(Self {
            records: records.into_iter().map(Rc::new).collect(),
            by_key,
        })
    }

    pub fn bundled() -> Result<Self, String> {
        Self::from_json(BUNDLED_PROBLEM_STATEMENTS)
    }

    pub fn get(&self, key: &str) -> Option<&Rc<ProblemStatement>> {
        self.by_key.get(key).and_then(|index| self.records.get(*index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn by_domain(&self) -> Vec<(&str, Vec<&Rc<ProblemStatement>>)> {
        let mut groups: Vec<(&str, Vec<&Rc<ProblemStatement>>)> = Vec::new();

        for record in &self.records {
            match groups
                .iter_mut()
                .find(|(domain, _)| *domain == record.domain.as_str())
            {
                Some((_, members)) => members.push(record),
                None => groups.push((record.domain.as_str(), vec![record])),
            }
        }

        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_records_load() {
        let registry = ProblemRegistry::bundled().expect("bundled data parses");

        assert_eq!(registry.len(), 13);
        for index in 1..=13 {
            let key = format!("NH-SJC-{index:03}");
            let record = registry.get(&key).expect("every key is present");
            assert_eq!(record.id, format!("NH-SJC-PS-{index:03}"));
            assert!(!record.problem_text.trim().is_empty());
        }
    }

    #[test]
    fn first_record_matches_published_fields() {
        let registry = ProblemRegistry::bundled().expect("bundled data parses");
        let record = registry.get("NH-SJC-001").expect("NH-SJC-001 exists");

        assert_eq!(record.id, "NH-SJC-PS-001");
        assert_eq!(record.domain, "Gen AI for Business Applications");
        assert!(record.problem_text.starts_with("Retailers manage huge volumes"));
    }

    #[test]
    fn lookup_is_by_key_not_published_id() {
        let registry = ProblemRegistry::bundled().expect("bundled data parses");

        assert!(registry.get("NH-SJC-PS-001").is_none());
        assert!(registry.get("").is_none());
    }

    #[test]
    fn domains_keep_file_order() {
        let registry = ProblemRegistry::bundled().expect("bundled data parses");
        let domains: Vec<&str> = registry
            .by_domain()
            .into_iter()
            .map(|(domain, members)| {
                assert!(!members.is_empty());
                domain
            })
            .collect();

        assert_eq!(
            domains,
            vec![
                "Gen AI for Business Applications",
                "Cyber Security",
                "AI/ML/DL",
                "Internet of Things (IoT)",
                "Innovation using Web 3.0",
            ]
        );
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let raw = r#"[
            {"key": "A", "id": "PS-1", "domain": "D", "problemText": "one"},
            {"key": "A", "id": "PS-2", "domain": "D", "problemText": "two"}
        ]"#;

        let error = ProblemRegistry::from_json(raw).expect_err("duplicate key must fail");
        assert!(error.contains("duplicate"));
    }

    #[test]
    fn empty_keys_are_rejected() {
        let raw = r#"[{"key": "  ", "id": "PS-1", "domain": "D", "problemText": "one"}]"#;
        assert!(ProblemRegistry::from_json(raw).is_err());
    }

    #[test]
    fn padded_keys_are_rejected() {
        let raw = r#"[{"key": " A", "id": "PS-1", "domain": "D", "problemText": "one"}]"#;

        let error = ProblemRegistry::from_json(raw).expect_err("padded key must fail");
        assert!(error.contains("whitespace"));
    }

    #[test]
    fn problem_text_is_stored_verbatim() {
        let registry = ProblemRegistry::bundled().expect("bundled data parses");
        let record = registry.get("NH-SJC-001").expect("NH-SJC-001 exists");

        assert!(record.problem_text.contains("\n    The system must:\n"));
    }

    #[test]
    fn malformed_json_is_reported() {
        let error = ProblemRegistry::from_json("{").expect_err("truncated JSON must fail");
        assert!(error.contains("not valid JSON"));
    }
}
