use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from section name to section text, as carried by a document's
/// `sections` field.
pub type SectionMap = HashMap<String, String>;

/// One entry of the topic specification input.
///
/// Field defaults mirror the input schema: every key is optional and
/// defaults to empty. Normalization happens here, at parse time, so the
/// matching code never handles missing fields. Topic ids are not required
/// to be unique; entries sharing an id accumulate into the same group.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopicEntry {
    #[serde(rename = "data", default)]
    pub topic_id: String,

    #[serde(default)]
    pub questions: Vec<String>,

    #[serde(rename = "Possible sections", default)]
    pub candidate_sections: Vec<String>,
}

/// A parsed document input: an arbitrary source broken into named sections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub sections: SectionMap,
}

/// A candidate section name confirmed present in a document's section map,
/// paired with its text. Ephemeral: produced and consumed within one
/// document's processing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSection {
    pub name: String,
    pub text: String,
}

/// One output record: a topic's questions joined with one matched section,
/// tagged with provenance. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub questions: Vec<String>,
    pub section_name: String,
    pub section_content: String,
    pub source_filename: String,
}

/// Grouped result: topic id -> ordered records for that topic across all
/// processed documents.
///
/// Append-only. First-seen topic order and append order within a topic are
/// preserved, which is why this wraps an `IndexMap` rather than a hash map.
/// Serializes directly to a JSON object keyed by topic id.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupedMatches {
    #[serde(flatten)]
    groups: IndexMap<String, Vec<MatchRecord>>,
}

impl GroupedMatches {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append records under `topic_id`, creating the key with an empty
    /// sequence first if absent. The key is established even when `records`
    /// is empty.
    pub fn append(&mut self, topic_id: &str, records: Vec<MatchRecord>) {
        self.groups
            .entry(topic_id.to_string())
            .or_default()
            .extend(records);
    }

    #[must_use]
    pub fn records(&self, topic_id: &str) -> Option<&[MatchRecord]> {
        self.groups.get(topic_id).map(Vec::as_slice)
    }

    pub fn contains_topic(&self, topic_id: &str) -> bool {
        self.groups.contains_key(topic_id)
    }

    /// Topics in first-seen order, each with its records in append order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[MatchRecord])> {
        self.groups
            .iter()
            .map(|(topic, records)| (topic.as_str(), records.as_slice()))
    }

    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(section: &str) -> MatchRecord {
        MatchRecord {
            questions: vec!["Q1".to_string()],
            section_name: section.to_string(),
            section_content: "text".to_string(),
            source_filename: "doc.json".to_string(),
        }
    }

    #[test]
    fn topic_entry_defaults_missing_fields() {
        let entry: TopicEntry = serde_json::from_str("{}").expect("parse");
        assert_eq!(entry.topic_id, "");
        assert!(entry.questions.is_empty());
        assert!(entry.candidate_sections.is_empty());
    }

    #[test]
    fn topic_entry_reads_reference_field_names() {
        let entry: TopicEntry = serde_json::from_str(
            r#"{"data":"T1","questions":["Q1"],"Possible sections":["S1","S2"]}"#,
        )
        .expect("parse");
        assert_eq!(entry.topic_id, "T1");
        assert_eq!(entry.questions, vec!["Q1"]);
        assert_eq!(entry.candidate_sections, vec!["S1", "S2"]);
    }

    #[test]
    fn document_defaults_missing_sections() {
        let doc: Document = serde_json::from_str("{}").expect("parse");
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn append_creates_key_even_without_records() {
        let mut groups = GroupedMatches::new();
        groups.append("T1", Vec::new());
        assert!(groups.contains_topic("T1"));
        assert_eq!(groups.records("T1"), Some(&[][..]));
    }

    #[test]
    fn append_extends_existing_group_in_order() {
        let mut groups = GroupedMatches::new();
        groups.append("T1", vec![record("A")]);
        groups.append("T1", vec![record("B")]);

        let records = groups.records("T1").expect("group");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].section_name, "A");
        assert_eq!(records[1].section_name, "B");
    }

    #[test]
    fn preserves_first_seen_topic_order() {
        let mut groups = GroupedMatches::new();
        groups.append("Z", Vec::new());
        groups.append("A", Vec::new());
        groups.append("Z", vec![record("S")]);

        let topics: Vec<&str> = groups.iter().map(|(topic, _)| topic).collect();
        assert_eq!(topics, vec!["Z", "A"]);
    }

    #[test]
    fn serializes_to_json_object_keyed_by_topic() {
        let mut groups = GroupedMatches::new();
        groups.append("T", vec![record("Intro")]);

        let value = serde_json::to_value(&groups).expect("serialize");
        assert_eq!(value["T"][0]["section_name"], "Intro");
    }
}
