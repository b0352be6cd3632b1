use crate::types::{MatchRecord, ResolvedSection};

/// Build one record per resolved section, in input order.
///
/// Every record carries the full question list and the source label. Empty
/// inputs are valid: no resolved sections means no records.
#[must_use]
pub fn build_records(
    questions: &[String],
    resolved: Vec<ResolvedSection>,
    source: &str,
) -> Vec<MatchRecord> {
    resolved
        .into_iter()
        .map(|section| MatchRecord {
            questions: questions.to_vec(),
            section_name: section.name,
            section_content: section.text,
            source_filename: source.to_string(),
        })
        .collect()
}

/// Single-document line format: topic, joined questions, section text.
#[must_use]
pub fn render_brief(topic_id: &str, record: &MatchRecord) -> String {
    format!(
        "{topic_id}: {} in the following text: {}",
        record.questions.join(", "),
        record.section_content
    )
}

/// Multi-document line format: adds section name and source filename.
#[must_use]
pub fn render_detailed(topic_id: &str, record: &MatchRecord) -> String {
    format!(
        "{topic_id}: {} in \n\tsection '{}' \n\t(source: {}):\n {}\n",
        record.questions.join(", "),
        record.section_name,
        record.source_filename,
        record.section_content
    )
}
