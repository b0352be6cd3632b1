use crate::record::build_records;
use crate::resolve::resolve_sections;
use crate::types::{GroupedMatches, SectionMap, TopicEntry};

/// Fold one document's matches into the running group map.
///
/// For each entry, in order: resolve its candidate sections against
/// `sections`, build records, and append them under the entry's topic id.
/// A topic that matches nothing still establishes its key, so a processed
/// topic is always visible in the output even when empty. Entries sharing a
/// topic id accumulate into the same group.
pub fn group_topics(
    entries: &[TopicEntry],
    sections: &SectionMap,
    source: &str,
    groups: &mut GroupedMatches,
) {
    for entry in entries {
        let resolved = resolve_sections(&entry.candidate_sections, sections);
        let records = build_records(&entry.questions, resolved, source);
        groups.append(&entry.topic_id, records);
    }
}
