use crate::types::{ResolvedSection, SectionMap};

/// Resolve candidate section names against a document's section map.
///
/// For each name in `candidates`, in order, the name is looked up in
/// `sections`; present names are returned paired with their text, absent
/// names are silently skipped. Duplicate candidates resolve to duplicate
/// entries when the name exists in the map.
#[must_use]
pub fn resolve_sections(candidates: &[String], sections: &SectionMap) -> Vec<ResolvedSection> {
    candidates
        .iter()
        .filter_map(|name| {
            sections.get(name).map(|text| ResolvedSection {
                name: name.clone(),
                text: text.clone(),
            })
        })
        .collect()
}
