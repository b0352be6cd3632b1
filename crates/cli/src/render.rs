use sectionmatch_matcher::{render_brief, render_detailed, GroupedMatches, MatchRecord};

/// Console rendering: topic header, then one indented bullet per record.
/// Topics with no records still print their header.
fn lines(groups: &GroupedMatches, render: fn(&str, &MatchRecord) -> String) -> Vec<String> {
    let mut out = Vec::new();
    for (topic, records) in groups.iter() {
        out.push(format!("{topic}:"));
        for record in records {
            out.push(format!("  - {}", render(topic, record)));
        }
        out.push(String::new());
    }
    out
}

pub fn brief_lines(groups: &GroupedMatches) -> Vec<String> {
    lines(groups, render_brief)
}

pub fn detailed_lines(groups: &GroupedMatches) -> Vec<String> {
    lines(groups, render_detailed)
}
