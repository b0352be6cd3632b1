//! # Sectionmatch Matcher
//!
//! Pure matching and grouping over already-parsed inputs.
//!
//! ## Pipeline
//!
//! ```text
//! Topic spec (entries)        Document (section map)
//!     │                           │
//!     └──> Section Resolver <─────┘
//!            └─> Resolved sections (candidate order)
//!                 │
//!                 ├──> Record Builder
//!                 │      └─> MatchRecord per resolved section
//!                 │
//!                 └──> Topic Grouper
//!                        └─> GroupedMatches (topic id -> records)
//! ```
//!
//! ## Example
//!
//! ```
//! use sectionmatch_matcher::{group_topics, GroupedMatches, SectionMap, TopicEntry};
//!
//! let entries = vec![TopicEntry {
//!     topic_id: "T1".to_string(),
//!     questions: vec!["Q1".to_string()],
//!     candidate_sections: vec!["S1".to_string()],
//! }];
//! let mut sections = SectionMap::new();
//! sections.insert("S1".to_string(), "Text1".to_string());
//!
//! let mut groups = GroupedMatches::new();
//! group_topics(&entries, &sections, "doc1.json", &mut groups);
//! assert_eq!(groups.records("T1").unwrap().len(), 1);
//! ```

mod group;
mod record;
mod resolve;
mod types;

pub use group::group_topics;
pub use record::{build_records, render_brief, render_detailed};
pub use resolve::resolve_sections;
pub use types::{Document, GroupedMatches, MatchRecord, ResolvedSection, SectionMap, TopicEntry};
