//*** START FILE: src/inspection.rs ***//
use crate::alignment::matcher::{compare_source_to_verified, CompareReport};
use crate::types::lesson_data::VerifiedSegment;
use serde_json::Value;

/// State behind the content inspection screen: the canonical source text on
/// one side, the ordered pile of verified segments on the other. The report
/// is recomputed from scratch after every change; nothing is cached, so a
/// removed segment can never leave a stale match behind.
#[derive(Debug, Clone)]
pub struct InspectionSession {
    source_text: String,
    segments: Vec<VerifiedSegment>,
    next_segment_id: u32,
}

impl InspectionSession {
    pub fn new(source_text: &str) -> Self {
        InspectionSession {
            source_text: source_text.to_string(),
            segments: Vec::new(),
            next_segment_id: 1,
        }
    }

    pub fn set_source_text(&mut self, source_text: &str) {
        self.source_text = source_text.to_string();
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn segments(&self) -> &[VerifiedSegment] {
        &self.segments
    }

    /// Appends a verified segment and returns its generated id.
    pub fn add_segment(&mut self, text: &str, source_json: Value) -> String {
        let id = format!("seg_{}", self.next_segment_id);
        self.next_segment_id += 1;
        self.segments.push(VerifiedSegment {
            id: id.clone(),
            text: text.to_string(),
            source_json,
        });
        id
    }

    /// Removes the segment with the given id. Returns false when no segment
    /// carried it, which happens when a remove click races a reset.
    pub fn remove_segment(&mut self, id: &str) -> bool {
        let before = self.segments.len();
        self.segments.retain(|segment| segment.id != id);
        self.segments.len() != before
    }

    /// Segment texts joined with single spaces. The matcher treats any
    /// whitespace as free, so the joiner cannot introduce a mismatch of its
    /// own.
    pub fn verified_text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn report(&self) -> CompareReport {
        compare_source_to_verified(&self.source_text, &self.verified_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::matcher::CompareStatus;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn segments_accumulate_and_match_in_order() {
        let mut session = InspectionSession::new("A purely peer-to-peer version of electronic cash");
        session.add_segment("A purely peer-to-peer", json!({"order": 1}));
        session.add_segment("version of electronic cash", json!({"order": 2}));

        assert_eq!(session.verified_text(), "A purely peer-to-peer version of electronic cash");
        assert_eq!(session.report().status, CompareStatus::Match);
    }

    #[test]
    fn removing_a_segment_changes_the_report() {
        let mut session = InspectionSession::new("one two three");
        let first = session.add_segment("one", json!(null));
        session.add_segment("three", json!(null));

        // "one three" skips "two": the source runs into 't' where the
        // verified text still expects the matched prefix to continue.
        assert_eq!(session.report().status, CompareStatus::Mismatch);

        assert!(session.remove_segment(&first));
        assert!(!session.remove_segment(&first));
        assert_eq!(session.segments().len(), 1);
    }

    #[test]
    fn generated_ids_stay_unique_after_removals() {
        let mut session = InspectionSession::new("src");
        let a = session.add_segment("a", json!(null));
        session.remove_segment(&a);
        let b = session.add_segment("b", json!(null));
        assert_eq!(a, "seg_1");
        assert_eq!(b, "seg_2");
    }

    #[test]
    fn empty_source_reports_empty() {
        let session = InspectionSession::new("");
        assert_eq!(session.report().status, CompareStatus::Empty);
    }
}
//*** END FILE: src/inspection.rs ***//
