//! Parsing of free-text model output into a subject/body draft.

use crate::types::EmailDraft;

/// Marker that identifies a subject line in model output.
pub const SUBJECT_MARKER: &str = "Subject:";

/// Placeholder subject used when no subject line is recognized.
pub const DEFAULT_SUBJECT: &str = "Default Subject";

/// Split free-text model output into a subject and body.
///
/// This is a best-effort heuristic; there is no guarantee the model puts the
/// subject on the first line. Rules:
///
/// - If the first line starts with `Subject:` and carries text after the
///   marker, that text (trimmed) is the subject and the remaining lines form
///   the body. When there are no remaining lines, the body falls back to the
///   entire output so a recognized subject never produces an empty body.
/// - Otherwise the subject is [`DEFAULT_SUBJECT`] and the whole output is the
///   body. A bare `Subject:` marker with nothing after it counts as
///   unrecognized.
/// - Only the first line is inspected; later `Subject:` occurrences stay in
///   the body.
pub fn parse_draft(text: &str) -> EmailDraft {
    let mut lines = text.split('\n');
    let first = lines.next().unwrap_or("");

    if let Some(rest) = first.strip_prefix(SUBJECT_MARKER) {
        let subject = rest.trim();
        if !subject.is_empty() {
            let remainder = lines.collect::<Vec<_>>().join("\n");
            let body = if remainder.is_empty() {
                text.to_string()
            } else {
                remainder
            };
            return EmailDraft::new(subject, body);
        }
    }

    EmailDraft::new(DEFAULT_SUBJECT, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_output() {
        let draft = parse_draft("Subject: Quick question\nHi Jane,\n\nBest,\nSam");

        assert_eq!(draft.subject, "Quick question");
        assert_eq!(draft.body, "Hi Jane,\n\nBest,\nSam");
    }

    #[test]
    fn test_parse_without_subject_marker() {
        let draft = parse_draft("Hi Jane,\nJust reaching out.");

        assert_eq!(draft.subject, DEFAULT_SUBJECT);
        assert_eq!(draft.body, "Hi Jane,\nJust reaching out.");
    }

    #[test]
    fn test_parse_no_newline() {
        let draft = parse_draft("A single line with no subject");

        assert_eq!(draft.subject, DEFAULT_SUBJECT);
        assert_eq!(draft.body, "A single line with no subject");
    }

    #[test]
    fn test_parse_subject_only_line_keeps_body_non_empty() {
        let draft = parse_draft("Subject: Quick question");

        assert_eq!(draft.subject, "Quick question");
        assert_eq!(draft.body, "Subject: Quick question");
    }

    #[test]
    fn test_parse_bare_marker_falls_back_to_placeholder() {
        let draft = parse_draft("Subject:   \nHi there");

        assert_eq!(draft.subject, DEFAULT_SUBJECT);
        assert_eq!(draft.body, "Subject:   \nHi there");
    }

    #[test]
    fn test_parse_multiple_subject_occurrences() {
        let draft = parse_draft("Subject: First\nSubject: Second\nBody text");

        assert_eq!(draft.subject, "First");
        assert_eq!(draft.body, "Subject: Second\nBody text");
    }

    #[test]
    fn test_parse_subject_not_on_first_line() {
        let draft = parse_draft("Hello\nSubject: Buried");

        assert_eq!(draft.subject, DEFAULT_SUBJECT);
        assert_eq!(draft.body, "Hello\nSubject: Buried");
    }

    #[test]
    fn test_parse_empty_output() {
        let draft = parse_draft("");

        assert_eq!(draft.subject, DEFAULT_SUBJECT);
        assert_eq!(draft.body, "");
    }
}
