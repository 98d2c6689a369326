//! Contact plan text format.
//!
//! One contact per line, six whitespace-separated fields:
//!
//! ```text
//! <id> <window start> <window end> <sender> <receiver> <one-way delay>
//! ```
//!
//! There is no header row. Blank lines are ignored. Times are decimal
//! seconds; `inf` marks a window that never closes.

use crate::domain::{Contact, ContactId, DtnTime, NodeId, Window};

use super::{ContactPlan, PlanError};

const FIELD_COUNT: usize = 6;

/// Parse a whole contact plan.
///
/// Fails on the first malformed or duplicate record.
pub fn parse_contact_plan(text: &str) -> Result<ContactPlan, PlanError> {
    let mut plan = ContactPlan::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let contact = parse_record(raw).map_err(|reason| PlanError::MalformedRecord {
            line,
            content: raw.to_string(),
            reason,
        })?;

        let id = contact.id();
        if plan.insert(contact).is_err() {
            return Err(PlanError::DuplicateContactId { id, line });
        }
    }

    Ok(plan)
}

/// Parse a single non-blank record.
fn parse_record(raw: &str) -> Result<Contact, String> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    if fields.len() != FIELD_COUNT {
        return Err(format!(
            "expected {FIELD_COUNT} fields, found {}",
            fields.len()
        ));
    }

    let id = ContactId::parse(fields[0]).map_err(|e| e.to_string())?;
    let start = parse_time(fields[1], "window start")?;
    let end = parse_time(fields[2], "window end")?;
    let sender = NodeId::parse(fields[3]).map_err(|e| format!("sender: {e}"))?;
    let receiver = NodeId::parse(fields[4]).map_err(|e| format!("receiver: {e}"))?;
    let delay = parse_time(fields[5], "one-way delay")?;

    let window = Window::new(start, end).map_err(|e| e.to_string())?;
    Contact::new(id, window, sender, receiver, delay).map_err(|e| e.to_string())
}

fn parse_time(field: &str, name: &str) -> Result<DtnTime, String> {
    DtnTime::parse(field).map_err(|e| format!("{name}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed_reason(text: &str) -> String {
        match parse_contact_plan(text) {
            Err(PlanError::MalformedRecord { reason, .. }) => reason,
            other => panic!("expected malformed record, got {other:?}"),
        }
    }

    #[test]
    fn parses_well_formed_plan() {
        let plan = parse_contact_plan("1 0 10 1 2 1\n2 2 10 2 3 2\n").unwrap();

        assert_eq!(plan.len(), 2);
        let second = plan.by_id(ContactId(2)).unwrap();
        assert_eq!(second.sender(), NodeId(2));
        assert_eq!(second.receiver(), NodeId(3));
        assert_eq!(second.window().start(), DtnTime::new(2.0).unwrap());
        assert_eq!(second.one_way_delay(), DtnTime::new(2.0).unwrap());
    }

    #[test]
    fn accepts_tabs_extra_spaces_and_blank_lines() {
        let text = "\n  1\t0.5   10\t1 2   0.25  \n\n2 0 inf 2 3 1\n";
        let plan = parse_contact_plan(text).unwrap();

        assert_eq!(plan.len(), 2);
        assert!(
            plan.by_id(ContactId(2))
                .unwrap()
                .window()
                .end()
                .is_infinite()
        );
    }

    #[test]
    fn empty_text_gives_empty_plan() {
        let plan = parse_contact_plan("").unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn preserves_record_order() {
        let plan = parse_contact_plan("9 0 1 1 2 0\n3 0 1 2 3 0\n5 0 1 3 4 0\n").unwrap();
        let ids: Vec<_> = plan.contacts().iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![ContactId(9), ContactId(3), ContactId(5)]);
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(malformed_reason("1 0 10 1 2"), "expected 6 fields, found 5");
        assert_eq!(
            malformed_reason("1 0 10 1 2 1 7"),
            "expected 6 fields, found 7"
        );
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(malformed_reason("x 0 10 1 2 1").contains("contact identifier"));
        assert!(malformed_reason("1 zero 10 1 2 1").starts_with("window start"));
        assert!(malformed_reason("1 0 10 1.5 2 1").starts_with("sender"));
        assert!(malformed_reason("1 0 10 1 -2 1").starts_with("receiver"));
        assert!(malformed_reason("1 0 10 1 2 NaN").starts_with("one-way delay"));
    }

    #[test]
    fn rejects_inconsistent_contacts() {
        assert!(malformed_reason("1 10 0 1 2 1").contains("invalid window"));
        assert!(malformed_reason("1 0 10 1 2 -1").contains("invalid one-way delay"));
        assert!(malformed_reason("1 0 10 1 2 inf").contains("invalid one-way delay"));
    }

    #[test]
    fn malformed_record_reports_line_and_content() {
        let err = parse_contact_plan("1 0 10 1 2 1\n\n3 0 10 oops 2 1\n").unwrap_err();
        match err {
            PlanError::MalformedRecord { line, content, .. } => {
                assert_eq!(line, 3);
                assert_eq!(content, "3 0 10 oops 2 1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = parse_contact_plan("1 0 10 1 2 1\n1 0 10 2 3 1\n").unwrap_err();
        assert!(matches!(
            err,
            PlanError::DuplicateContactId {
                id: ContactId(1),
                line: 2
            }
        ));
    }
}
