use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::summary::SummaryResult;

/// One customer record as stored by the CLI and exported to CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerEntry {
    /// Unique entry id
    pub id: Uuid,
    /// Customer display name
    pub name: String,
    /// Customer email address
    pub email: String,
    /// Free-text notes about the customer
    pub notes: String,
    /// Generated summary email, absent until a summary has been generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Generated comma-separated tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// Generated follow-up action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_steps: Option<String>,
    /// When the entry was created
    pub created_at: DateTime<Utc>,
}

impl CustomerEntry {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            email: email.into(),
            notes: notes.into(),
            summary: None,
            tags: None,
            next_steps: None,
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive substring search over name, email, and notes.
    /// An empty query matches everything.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.email.to_lowercase().contains(&query)
            || self.notes.to_lowercase().contains(&query)
    }

    /// Overwrite the generated fields from a summary result. Fields the
    /// result omitted are cleared rather than left stale.
    pub fn apply_summary(&mut self, result: &SummaryResult) {
        self.summary = result.summary.clone();
        self.tags = result.tags.clone();
        self.next_steps = result.next_steps.clone();
    }
}

/// Starter entries for a fresh store, so list and export have something
/// to show before the first real customer is added.
pub fn seed_entries() -> Vec<CustomerEntry> {
    vec![
        seed(
            "Neil Armstrong",
            "neil@moonmail.com",
            "Wants to know if note-ify can run on Moon and if we support interplanetary reminders.",
            "Hi Neil,\nWe're thrilled by your ambition to use note-ify on the Moon! While our current reminders are Earth-based, we're working on a Moon module (ETA: soon\u{2122}). Stay tuned for updates from the Red Planet!\nWarm regards,\nThe note-ify Team",
            "follow-up, lead",
            "Draft a roadmap for interplanetary reminder support.",
        ),
        seed(
            "Grace Hopper",
            "grace@debuggers.org",
            "Reported a bug: her notes keep turning into COBOL code. Requests a patch and a pun.",
            "Hi Grace,\nThank you for catching that bug (we hope it wasn't a moth). We're patching the COBOL converter and will add a pun generator just for you. Your debugging skills are legendary!\nWith appreciation,\nThe note-ify Team",
            "bug report",
            "Deploy the patch and email Grace a fresh pun.",
        ),
        seed(
            "Alan Turing",
            "alan@enigma.ai",
            "Interested in encrypting all notes with a custom cipher and testing if Noteify can pass the Turing Test.",
            "Hi Alan,\nWe love the idea of ciphers\u{2014}security through obscurity is so 1940s, but we'll make an exception for you. While Noteify doesn't yet pass the Turing Test, it can take encrypted notes with a wink and a nod.\nYours algorithmically,\nThe note-ify Team",
            "feature request, security",
            "Design an Enigma-themed encryption Easter egg.",
        ),
    ]
}

fn seed(
    name: &str,
    email: &str,
    notes: &str,
    summary: &str,
    tags: &str,
    next_steps: &str,
) -> CustomerEntry {
    let mut entry = CustomerEntry::new(name, email, notes);
    entry.summary = Some(summary.to_owned());
    entry.tags = Some(tags.to_owned());
    entry.next_steps = Some(next_steps.to_owned());
    entry
}

#[cfg(test)]
mod tests {
    use crate::summary::SummaryResult;

    use super::{CustomerEntry, seed_entries};

    #[test]
    fn new_entry_has_no_generated_fields() {
        let entry = CustomerEntry::new("Ada", "ada@example.com", "Wants a demo.");

        assert_eq!(entry.summary, None);
        assert_eq!(entry.tags, None);
        assert_eq!(entry.next_steps, None);
    }

    #[test]
    fn absent_generated_fields_stay_off_the_stored_json() {
        let entry = CustomerEntry::new("Ada", "ada@example.com", "Wants a demo.");

        let value = serde_json::to_value(&entry).unwrap();

        assert!(value.get("summary").is_none());
        assert!(value.get("tags").is_none());
        assert_eq!(value["name"], "Ada");
    }

    #[test]
    fn search_is_case_insensitive_across_name_email_and_notes() {
        let entry = CustomerEntry::new("Ada Lovelace", "ada@example.com", "Asked about Billing.");

        assert!(entry.matches_search("lovelace"));
        assert!(entry.matches_search("ADA@"));
        assert!(entry.matches_search("billing"));
        assert!(entry.matches_search(""));
        assert!(!entry.matches_search("turing"));
    }

    #[test]
    fn search_does_not_cover_generated_fields() {
        let mut entry = CustomerEntry::new("Ada", "ada@example.com", "notes");
        entry.tags = Some("unique-tag".to_owned());

        assert!(!entry.matches_search("unique-tag"));
    }

    #[test]
    fn apply_summary_overwrites_all_generated_fields() {
        let mut entry = CustomerEntry::new("Ada", "ada@example.com", "notes");
        entry.tags = Some("stale".to_owned());

        entry.apply_summary(&SummaryResult {
            summary: Some("Hi Ada".to_owned()),
            tags: None,
            next_steps: Some("Call Tuesday.".to_owned()),
        });

        assert_eq!(entry.summary.as_deref(), Some("Hi Ada"));
        assert_eq!(entry.tags, None);
        assert_eq!(entry.next_steps.as_deref(), Some("Call Tuesday."));
    }

    #[test]
    fn seed_entries_are_fully_populated() {
        let seeds = seed_entries();

        assert_eq!(seeds.len(), 3);
        assert_eq!(seeds[0].name, "Neil Armstrong");
        assert!(seeds.iter().all(|e| e.summary.is_some()));
        assert!(seeds.iter().all(|e| e.tags.is_some()));
    }
}
