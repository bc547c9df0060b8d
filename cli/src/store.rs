//! Local entry store: a JSON file playing the role the web frontend's
//! browser storage plays.

use std::path::{Path, PathBuf};

use noteify_core::entry::{CustomerEntry, seed_entries};

pub const STORE_FILE_NAME: &str = "crm-entries.json";

pub fn default_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("noteify")
        .join(STORE_FILE_NAME)
}

/// Load all entries. A store that does not exist yet is written out with
/// the starter entries, so their ids stay stable across invocations.
pub fn load(path: &Path) -> Result<Vec<CustomerEntry>, Box<dyn std::error::Error>> {
    if !path.exists() {
        let entries = seed_entries();
        save(path, &entries)?;
        return Ok(entries);
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn save(path: &Path, entries: &[CustomerEntry]) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(entries)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use noteify_core::entry::CustomerEntry;
    use tempfile::tempdir;

    use super::{load, save};

    #[test]
    fn missing_store_is_created_with_the_starter_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crm-entries.json");

        let entries = load(&path).unwrap();

        assert_eq!(entries.len(), 3);
        assert!(path.exists());
    }

    #[test]
    fn seeded_entries_keep_their_ids_across_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crm-entries.json");

        let first = load(&path).unwrap();
        let second = load(&path).unwrap();

        assert_eq!(
            first.iter().map(|e| e.id).collect::<Vec<_>>(),
            second.iter().map(|e| e.id).collect::<Vec<_>>()
        );
        assert_eq!(first, second);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("crm-entries.json");
        let entries = vec![CustomerEntry::new("Ada", "ada@example.com", "notes")];

        save(&path, &entries).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, entries);
    }

    #[test]
    fn corrupt_store_is_an_error_not_a_silent_reset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crm-entries.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(load(&path).is_err());
    }
}
