use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::careers::form::{FormError, NewCareer};
use crate::errors::AppError;
use crate::models::career::{CareerDocument, CareerRecord};
use crate::store::CareerStore;

/// Result of a submission that reached validation.
#[derive(Debug)]
pub enum AddOutcome {
    Added {
        name: String,
        record: CareerRecord,
        message: String,
    },
    Rejected(FormError),
}

/// Reloads the document, validates `input` against it and persists the whole
/// document when the career is accepted. A rejected submission never touches
/// the store.
pub async fn add_career(
    store: &dyn CareerStore,
    write_lock: &Mutex<()>,
    input: &NewCareer,
) -> Result<AddOutcome, AppError> {
    let _guard = write_lock.lock().await;

    let mut document: CareerDocument = store.load().await?;
    let (name, record) = match input.validate(&document) {
        Ok(accepted) => accepted,
        Err(e) => {
            warn!("Rejected career '{}': {e}", input.name.trim());
            return Ok(AddOutcome::Rejected(e));
        }
    };

    // Defensive guard: validate() already refused an existing name and the write
    // lock is held, so this insert cannot collide.
    document
        .insert(name.clone(), record.clone())
        .map_err(|_| AppError::Conflict(FormError::AlreadyExists.to_string()))?;
    store.save(&document).await?;

    info!("Added career '{name}' ({} total)", document.len());
    Ok(AddOutcome::Added {
        message: format!("{name} added successfully!"),
        name,
        record,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::JsonFileStore;

    fn input(name: &str) -> NewCareer {
        NewCareer {
            name: name.to_string(),
            description: "Designs bridges".to_string(),
            salary: "$70k-$110k".to_string(),
            opportunities: "Government,  Construction , Consulting".to_string(),
            future_prospects: "Infrastructure spending keeps demand high".to_string(),
            universities: "ETH Zurich, Imperial College".to_string(),
        }
    }

    fn setup() -> (tempfile::TempDir, JsonFileStore, Mutex<()>) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("careers.json"));
        (dir, store, Mutex::new(()))
    }

    #[tokio::test]
    async fn test_add_unique_career_persists_record() {
        let (_dir, store, lock) = setup();

        let outcome = add_career(&store, &lock, &input("Civil Engineer")).await.unwrap();
        match outcome {
            AddOutcome::Added { name, message, .. } => {
                assert_eq!(name, "Civil Engineer");
                assert_eq!(message, "Civil Engineer added successfully!");
            }
            AddOutcome::Rejected(e) => panic!("unexpected rejection: {e}"),
        }

        let doc = store.load().await.unwrap();
        let record = doc.get("Civil Engineer").unwrap();
        assert_eq!(record.description, "Designs bridges");
        assert_eq!(record.salary, "$70k-$110k");
        assert_eq!(record.opportunities, vec!["Government", "Construction", "Consulting"]);
        assert_eq!(record.universities, vec!["ETH Zurich", "Imperial College"]);
    }

    #[tokio::test]
    async fn test_add_appends_after_existing_careers() {
        let (_dir, store, lock) = setup();

        add_career(&store, &lock, &input("Civil Engineer")).await.unwrap();
        add_career(&store, &lock, &input("Architect")).await.unwrap();

        let doc = store.load().await.unwrap();
        let names: Vec<&str> = doc.names().collect();
        assert_eq!(names, vec!["Civil Engineer", "Architect"]);
    }

    #[tokio::test]
    async fn test_add_duplicate_leaves_file_unchanged() {
        let (_dir, store, lock) = setup();
        add_career(&store, &lock, &input("Civil Engineer")).await.unwrap();
        let before = std::fs::read(store.path()).unwrap();

        let mut again = input("Civil Engineer");
        again.description = "Something else".to_string();
        let outcome = add_career(&store, &lock, &again).await.unwrap();

        assert!(matches!(outcome, AddOutcome::Rejected(FormError::AlreadyExists)));
        assert_eq!(std::fs::read(store.path()).unwrap(), before);
    }

    #[tokio::test]
    async fn test_add_blank_field_leaves_file_unchanged() {
        let (_dir, store, lock) = setup();
        add_career(&store, &lock, &input("Civil Engineer")).await.unwrap();
        let before = std::fs::read(store.path()).unwrap();

        let mut partial = input("Pharmacist");
        partial.salary = "  ".to_string();
        let outcome = add_career(&store, &lock, &partial).await.unwrap();

        assert!(matches!(outcome, AddOutcome::Rejected(FormError::MissingFields)));
        assert_eq!(std::fs::read(store.path()).unwrap(), before);
    }

    #[tokio::test]
    async fn test_add_keeps_unknown_keys_of_existing_records() {
        let (_dir, store, lock) = setup();
        std::fs::write(
            store.path(),
            r#"{"Chef": {"description": "Cooks", "salary": "$40k", "opportunities": ["Hotels"],
                "future_prospects": "Stable", "universities": ["Le Cordon Bleu"],
                "category": "Hospitality"}}"#,
        )
        .unwrap();

        let outcome = add_career(&store, &lock, &input("Pilot")).await.unwrap();
        assert!(matches!(outcome, AddOutcome::Added { .. }));

        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(saved["Chef"]["category"], "Hospitality");
        assert_eq!(saved["Chef"]["description"], "Cooks");
        assert!(saved["Pilot"].get("category").is_none());
    }

    #[tokio::test]
    async fn test_rejected_first_submission_creates_no_file() {
        let (_dir, store, lock) = setup();

        let outcome = add_career(&store, &lock, &NewCareer::default()).await.unwrap();

        assert!(matches!(outcome, AddOutcome::Rejected(FormError::MissingFields)));
        assert!(!store.path().exists());
    }
}
