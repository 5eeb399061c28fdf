use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use dashmap::DashMap;

use crate::error::AdminError;
use crate::models::assignment::DraftAssignment;
use crate::models::rider::RiderSnapshot;
use crate::store::write_atomic;

/// Unconfirmed rider-assignment intents, keyed by order id and persisted
/// across sessions. One draft per order: `add` overwrites, never merges.
/// Drafts are removed when the assignment commits server-side; a failed
/// save keeps the draft so the admin can retry.
#[derive(Debug)]
pub struct DraftStore {
    path: PathBuf,
    drafts: DashMap<String, DraftAssignment>,
}

impl DraftStore {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, AdminError> {
        let path = path.into();

        let drafts = DashMap::new();
        match fs::read(&path) {
            Ok(bytes) => {
                let stored: BTreeMap<String, DraftAssignment> = serde_json::from_slice(&bytes)
                    .map_err(|err| {
                        AdminError::Storage(format!(
                            "corrupt draft file {}: {err}",
                            path.display()
                        ))
                    })?;
                for (order_id, draft) in stored {
                    drafts.insert(order_id, draft);
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                return Err(AdminError::Storage(format!(
                    "read {}: {err}",
                    path.display()
                )))
            }
        }

        Ok(Self { path, drafts })
    }

    pub fn add(&self, order_id: &str, rider: RiderSnapshot) -> Result<DraftAssignment, AdminError> {
        let draft = DraftAssignment::new(order_id, rider);
        self.drafts.insert(order_id.to_string(), draft.clone());
        self.persist()?;

        tracing::debug!(order_id, rider_id = %draft.rider.id, "draft assignment stored");
        Ok(draft)
    }

    /// No-op when no draft exists for the order.
    pub fn remove(&self, order_id: &str) -> Result<(), AdminError> {
        if self.drafts.remove(order_id).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    pub fn get(&self, order_id: &str) -> Option<DraftAssignment> {
        self.drafts.get(order_id).map(|entry| entry.value().clone())
    }

    pub fn has(&self, order_id: &str) -> bool {
        self.drafts.contains_key(order_id)
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    fn persist(&self) -> Result<(), AdminError> {
        let snapshot: BTreeMap<String, DraftAssignment> = self
            .drafts
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();

        let bytes = serde_json::to_vec_pretty(&snapshot)
            .map_err(|err| AdminError::Storage(format!("encode drafts: {err}")))?;
        write_atomic(&self.path, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::rider::{RiderSnapshot, VehicleType};

    use super::DraftStore;

    fn rider(id: &str) -> RiderSnapshot {
        RiderSnapshot {
            id: id.to_string(),
            name: format!("rider-{id}"),
            phone: "9000000001".to_string(),
            vehicle_type: VehicleType::Bike,
        }
    }

    fn store() -> (tempfile::TempDir, DraftStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = DraftStore::load(dir.path().join("drafts.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn second_add_overwrites_first() {
        let (_dir, store) = store();

        store.add("ord-1", rider("a")).unwrap();
        store.add("ord-1", rider("b")).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("ord-1").unwrap().rider.id, "b");
    }

    #[test]
    fn remove_missing_key_is_a_noop() {
        let (_dir, store) = store();

        store.remove("ord-404").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn get_missing_key_returns_none() {
        let (_dir, store) = store();
        assert!(store.get("ord-404").is_none());
        assert!(!store.has("ord-404"));
    }

    #[test]
    fn drafts_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drafts.json");

        let store = DraftStore::load(&path).unwrap();
        store.add("ord-1", rider("a")).unwrap();
        store.add("ord-2", rider("b")).unwrap();
        store.remove("ord-2").unwrap();
        drop(store);

        let reloaded = DraftStore::load(&path).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.get("ord-1").unwrap().rider.id, "a");
        assert!(!reloaded.has("ord-2"));
    }
}
