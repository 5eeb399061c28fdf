use crate::error::AdminError;
use crate::models::catalog::{filter_deleted, SoftDeletable};
use crate::sync::Keyed;

/// Proof that a record was staged; holds the exact prior value so a failed
/// mutation reverts in O(1) instead of re-fetching the whole collection.
#[derive(Debug)]
#[must_use = "a staged mutation must be committed or rolled back"]
pub struct MutationTicket<T> {
    prior: T,
}

impl<T> MutationTicket<T> {
    pub fn prior(&self) -> &T {
        &self.prior
    }
}

/// In-memory mirror of a server-owned collection supporting tentative
/// writes. `stage` applies a change synchronously (the UI shows it before
/// any network round-trip), `commit` keeps it, `rollback` restores the
/// snapshot. `reconcile` replaces the whole mirror with an authoritative
/// fetch, used to resync after a rollback.
#[derive(Debug)]
pub struct OptimisticMirror<T> {
    items: Vec<T>,
}

impl<T> Default for OptimisticMirror<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed + Clone> OptimisticMirror<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == id)
    }

    /// Snapshot the record, then mutate it in place. The change is visible
    /// to readers immediately, before the backing request is even sent.
    pub fn stage(
        &mut self,
        id: &str,
        mutate: impl FnOnce(&mut T),
    ) -> Result<MutationTicket<T>, AdminError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.key() == id)
            .ok_or_else(|| AdminError::NotFound(format!("record {id}")))?;

        let prior = item.clone();
        mutate(item);

        Ok(MutationTicket { prior })
    }

    /// Keep the staged change. When the server echoed the updated record,
    /// prefer its version over the locally computed one.
    pub fn commit(&mut self, ticket: MutationTicket<T>, confirmed: Option<T>) {
        if let Some(confirmed) = confirmed {
            let key = ticket.prior.key().to_string();
            if let Some(item) = self.items.iter_mut().find(|item| item.key() == key) {
                *item = confirmed;
            }
        }
    }

    /// Upsert one authoritative record, e.g. a fresh detail fetch after a
    /// failed mutation.
    pub fn replace(&mut self, record: T) {
        match self.items.iter_mut().find(|item| item.key() == record.key()) {
            Some(item) => *item = record,
            None => self.items.push(record),
        }
    }

    /// Restore the exact prior record. If the record vanished from the
    /// mirror meanwhile (a reconcile raced the mutation), there is nothing
    /// to restore.
    pub fn rollback(&mut self, ticket: MutationTicket<T>) {
        let key = ticket.prior.key().to_string();
        if let Some(item) = self.items.iter_mut().find(|item| item.key() == key) {
            *item = ticket.prior;
        }
    }
}

impl<T: Keyed + Clone + SoftDeletable> OptimisticMirror<T> {
    /// Replace the mirror with an authoritative fetch. The soft-delete
    /// filter applies here like on every other fetch path.
    pub fn reconcile(&mut self, fresh: Vec<T>) {
        self.items = filter_deleted(fresh);
    }
}
