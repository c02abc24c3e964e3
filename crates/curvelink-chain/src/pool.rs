//! The set of records not yet consumed by a chain.

use curvelink_core::{ChainError, CurveId, Result};

use crate::record::Chainable;

/// Remaining records keyed by their original input position.
///
/// Stored as one slot per input position, so removal is O(1) and iteration
/// always runs in ascending input order. The pool only ever shrinks; a slot
/// can be replaced (with a reversed copy) but never refilled once emptied.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<Option<T>>,
    live: usize,
}

impl<T: Chainable> Pool<T> {
    /// Build a pool from records, each placed at its own id.
    ///
    /// `group_size` is the number of curves in the group the records came
    /// from; every id must be below it.
    pub fn new(records: impl IntoIterator<Item = T>, group_size: usize) -> Result<Self> {
        let mut slots: Vec<Option<T>> = Vec::new();
        slots.resize_with(group_size, || None);
        let mut live = 0;
        for record in records {
            let index = record.id().index();
            if index >= group_size {
                return Err(ChainError::InvalidOperation(format!(
                    "Curve id {} is outside a group of {} curves",
                    record.id(),
                    group_size
                )));
            }
            if slots[index].is_some() {
                return Err(ChainError::InvalidOperation(format!(
                    "Duplicate curve id {} in pool",
                    record.id()
                )));
            }
            slots[index] = Some(record);
            live += 1;
        }
        Ok(Self { slots, live })
    }

    /// Number of records still in the pool.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn get(&self, id: CurveId) -> Option<&T> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn contains(&self, id: CurveId) -> bool {
        self.get(id).is_some()
    }

    /// Take a record out of the pool.
    pub fn remove(&mut self, id: CurveId) -> Option<T> {
        let taken = self.slots.get_mut(id.index()).and_then(Option::take);
        if taken.is_some() {
            self.live -= 1;
        }
        taken
    }

    /// Replace the stored record with its reversed copy. Returns false when `id` is absent.
    pub fn reverse(&mut self, id: CurveId) -> bool {
        match self.slots.get_mut(id.index()) {
            Some(Some(record)) => {
                *record = record.reversed();
                true
            }
            _ => false,
        }
    }

    /// Remaining records in ascending input order.
    pub fn iter(&self) -> impl Iterator<Item = (CurveId, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|r| (CurveId::new(i), r)))
    }

    pub fn ids(&self) -> Vec<CurveId> {
        self.iter().map(|(id, _)| id).collect()
    }
}
