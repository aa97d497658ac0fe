// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! The dynamic list object backing the `SYS_LIST_*` syscalls.
//!
//! A list is `{ refs, data, size, capacity }`. Handles are plain `i64`s;
//! the VM never distinguishes a list handle from an ordinary integer on
//! the operand stack — that discipline is the bytecode producer's job
//! (see the design note on opaque handles). Host-side, handles index
//! into a [`ListHeap`] slot table rather than casting a raw pointer
//! through a machine word, which keeps the implementation free of
//! unsafe code without changing any bytecode-visible behavior.

#[cfg(test)]
mod list_test;

use crate::error::ListError;

/// Sentinel meaning "use the list's current size" for a slice bound.
const SLICE_SENTINEL: i64 = -1;

/// One dynamic list's storage.
#[derive(Debug, Default)]
struct ListObject {
    refs: i64,
    data: Vec<i64>,
}

/// The owning arena for every live list object in a VM run.
///
/// Slots are `None` once a list's refcount has dropped to zero and it has
/// been deallocated; the corresponding handle becomes invalid.
#[derive(Debug, Default)]
pub struct ListHeap {
    slots: Vec<Option<ListObject>>,
}

impl ListHeap {
    /// Create an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, handle: i64) -> Result<&ListObject, ListError> {
        usize::try_from(handle)
            .ok()
            .and_then(|i| self.slots.get(i))
            .and_then(Option::as_ref)
            .ok_or(ListError::InvalidHandle(handle))
    }

    fn slot_mut(&mut self, handle: i64) -> Result<&mut ListObject, ListError> {
        usize::try_from(handle)
            .ok()
            .and_then(|i| self.slots.get_mut(i))
            .and_then(Option::as_mut)
            .ok_or(ListError::InvalidHandle(handle))
    }

    fn insert(&mut self, object: ListObject) -> i64 {
        self.slots.push(Some(object));
        (self.slots.len() - 1) as i64
    }

    /// `SYS_LIST`: allocate a new empty list with `refs = 0`.
    pub fn new_list(&mut self) -> i64 {
        self.insert(ListObject { refs: 0, data: Vec::new() })
    }

    /// `from_data`: allocate a list and copy `words` into it.
    pub fn from_data(&mut self, words: &[i64]) -> i64 {
        self.insert(ListObject { refs: 0, data: words.to_vec() })
    }

    /// `SYS_LIST_GET`.
    pub fn get(&self, handle: i64, index: i64) -> Result<i64, ListError> {
        let list = self.slot(handle)?;
        let size = list.data.len() as i64;
        usize::try_from(index)
            .ok()
            .filter(|&i| (i as i64) < size)
            .map(|i| list.data[i])
            .ok_or(ListError::IndexOutOfRange { index, size })
    }

    /// `SYS_LIST_SET`.
    pub fn set(&mut self, handle: i64, index: i64, value: i64) -> Result<(), ListError> {
        let list = self.slot_mut(handle)?;
        let size = list.data.len() as i64;
        let i = usize::try_from(index)
            .ok()
            .filter(|&i| (i as i64) < size)
            .ok_or(ListError::IndexOutOfRange { index, size })?;
        list.data[i] = value;
        Ok(())
    }

    /// `SYS_LIST_PUSH`. Growth is geometric (handled by `Vec` itself); the
    /// spec's "double, initial 1" policy is an implementation detail of
    /// the reference allocator, not an observable contract.
    pub fn push(&mut self, handle: i64, value: i64) -> Result<(), ListError> {
        let list = self.slot_mut(handle)?;
        list.data.push(value);
        Ok(())
    }

    /// `SYS_LIST_LEN`.
    pub fn len(&self, handle: i64) -> Result<i64, ListError> {
        Ok(self.slot(handle)?.data.len() as i64)
    }

    /// `SYS_LIST_CLEAR`: drop all elements, keep the slot alive.
    pub fn clear(&mut self, handle: i64) -> Result<(), ListError> {
        self.slot_mut(handle)?.data.clear();
        Ok(())
    }

    /// `SYS_LIST_SLICE`: deep-copy `[left, right)` into a fresh list.
    pub fn slice(&mut self, handle: i64, left: i64, right: i64) -> Result<i64, ListError> {
        let size = self.slot(handle)?.data.len() as i64;

        let resolve = |bound: i64| -> Result<i64, ListError> {
            if bound == SLICE_SENTINEL {
                return Ok(size);
            }
            if bound < 0 {
                return Err(ListError::InvalidSliceBound { bound });
            }
            if bound >= size {
                return Err(ListError::SliceOutOfRange { bound, size });
            }
            Ok(bound)
        };

        let left = if left == SLICE_SENTINEL { 0 } else { resolve(left)? };
        let right = resolve(right)?;
        if left > right {
            return Err(ListError::SliceOutOfRange { bound: left, size });
        }

        let list = self.slot(handle)?;
        let copy = list.data[left as usize..right as usize].to_vec();
        Ok(self.insert(ListObject { refs: 0, data: copy }))
    }

    /// `SYS_LIST_REF`: increment the refcount.
    pub fn incref(&mut self, handle: i64) -> Result<(), ListError> {
        self.slot_mut(handle)?.refs += 1;
        Ok(())
    }

    /// `SYS_LIST_UNREF`: decrement the refcount; deallocate on the exact
    /// transition to zero (matching `if (!--list->refs)` in the reference
    /// allocator — unref below zero leaves the list alive).
    pub fn decref(&mut self, handle: i64) -> Result<(), ListError> {
        let list = self.slot_mut(handle)?;
        list.refs -= 1;
        if list.refs == 0 {
            let slot = usize::try_from(handle).map_err(|_| ListError::InvalidHandle(handle))?;
            self.slots[slot] = None;
        }
        Ok(())
    }
}
