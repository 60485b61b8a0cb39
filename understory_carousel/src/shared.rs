// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared active-index holder for keeping several widgets on one logical selection.
//!
//! A [`SharedIndex`] is a cheap, clonable handle. Each engine that should start
//! from (and stay in step with) the same selection receives a clone at
//! construction. Engines write to it whenever they emit an index change and
//! poll it with [`Carousel::sync_shared`](crate::Carousel::sync_shared) to pick
//! up changes made elsewhere. A revision counter lets readers tell whether
//! anything changed since they last looked.
//!
//! The handle is single-threaded, like the event loop driving the engines.
//!
//! ```
//! use understory_carousel::SharedIndex;
//!
//! let selection = SharedIndex::new(1);
//! let other_handle = selection.clone();
//!
//! assert!(other_handle.set(2));
//! assert_eq!(selection.get(), 2);
//! assert_eq!(selection.revision(), 1);
//!
//! // Writing the same value is not a change.
//! assert!(!selection.set(2));
//! assert_eq!(selection.revision(), 1);
//! ```

use alloc::rc::Rc;
use core::cell::Cell;

/// Clonable handle to one shared active index.
#[derive(Clone, Debug, Default)]
pub struct SharedIndex {
    inner: Rc<SharedInner>,
}

#[derive(Debug, Default)]
struct SharedInner {
    index: Cell<usize>,
    revision: Cell<u64>,
}

impl SharedIndex {
    /// Creates a holder starting at `index`, revision 0.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self {
            inner: Rc::new(SharedInner {
                index: Cell::new(index),
                revision: Cell::new(0),
            }),
        }
    }

    /// Current index.
    #[must_use]
    pub fn get(&self) -> usize {
        self.inner.index.get()
    }

    /// Number of changes so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.inner.revision.get()
    }

    /// Stores `index`, bumping the revision when it differs from the current value.
    ///
    /// Returns `true` if the value changed.
    pub fn set(&self, index: usize) -> bool {
        if self.inner.index.get() == index {
            return false;
        }
        self.inner.index.set(index);
        self.inner.revision.set(self.inner.revision.get() + 1);
        true
    }

    /// Returns `true` when both handles refer to the same holder.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
