// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary conditions reported by index requests.

/// Why an index request was not carried out.
///
/// A request that fails leaves the engine untouched: no state change, no
/// render call, no notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    /// The carousel has no items, or has not been laid out yet.
    #[error("carousel has no items")]
    Empty,
    /// A request for the index before the first one.
    #[error("no item before index 0")]
    BeforeStart,
    /// A request for an index at or past the item count.
    #[error("index {index} is out of range for {item_count} items")]
    PastEnd {
        /// Requested index.
        index: usize,
        /// Number of items at the time of the request.
        item_count: usize,
    },
}
