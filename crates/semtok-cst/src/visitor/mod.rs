// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor infrastructure for tree traversal.
//!
//! # Traversal Order
//!
//! - **Depth-first, pre-order** for `visit_*` methods
//! - **Post-order** for `leave_*` methods
//! - Children are visited in source order (left-to-right, top-to-bottom)
//!
//! # Visitor Pattern
//!
//! The [`Visitor`] trait provides read-only traversal:
//!
//! ```
//! use semtok_cst::visitor::{walk_module, Visitor, VisitResult};
//! use semtok_cst::{Module, Name};
//!
//! struct NameCounter {
//!     count: usize,
//! }
//!
//! impl Visitor for NameCounter {
//!     fn visit_name(&mut self, _node: &Name) -> VisitResult {
//!         self.count += 1;
//!         VisitResult::Continue
//!     }
//! }
//!
//! let mut counter = NameCounter { count: 0 };
//! walk_module(&mut counter, &Module::default());
//! assert_eq!(counter.count, 0);
//! ```

mod dispatch;
mod traits;

pub use dispatch::*;
pub use traits::{VisitResult, Visitor};
