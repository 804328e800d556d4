// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Python syntax tree shapes and traversal.
//!
//! This crate provides the read-only tree that semantic classification runs
//! over, and the traversal engine that drives it.
//!
//! # Overview
//!
//! - **Nodes**: Owned, `serde`-deserializable statement and expression shapes
//!   re-exported at the crate root. Identifiers are [`Name`]s keyed by [`NodeId`].
//! - **Traversal**: The [`Visitor`] trait and `walk_*` functions in
//!   [`visitor`], visiting in source order.
//! - **Construction**: [`builder::TreeBuilder`] locates names in source text
//!   for hand-built trees.

pub mod builder;
mod nodes;
pub mod visitor;

pub use nodes::*;
pub use visitor::{walk_module, VisitResult, Visitor};
