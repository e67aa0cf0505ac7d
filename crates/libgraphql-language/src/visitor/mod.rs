//! Walking and editing ASTs.
//!
//! [`visit()`] walks a tree depth-first, calling a [`Visitor`]'s `enter`
//! and `leave` hooks for every node. Hooks steer the walk by returning a
//! [`VisitAction`]: replace the node, remove it, skip its subtree, or stop.
//! Edits are copy-on-write; the tree passed in is never modified and the
//! edited tree shares all unedited subtrees with it.
//!
//! Visitors compose:
//!
//! - [`VisitFnTable`] builds a visitor out of per-kind and generic closures
//! - [`visit_in_parallel()`] runs several visitors in one walk, each with
//!   its own skip/stop state
//! - [`visit_with_type_info()`] keeps a [`TypeInfo`] tracker in step with
//!   the walk

mod key_map;
mod parallel;
mod type_info;
mod visit;
mod visit_action;
mod visit_context;
mod visit_error;
mod visit_fn_table;
mod visitor;

pub use key_map::KeyMap;
pub use parallel::visit_in_parallel;
pub use parallel::ParallelVisitor;
pub use type_info::visit_with_type_info;
pub use type_info::TypeInfo;
pub use type_info::TypeInfoVisitor;
pub use visit::visit;
pub use visit::visit_with_keys;
pub use visit_action::VisitAction;
pub use visit_context::PathKey;
pub use visit_context::VisitContext;
pub use visit_error::VisitError;
pub use visit_fn_table::VisitFn;
pub use visit_fn_table::VisitFnTable;
pub use visitor::NoopVisitor;
pub use visitor::Visitor;
