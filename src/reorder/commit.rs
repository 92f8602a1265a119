//! Column order commits.
//!
//! Computes the new column permutation, rewrites the local column store with
//! dense order indices, and pushes the result through the schema sink.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{self, LocalBoxFuture};

use super::host::SchemaSink;
use crate::error::{ReorderError, Result};
use crate::layout::GridState;
use crate::types::{Column, SchemaMutations};

/// Move `source` so that it sits immediately after `target`.
///
/// A `None` target, or a target that is not in `columns`, moves the source to
/// the front. All other columns keep their relative order.
///
/// # Errors
/// Returns `UnknownColumn` if `source` is not in `columns`.
pub fn reorder_columns(columns: &[Column], source: &str, target: Option<&str>) -> Result<Vec<Column>> {
    let source_idx = columns
        .iter()
        .position(|c| c.name == source)
        .ok_or_else(|| ReorderError::UnknownColumn(source.to_string()))?;
    let target_idx = match target {
        Some(name) => {
            let idx = columns.iter().position(|c| c.name == name);
            if idx.is_none() {
                tracing::warn!(target = name, "reorder target no longer exists, moving to front");
            }
            idx
        }
        None => None,
    };

    let mut reordered = columns.to_vec();
    let moved = reordered.remove(source_idx);
    let insert_at = match target_idx {
        None => 0,
        // Target sits before the source, so removal did not shift it
        Some(idx) if idx < source_idx => idx + 1,
        Some(idx) => idx,
    };
    reordered.insert(insert_at, moved);
    Ok(reordered)
}

/// Applies column moves to the shared grid and persists them.
#[derive(Clone)]
pub struct CommitEngine {
    grid: Rc<RefCell<GridState>>,
    sink: Rc<dyn SchemaSink>,
}

impl CommitEngine {
    pub fn new(grid: Rc<RefCell<GridState>>, sink: Rc<dyn SchemaSink>) -> Self {
        Self { grid, sink }
    }

    /// Move `source` to just after `target` (or to the front for `None`).
    ///
    /// The local column store and the sink's pending mutations are updated
    /// before this returns; the returned future resolves once the sink has
    /// persisted them.
    pub fn move_column(&self, source: &str, target: Option<&str>) -> LocalBoxFuture<'static, Result<()>> {
        let mutations = match self.apply_move(source, target) {
            Ok(mutations) => mutations,
            Err(e) => return Box::pin(future::ready(Err(e))),
        };
        tracing::debug!(source, target = ?target, columns = mutations.len(), "committing column order");
        self.sink.add_schema_mutations(mutations);
        self.sink.save_schema_mutations()
    }

    /// Move a column one place left as it appears on screen.
    ///
    /// Moves insert *after* their target, so a single step left targets the
    /// column two places before.
    pub fn move_column_left(&self, column: &str) -> LocalBoxFuture<'static, Result<()>> {
        let target = {
            let grid = self.grid.borrow();
            let Some(idx) = grid.layout.visible_index(column) else {
                return unknown(column);
            };
            let visible = grid.layout.visible_columns();
            idx.checked_sub(2)
                .and_then(|i| visible.get(i))
                .map(|c| c.name.clone())
        };
        self.move_column(column, target.as_deref())
    }

    /// Move a column one place right as it appears on screen.
    ///
    /// The last visible column stays put and nothing is persisted.
    pub fn move_column_right(&self, column: &str) -> LocalBoxFuture<'static, Result<()>> {
        let target = {
            let grid = self.grid.borrow();
            let Some(idx) = grid.layout.visible_index(column) else {
                return unknown(column);
            };
            let visible = grid.layout.visible_columns();
            match visible.get(idx + 1) {
                Some(next) => next.name.clone(),
                None => return Box::pin(future::ready(Ok(()))),
            }
        };
        self.move_column(column, Some(&target))
    }

    fn apply_move(&self, source: &str, target: Option<&str>) -> Result<SchemaMutations> {
        let mut grid = self.grid.borrow_mut();
        let reordered = reorder_columns(grid.layout.columns(), source, target)?;
        Ok(grid.layout.apply_order(reordered))
    }
}

fn unknown(column: &str) -> LocalBoxFuture<'static, Result<()>> {
    Box::pin(future::ready(Err(ReorderError::UnknownColumn(
        column.to_string(),
    ))))
}
