//! Column store and derived visible-column view.
//!
//! The full column sequence is the source of truth for ordering; the visible
//! view is recomputed on demand so readers never see stale `left` offsets.

use std::collections::HashSet;

use crate::error::{ReorderError, Result};
use crate::types::{Column, SchemaMutations};

/// Ordered column set for one grid.
#[derive(Debug, Clone, Default)]
pub struct GridLayout {
    /// Full ordered sequence of non-sticky columns, hidden ones included
    columns: Vec<Column>,
    /// Column pinned to the left edge, if any. Never part of `columns`.
    sticky_column: Option<Column>,
}

impl GridLayout {
    /// Create a layout from columns already in display order.
    ///
    /// # Errors
    /// Returns `DuplicateColumn` if two columns share a name.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        check_unique(columns.iter())?;
        Ok(Self {
            columns,
            sticky_column: None,
        })
    }

    /// Create a layout from persisted columns, sorted by their `order` field.
    ///
    /// Ties keep their input order.
    pub fn from_persisted(mut columns: Vec<Column>) -> Result<Self> {
        columns.sort_by_key(|c| c.order);
        Self::new(columns)
    }

    /// Pin a column to the left edge.
    pub fn with_sticky(mut self, column: Column) -> Result<Self> {
        if self.position(&column.name).is_some() {
            return Err(ReorderError::DuplicateColumn(column.name));
        }
        self.sticky_column = Some(column);
        Ok(self)
    }

    /// Full ordered column sequence (hidden columns included).
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn sticky_column(&self) -> Option<&Column> {
        self.sticky_column.as_ref()
    }

    /// Width of the sticky column, or 0 without one
    pub fn sticky_width(&self) -> f64 {
        self.sticky_column.as_ref().map_or(0.0, |c| c.width)
    }

    /// Currently displayed columns in order, with `left` set to each column's
    /// cumulative offset in scrollable content space.
    pub fn visible_columns(&self) -> Vec<Column> {
        let mut x = 0.0;
        self.columns
            .iter()
            .filter(|c| c.visible)
            .map(|c| {
                let mut col = c.clone();
                col.left = x;
                x += col.width;
                col
            })
            .collect()
    }

    /// Index of a column in the full sequence
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Index of a column in the visible view
    pub fn visible_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .filter(|c| c.visible)
            .position(|c| c.name == name)
    }

    /// Total width of the visible non-sticky columns
    pub fn total_width(&self) -> f64 {
        self.columns
            .iter()
            .filter(|c| c.visible)
            .map(|c| c.width)
            .sum()
    }

    /// Names of the full sequence, in order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Replace the column sequence with a reordered one and rank every column.
    ///
    /// Returns the order mutations describing the new sequence.
    pub(crate) fn apply_order(&mut self, columns: Vec<Column>) -> SchemaMutations {
        self.columns = columns;
        let mut mutations = SchemaMutations::new();
        for (idx, column) in self.columns.iter_mut().enumerate() {
            column.order = idx;
            mutations.insert(
                column.name.clone(),
                crate::types::OrderMutation { order: idx },
            );
        }
        mutations
    }
}

fn check_unique<'a>(columns: impl Iterator<Item = &'a Column>) -> Result<()> {
    let mut seen = HashSet::new();
    for column in columns {
        if !seen.insert(column.name.as_str()) {
            return Err(ReorderError::DuplicateColumn(column.name.clone()));
        }
    }
    Ok(())
}
