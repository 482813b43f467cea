//! Immutable column-oriented dataset.
//!
//! ## Purpose
//!
//! This module defines the [`Dataset`] type: an immutable tabular collection
//! of rows with named, typed columns. It is the single input to every split
//! strategy and the unit of data the evaluation engine hands to external
//! estimators.
//!
//! ## Design notes
//!
//! * Column-oriented storage: numeric columns are `Vec<T>`, categorical
//!   columns store interned level codes plus a level table.
//! * Datasets are never mutated in place; `subset` produces a new `Dataset`.
//! * Construction goes through [`DatasetBuilder`], which validates the
//!   schema before a `Dataset` can exist.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! ### Interned Categoricals
//!
//! Categorical columns store one `u32` code per row plus a shared level
//! table. Subsetting copies codes only; the level table is cloned once per
//! subset, keeping row materialization cheap.
//!
//! ### Subsetting With Repetition
//!
//! `subset` accepts a multiset of row indices. Bootstrap analysis sets draw
//! rows with replacement, so an index may appear more than once and the
//! resulting dataset repeats that row.
//!
//! ## Invariants
//!
//! * All columns have exactly `n_rows` entries.
//! * Column names are unique.
//! * Every categorical code indexes into its level table.
//! * Row count and schema are fixed for the lifetime of a `Dataset`.
//!
//! ## Non-goals
//!
//! * This module does not parse files or convert external formats.
//! * This module does not reorder, filter, or impute values on its own.
//!
//! ## Visibility
//!
//! [`Dataset`], [`DatasetBuilder`], and [`Column`] are part of the public
//! API; strategies and the engine consume them read-only.

use crate::primitives::errors::ResampleError;
use num_traits::Float;

// ============================================================================
// Column
// ============================================================================

/// A single named column's values.
#[derive(Debug, Clone, PartialEq)]
pub enum Column<T> {
    /// Continuous values.
    Numeric(Vec<T>),

    /// Discrete labels, interned as codes into a level table.
    Categorical {
        /// Distinct labels in first-appearance order.
        levels: Vec<String>,
        /// One code per row, indexing into `levels`.
        codes: Vec<u32>,
    },
}

impl<T> Column<T> {
    /// Number of rows stored in this column.
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(values) => values.len(),
            Column::Categorical { codes, .. } => codes.len(),
        }
    }

    /// Returns `true` if the column holds no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` for numeric columns.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Column::Numeric(_))
    }
}

// ============================================================================
// Dataset
// ============================================================================

/// Immutable table of named, typed columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<T> {
    names: Vec<String>,
    columns: Vec<Column<T>>,
    n_rows: usize,
}

impl<T: Float> Dataset<T> {
    /// Start building a dataset column by column.
    pub fn builder() -> DatasetBuilder<T> {
        DatasetBuilder::new()
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Column names in declaration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Result<&Column<T>, ResampleError> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.columns[i])
            .ok_or_else(|| ResampleError::UnknownColumn {
                name: name.to_string(),
            })
    }

    /// Values of a numeric column.
    pub fn numeric(&self, name: &str) -> Result<&[T], ResampleError> {
        match self.column(name)? {
            Column::Numeric(values) => Ok(values),
            Column::Categorical { .. } => Err(ResampleError::ColumnTypeMismatch {
                name: name.to_string(),
                expected: "numeric",
            }),
        }
    }

    /// Level table of a categorical column.
    pub fn levels(&self, name: &str) -> Result<&[String], ResampleError> {
        match self.column(name)? {
            Column::Categorical { levels, .. } => Ok(levels),
            Column::Numeric(_) => Err(ResampleError::ColumnTypeMismatch {
                name: name.to_string(),
                expected: "categorical",
            }),
        }
    }

    /// Per-row level codes of a categorical column.
    pub fn codes(&self, name: &str) -> Result<&[u32], ResampleError> {
        match self.column(name)? {
            Column::Categorical { codes, .. } => Ok(codes),
            Column::Numeric(_) => Err(ResampleError::ColumnTypeMismatch {
                name: name.to_string(),
                expected: "categorical",
            }),
        }
    }

    /// Materialize the selected rows into a new dataset.
    ///
    /// Indices form a multiset: repeats are allowed (bootstrap analysis
    /// sets) and each occurrence contributes one row to the result.
    pub fn subset(&self, indices: &[usize]) -> Result<Dataset<T>, ResampleError> {
        if let Some(&bad) = indices.iter().find(|&&i| i >= self.n_rows) {
            return Err(ResampleError::RowOutOfBounds {
                index: bad,
                n_rows: self.n_rows,
            });
        }

        let columns = self
            .columns
            .iter()
            .map(|col| match col {
                Column::Numeric(values) => {
                    Column::Numeric(indices.iter().map(|&i| values[i]).collect())
                }
                Column::Categorical { levels, codes } => Column::Categorical {
                    levels: levels.clone(),
                    codes: indices.iter().map(|&i| codes[i]).collect(),
                },
            })
            .collect();

        Ok(Dataset {
            names: self.names.clone(),
            columns,
            n_rows: indices.len(),
        })
    }
}

// ============================================================================
// Dataset Builder
// ============================================================================

/// Fluent builder for [`Dataset`].
#[derive(Debug, Clone)]
pub struct DatasetBuilder<T> {
    names: Vec<String>,
    columns: Vec<Column<T>>,
    deferred_error: Option<ResampleError>,
}

impl<T: Float> Default for DatasetBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> DatasetBuilder<T> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            columns: Vec::new(),
            deferred_error: None,
        }
    }

    /// Add a numeric column.
    pub fn numeric(mut self, name: &str, values: Vec<T>) -> Self {
        self.push(name, Column::Numeric(values));
        self
    }

    /// Add a categorical column from per-row labels.
    ///
    /// Labels are interned in first-appearance order.
    pub fn categorical(mut self, name: &str, labels: &[&str]) -> Self {
        let mut levels: Vec<String> = Vec::new();
        let mut codes = Vec::with_capacity(labels.len());
        for &label in labels {
            let code = match levels.iter().position(|l| l == label) {
                Some(i) => i as u32,
                None => {
                    levels.push(label.to_string());
                    (levels.len() - 1) as u32
                }
            };
            codes.push(code);
        }
        self.push(name, Column::Categorical { levels, codes });
        self
    }

    fn push(&mut self, name: &str, column: Column<T>) {
        if self.deferred_error.is_some() {
            return;
        }
        if self.names.iter().any(|n| n == name) {
            self.deferred_error = Some(ResampleError::DuplicateColumn {
                name: name.to_string(),
            });
            return;
        }
        if let Some(first) = self.columns.first() {
            if column.len() != first.len() {
                self.deferred_error = Some(ResampleError::MismatchedColumnLengths {
                    column: name.to_string(),
                    got: column.len(),
                    expected: first.len(),
                });
                return;
            }
        }
        self.names.push(name.to_string());
        self.columns.push(column);
    }

    /// Validate the accumulated schema and produce the dataset.
    pub fn build(self) -> Result<Dataset<T>, ResampleError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }
        let n_rows = self.columns.first().map(Column::len).unwrap_or(0);
        if n_rows == 0 || self.columns.is_empty() {
            return Err(ResampleError::EmptyDataset);
        }
        Ok(Dataset {
            names: self.names,
            columns: self.columns,
            n_rows,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
