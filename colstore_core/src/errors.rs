use thiserror::Error;

use crate::types::logical::{LogicalType, TypeDescriptor};

/// Failures raised by schema resolution and table operations.
///
/// Every variant is fail-fast and non-retryable: it is raised at the point
/// of detection and propagates to the caller untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A type descriptor has no registry mapping.
    #[error("type {0} is not currently supported")]
    UnsupportedType(TypeDescriptor),

    /// Column name/dtype lists cannot form a schema (length mismatch or
    /// duplicate name) at construction.
    #[error("column name/dtype mismatch: {0}")]
    SchemaMismatch(String),

    /// A load targeted a column that is not in the schema.
    #[error("unknown column '{0}': schema change not implemented")]
    UnknownColumn(String),

    /// A loaded sequence mixed unrelated element types.
    #[error("column '{0}': data must be homogenous type")]
    HeterogeneousColumn(String),

    /// The backend rejected the resolved dtype against the column's
    /// declared dtype.
    #[error("column '{column}': cannot load {loaded} data into {declared} column")]
    TypeMismatch {
        column: String,
        loaded: LogicalType,
        declared: LogicalType,
    },

    /// Backend failure outside of type checking (double init, load before
    /// init, load past capacity, allocation failure in a native engine).
    #[error("backend error: {0}")]
    Backend(String),
}
