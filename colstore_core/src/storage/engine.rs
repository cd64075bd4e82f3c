use crate::errors::Error;
use crate::storage::schema::Schema;
use crate::types::logical::LogicalType;
use crate::types::value::ColumnData;

/// Storage engine boundary - abstraction over the backend that owns the
/// physical column buffers (in-memory reference engine, ffi-bound native
/// engine, etc.)
///
/// A handle is exclusively owned by one table and must never be shared
/// across tables.
pub trait BackendHandle {
    /// Allocates zero-row storage for the given schema and returns a
    /// handle over it
    fn create(schema: &Schema) -> Result<Self, Error>
    where
        Self: Sized;

    /// One-time setup; called exactly once per handle before any load
    fn init(&mut self) -> Result<(), Error>;

    /// Current allocated row capacity
    fn size(&self) -> usize;

    /// Grows row capacity to at least `n`, preserving existing data.
    /// Never shrinks.
    fn extend(&mut self, n: usize) -> Result<(), Error>;

    /// Checks if the named column exists in the handle's storage
    fn has_column(&self, name: &str) -> bool;

    /// Bulk-writes `data` into the named column as `dtype`, starting at
    /// row 0. The backend has the final say on type compatibility.
    fn load_column(
        &mut self,
        name: &str,
        data: &ColumnData,
        dtype: LogicalType,
    ) -> Result<(), Error>;

    /// Diagnostic text rendering of the full table
    fn pprint(&self) -> String;
}
