use tracing::debug;

use crate::errors::Error;
use crate::storage::engine::BackendHandle;
use crate::storage::mem::MemBackend;
use crate::storage::schema::Schema;
use crate::types::logical::{TypeDescriptor, resolve_dtype};
use crate::types::value::ColumnData;

/// A statically-typed, column-oriented, incrementally-growable table.
///
/// The table owns its backend handle exclusively: callers see named
/// columns, but the physical buffers live behind the handle and have no
/// identity of their own. The schema is fixed at construction; the only
/// mutations are capacity growth and column loads.
#[derive(Debug)]
pub struct Table<B: BackendHandle = MemBackend> {
    schema: Schema,
    handle: B,
}

impl Table<MemBackend> {
    /// Builds a table over the in-memory engine from column names and
    /// type descriptors. The two lists must pair up one to one.
    pub fn new(names: &[&str], descriptors: &[TypeDescriptor]) -> Result<Self, Error> {
        Self::with_backend(names, descriptors)
    }
}

impl<B: BackendHandle> Table<B> {
    /// Builds a table over a caller-chosen engine. Allocates zero-row
    /// storage for the resolved schema and runs the engine's one-time
    /// setup before the table is returned; a failure at any step leaves
    /// no observable table behind.
    pub fn with_backend(names: &[&str], descriptors: &[TypeDescriptor]) -> Result<Self, Error> {
        let schema = Schema::resolve(names, descriptors)?;
        let mut handle = B::create(&schema)?;
        handle.init()?;
        debug!(columns = schema.column_count(), "table created");
        Ok(Self { schema, handle })
    }

    /// The resolved schema this table was built over
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Current allocated row capacity
    pub fn size(&self) -> usize {
        self.handle.size()
    }

    /// Bulk-loads `data` into the named column, growing row capacity
    /// first when the payload is longer than the current allocation.
    /// Writes start at row 0, so a repeated load overwrites the previous
    /// one rather than appending after it.
    pub fn load(&mut self, column: &str, data: impl Into<ColumnData>) -> Result<(), Error> {
        let data = data.into();

        if self.handle.size() < data.len() {
            debug!(column, rows = data.len(), "growing row capacity");
            self.handle.extend(data.len())?;
        }

        if !self.handle.has_column(column) {
            return Err(Error::UnknownColumn(column.to_string()));
        }

        validate_col(column, &data)?;

        // An empty cell payload has no element dtype and nothing to write.
        let Some(descriptor) = data.element_descriptor() else {
            return Ok(());
        };
        let dtype = resolve_dtype(descriptor)?;

        debug!(column, rows = data.len(), dtype = %dtype, "loading column");
        self.handle.load_column(column, &data, dtype)
    }

    /// Diagnostic rendering via the engine's pretty-printer
    pub fn render(&self) -> String {
        self.handle.pprint()
    }
}

/// Every element must share a type with its neighbor: for each adjacent
/// pair, one side's type must subsume the other's (bool counts as an
/// int). Native buffers are a single dtype by construction and skip the
/// walk.
fn validate_col(column: &str, data: &ColumnData) -> Result<(), Error> {
    let ColumnData::Cells(cells) = data else {
        return Ok(());
    };
    for pair in cells.windows(2) {
        if !pair[0].compatible_with(&pair[1]) {
            return Err(Error::HeterogeneousColumn(column.to_string()));
        }
    }
    Ok(())
}
