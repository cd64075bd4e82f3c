pub mod errors;
pub mod storage;
pub mod table;
pub mod types;

pub use errors::Error;
pub use storage::{BackendHandle, Column, MemBackend, Schema};
pub use table::Table;
pub use types::{
    ColumnData, Complex128, LogicalType, NativeBuffer, TypeDescriptor, Value, resolve_dtype,
};
