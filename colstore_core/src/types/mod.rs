pub mod logical;
pub mod value;

pub use logical::{LogicalType, TypeDescriptor, resolve_dtype};
pub use value::{ColumnData, Complex128, NativeBuffer, Value};
