use std::fmt;

use crate::errors::Error;

/// Storage-level column type understood by the backend.
///
/// The `Native*` variants mirror fixed-dtype array buffers that are loaded
/// as one opaque block; the plain variants come from element-wise data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalType {
    Int64,
    Float64,
    Bool,
    Str,
    NativeInt64,
    NativeFloat64,
    NativeBool,
    NativeStr,
    NativeComplex128,
}

impl LogicalType {
    /// Schema-level category name, as exported to the visualization layer.
    pub fn category(&self) -> &'static str {
        match self {
            LogicalType::Int64 | LogicalType::NativeInt64 => "int",
            LogicalType::Float64 | LogicalType::NativeFloat64 => "float",
            LogicalType::Bool | LogicalType::NativeBool => "boolean",
            LogicalType::Str | LogicalType::NativeStr => "string",
            LogicalType::NativeComplex128 => "complex",
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category())
    }
}

/// What a caller may hand in as a column type: an already-resolved storage
/// type, a primitive scalar tag, or a native array element dtype.
///
/// The descriptor space is wider than the supported set: upstream format
/// adapters can report tags (dates, raw bytes, opaque objects) that the
/// registry has no storage mapping for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeDescriptor {
    Logical(LogicalType),
    Int,
    Float,
    Bool,
    Str,
    Date,
    Datetime,
    Bytes,
    Object,
    NativeInt64,
    NativeFloat64,
    NativeBool,
    NativeStr,
    NativeComplex128,
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Logical(dtype) => write!(f, "{dtype}"),
            TypeDescriptor::Int => write!(f, "int"),
            TypeDescriptor::Float => write!(f, "float"),
            TypeDescriptor::Bool => write!(f, "bool"),
            TypeDescriptor::Str => write!(f, "str"),
            TypeDescriptor::Date => write!(f, "date"),
            TypeDescriptor::Datetime => write!(f, "datetime"),
            TypeDescriptor::Bytes => write!(f, "bytes"),
            TypeDescriptor::Object => write!(f, "object"),
            TypeDescriptor::NativeInt64 => write!(f, "int64"),
            TypeDescriptor::NativeFloat64 => write!(f, "float64"),
            TypeDescriptor::NativeBool => write!(f, "bool_"),
            TypeDescriptor::NativeStr => write!(f, "str_"),
            TypeDescriptor::NativeComplex128 => write!(f, "complex128"),
        }
    }
}

/// Resolves a caller-supplied type descriptor to the storage type the
/// backend understands.
/// Returns an error for any descriptor outside the dispatch table; there
/// is no fallback inference.
pub fn resolve_dtype(descriptor: TypeDescriptor) -> Result<LogicalType, Error> {
    match descriptor {
        TypeDescriptor::Logical(dtype) => Ok(dtype),
        TypeDescriptor::Int => Ok(LogicalType::Int64),
        TypeDescriptor::Float => Ok(LogicalType::Float64),
        TypeDescriptor::Bool => Ok(LogicalType::Bool),
        TypeDescriptor::Str => Ok(LogicalType::Str),
        TypeDescriptor::NativeInt64 => Ok(LogicalType::NativeInt64),
        TypeDescriptor::NativeFloat64 => Ok(LogicalType::NativeFloat64),
        TypeDescriptor::NativeBool => Ok(LogicalType::NativeBool),
        TypeDescriptor::NativeStr => Ok(LogicalType::NativeStr),
        TypeDescriptor::NativeComplex128 => Ok(LogicalType::NativeComplex128),
        other => Err(Error::UnsupportedType(other)),
    }
}
