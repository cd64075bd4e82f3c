use std::fmt;

use crate::types::logical::TypeDescriptor;

/// A single cell value, as handed over by the upstream format adapters.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// The type descriptor of this value, as fed to the schema registry.
    pub fn descriptor(&self) -> TypeDescriptor {
        match self {
            Value::Bool(_) => TypeDescriptor::Bool,
            Value::Int(_) => TypeDescriptor::Int,
            Value::Float(_) => TypeDescriptor::Float,
            Value::Str(_) => TypeDescriptor::Str,
        }
    }

    /// Pairwise type compatibility: a value may sit next to one of the
    /// same variant, and bools may sit next to ints in either direction
    /// (bool counts as an int). Everything else is a mix of unrelated
    /// types.
    pub fn compatible_with(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Bool(_), Value::Bool(_))
            | (Value::Int(_), Value::Int(_))
            | (Value::Float(_), Value::Float(_))
            | (Value::Str(_), Value::Str(_)) => true,
            (Value::Bool(_), Value::Int(_)) | (Value::Int(_), Value::Bool(_)) => true,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

/// A 128-bit complex value (two f64 lanes), matching the layout of the
/// backend's complex column buffers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex128 {
    pub re: f64,
    pub im: f64,
}

impl Complex128 {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

impl fmt::Display for Complex128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:+}i", self.re, self.im)
    }
}

/// A fixed-dtype columnar block. Loaded as one opaque unit; element-wise
/// homogeneity checking does not apply.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeBuffer {
    Int64(Vec<i64>),
    Float64(Vec<f64>),
    Bool(Vec<bool>),
    Str(Vec<String>),
    Complex128(Vec<Complex128>),
}

impl NativeBuffer {
    pub fn len(&self) -> usize {
        match self {
            NativeBuffer::Int64(v) => v.len(),
            NativeBuffer::Float64(v) => v.len(),
            NativeBuffer::Bool(v) => v.len(),
            NativeBuffer::Str(v) => v.len(),
            NativeBuffer::Complex128(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The native element dtype of this buffer.
    pub fn descriptor(&self) -> TypeDescriptor {
        match self {
            NativeBuffer::Int64(_) => TypeDescriptor::NativeInt64,
            NativeBuffer::Float64(_) => TypeDescriptor::NativeFloat64,
            NativeBuffer::Bool(_) => TypeDescriptor::NativeBool,
            NativeBuffer::Str(_) => TypeDescriptor::NativeStr,
            NativeBuffer::Complex128(_) => TypeDescriptor::NativeComplex128,
        }
    }
}

/// The payload of one column load: a plain sequence of cell values, or a
/// native fixed-dtype buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Cells(Vec<Value>),
    Native(NativeBuffer),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Cells(cells) => cells.len(),
            ColumnData::Native(buffer) => buffer.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Descriptor of the leading element (cells) or of the buffer's
    /// native dtype. `None` for an empty cell sequence.
    pub fn element_descriptor(&self) -> Option<TypeDescriptor> {
        match self {
            ColumnData::Cells(cells) => cells.first().map(Value::descriptor),
            ColumnData::Native(buffer) => Some(buffer.descriptor()),
        }
    }
}

impl From<Vec<Value>> for ColumnData {
    fn from(cells: Vec<Value>) -> Self {
        ColumnData::Cells(cells)
    }
}

impl From<NativeBuffer> for ColumnData {
    fn from(buffer: NativeBuffer) -> Self {
        ColumnData::Native(buffer)
    }
}

impl From<Vec<i64>> for ColumnData {
    fn from(values: Vec<i64>) -> Self {
        ColumnData::Cells(values.into_iter().map(Value::Int).collect())
    }
}

impl From<Vec<f64>> for ColumnData {
    fn from(values: Vec<f64>) -> Self {
        ColumnData::Cells(values.into_iter().map(Value::Float).collect())
    }
}

impl From<Vec<bool>> for ColumnData {
    fn from(values: Vec<bool>) -> Self {
        ColumnData::Cells(values.into_iter().map(Value::Bool).collect())
    }
}

impl From<Vec<&str>> for ColumnData {
    fn from(values: Vec<&str>) -> Self {
        ColumnData::Cells(values.into_iter().map(Value::from).collect())
    }
}

impl From<Vec<String>> for ColumnData {
    fn from(values: Vec<String>) -> Self {
        ColumnData::Cells(values.into_iter().map(Value::Str).collect())
    }
}
