use crate::errors::Error;
use crate::storage::engine::BackendHandle;
use crate::storage::schema::Schema;
use crate::types::logical::LogicalType;
use crate::types::value::{ColumnData, Complex128, NativeBuffer, Value};

/// In-memory storage engine holding one typed buffer per column.
#[derive(Debug)]
pub struct MemBackend {
    columns: Vec<MemColumn>,
    capacity: usize,
    initialized: bool,
}

#[derive(Debug)]
struct MemColumn {
    name: String,
    dtype: LogicalType,
    buffer: ColumnBuffer,
}

/// Physical buffer for one column. Native dtypes share the buffer layout
/// of their scalar counterparts.
#[derive(Debug)]
enum ColumnBuffer {
    Int64(Vec<i64>),
    Float64(Vec<f64>),
    Bool(Vec<bool>),
    Str(Vec<String>),
    Complex128(Vec<Complex128>),
}

impl ColumnBuffer {
    fn for_dtype(dtype: LogicalType) -> Self {
        match dtype {
            LogicalType::Int64 | LogicalType::NativeInt64 => ColumnBuffer::Int64(Vec::new()),
            LogicalType::Float64 | LogicalType::NativeFloat64 => ColumnBuffer::Float64(Vec::new()),
            LogicalType::Bool | LogicalType::NativeBool => ColumnBuffer::Bool(Vec::new()),
            LogicalType::Str | LogicalType::NativeStr => ColumnBuffer::Str(Vec::new()),
            LogicalType::NativeComplex128 => ColumnBuffer::Complex128(Vec::new()),
        }
    }

    /// Grows the buffer to `n` slots, default-filling the new ones.
    fn grow(&mut self, n: usize) {
        match self {
            ColumnBuffer::Int64(v) => v.resize(n, 0),
            ColumnBuffer::Float64(v) => v.resize(n, 0.0),
            ColumnBuffer::Bool(v) => v.resize(n, false),
            ColumnBuffer::Str(v) => v.resize(n, String::new()),
            ColumnBuffer::Complex128(v) => v.resize(n, Complex128::default()),
        }
    }

    fn render(&self, row: usize) -> String {
        match self {
            ColumnBuffer::Int64(v) => v[row].to_string(),
            ColumnBuffer::Float64(v) => v[row].to_string(),
            ColumnBuffer::Bool(v) => v[row].to_string(),
            ColumnBuffer::Str(v) => v[row].clone(),
            ColumnBuffer::Complex128(v) => v[row].to_string(),
        }
    }
}

impl MemColumn {
    /// Writes `data` into rows `[0, len)` of this column's buffer.
    ///
    /// The buffer is only touched after the whole payload has converted
    /// cleanly, so a rejected load leaves prior contents intact. Bools
    /// load into int columns and ints into bool columns (bool counts as
    /// an int); any other cross-dtype load is a mismatch.
    fn write(&mut self, data: &ColumnData, loaded: LogicalType) -> Result<(), Error> {
        let MemColumn {
            name,
            dtype,
            buffer,
        } = self;
        match (buffer, data) {
            (ColumnBuffer::Int64(buf), ColumnData::Cells(cells)) => {
                let values = int_cells(name, *dtype, cells)?;
                fill(buf, values);
            }
            (ColumnBuffer::Int64(buf), ColumnData::Native(NativeBuffer::Int64(values))) => {
                buf[..values.len()].copy_from_slice(values);
            }
            (ColumnBuffer::Int64(buf), ColumnData::Native(NativeBuffer::Bool(values))) => {
                for (slot, value) in buf.iter_mut().zip(values) {
                    *slot = *value as i64;
                }
            }
            (ColumnBuffer::Float64(buf), ColumnData::Cells(cells)) => {
                let values = float_cells(name, *dtype, cells)?;
                fill(buf, values);
            }
            (ColumnBuffer::Float64(buf), ColumnData::Native(NativeBuffer::Float64(values))) => {
                buf[..values.len()].copy_from_slice(values);
            }
            (ColumnBuffer::Bool(buf), ColumnData::Cells(cells)) => {
                let values = bool_cells(name, *dtype, cells)?;
                fill(buf, values);
            }
            (ColumnBuffer::Bool(buf), ColumnData::Native(NativeBuffer::Bool(values))) => {
                buf[..values.len()].copy_from_slice(values);
            }
            (ColumnBuffer::Bool(buf), ColumnData::Native(NativeBuffer::Int64(values))) => {
                for (slot, value) in buf.iter_mut().zip(values) {
                    *slot = *value != 0;
                }
            }
            (ColumnBuffer::Str(buf), ColumnData::Cells(cells)) => {
                let values = str_cells(name, *dtype, cells)?;
                fill(buf, values);
            }
            (ColumnBuffer::Str(buf), ColumnData::Native(NativeBuffer::Str(values))) => {
                buf[..values.len()].clone_from_slice(values);
            }
            (
                ColumnBuffer::Complex128(buf),
                ColumnData::Native(NativeBuffer::Complex128(values)),
            ) => {
                buf[..values.len()].copy_from_slice(values);
            }
            _ => {
                return Err(Error::TypeMismatch {
                    column: name.clone(),
                    loaded,
                    declared: *dtype,
                });
            }
        }
        Ok(())
    }
}

impl BackendHandle for MemBackend {
    fn create(schema: &Schema) -> Result<Self, Error> {
        let columns = schema
            .columns
            .iter()
            .map(|c| MemColumn {
                name: c.name.clone(),
                dtype: c.dtype,
                buffer: ColumnBuffer::for_dtype(c.dtype),
            })
            .collect();
        Ok(Self {
            columns,
            capacity: 0,
            initialized: false,
        })
    }

    fn init(&mut self) -> Result<(), Error> {
        if self.initialized {
            return Err(Error::Backend("handle already initialized".to_string()));
        }
        self.initialized = true;
        Ok(())
    }

    fn size(&self) -> usize {
        self.capacity
    }

    fn extend(&mut self, n: usize) -> Result<(), Error> {
        if n <= self.capacity {
            return Ok(());
        }
        for column in &mut self.columns {
            column.buffer.grow(n);
        }
        self.capacity = n;
        Ok(())
    }

    fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    fn load_column(
        &mut self,
        name: &str,
        data: &ColumnData,
        dtype: LogicalType,
    ) -> Result<(), Error> {
        if !self.initialized {
            return Err(Error::Backend("handle not initialized".to_string()));
        }
        if data.len() > self.capacity {
            return Err(Error::Backend(format!(
                "load of {} rows exceeds allocated capacity {}",
                data.len(),
                self.capacity
            )));
        }
        let column = self
            .columns
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| Error::UnknownColumn(name.to_string()))?;
        column.write(data, dtype)
    }

    fn pprint(&self) -> String {
        let header = self
            .columns
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join("\t");

        if self.capacity == 0 {
            return header;
        }

        let row_lines = (0..self.capacity)
            .map(|row| {
                self.columns
                    .iter()
                    .map(|c| c.buffer.render(row))
                    .collect::<Vec<_>>()
                    .join("\t")
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!("{}\n{}", header, row_lines)
    }
}

fn fill<T>(buf: &mut [T], values: Vec<T>) {
    for (slot, value) in buf.iter_mut().zip(values) {
        *slot = value;
    }
}

fn cell_dtype(value: &Value) -> LogicalType {
    match value {
        Value::Bool(_) => LogicalType::Bool,
        Value::Int(_) => LogicalType::Int64,
        Value::Float(_) => LogicalType::Float64,
        Value::Str(_) => LogicalType::Str,
    }
}

fn type_mismatch(column: &str, value: &Value, declared: LogicalType) -> Error {
    Error::TypeMismatch {
        column: column.to_string(),
        loaded: cell_dtype(value),
        declared,
    }
}

fn int_cells(column: &str, declared: LogicalType, cells: &[Value]) -> Result<Vec<i64>, Error> {
    cells
        .iter()
        .map(|value| match value {
            Value::Int(n) => Ok(*n),
            Value::Bool(b) => Ok(*b as i64),
            other => Err(type_mismatch(column, other, declared)),
        })
        .collect()
}

fn float_cells(column: &str, declared: LogicalType, cells: &[Value]) -> Result<Vec<f64>, Error> {
    cells
        .iter()
        .map(|value| match value {
            Value::Float(x) => Ok(*x),
            other => Err(type_mismatch(column, other, declared)),
        })
        .collect()
}

fn bool_cells(column: &str, declared: LogicalType, cells: &[Value]) -> Result<Vec<bool>, Error> {
    cells
        .iter()
        .map(|value| match value {
            Value::Bool(b) => Ok(*b),
            Value::Int(n) => Ok(*n != 0),
            other => Err(type_mismatch(column, other, declared)),
        })
        .collect()
}

fn str_cells(column: &str, declared: LogicalType, cells: &[Value]) -> Result<Vec<String>, Error> {
    cells
        .iter()
        .map(|value| match value {
            Value::Str(s) => Ok(s.clone()),
            other => Err(type_mismatch(column, other, declared)),
        })
        .collect()
}
