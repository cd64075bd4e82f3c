use std::cell::RefCell;

use colstore_core::storage::{BackendHandle, Schema};
use colstore_core::{
    ColumnData, Complex128, Error, LogicalType, NativeBuffer, Table, TypeDescriptor, Value,
};

mod growth;
mod load;

fn sample_table() -> Table {
    Table::new(&["a", "b"], &[TypeDescriptor::Int, TypeDescriptor::Str]).unwrap()
}

// Per-thread call log; the test harness runs each test on its own thread.
thread_local! {
    static CALLS: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

fn record(call: String) {
    CALLS.with(|calls| calls.borrow_mut().push(call));
}

fn take_calls() -> Vec<String> {
    CALLS.with(|calls| calls.take())
}

/// Engine double that records every call the table makes against it.
#[derive(Debug)]
struct RecordingBackend {
    capacity: usize,
    columns: Vec<String>,
}

impl BackendHandle for RecordingBackend {
    fn create(schema: &Schema) -> Result<Self, Error> {
        record("create".to_string());
        Ok(Self {
            capacity: 0,
            columns: schema.columns.iter().map(|c| c.name.clone()).collect(),
        })
    }

    fn init(&mut self) -> Result<(), Error> {
        record("init".to_string());
        Ok(())
    }

    fn size(&self) -> usize {
        record("size".to_string());
        self.capacity
    }

    fn extend(&mut self, n: usize) -> Result<(), Error> {
        record(format!("extend({n})"));
        self.capacity = self.capacity.max(n);
        Ok(())
    }

    fn has_column(&self, name: &str) -> bool {
        record(format!("has_column({name})"));
        self.columns.iter().any(|c| c == name)
    }

    fn load_column(
        &mut self,
        name: &str,
        _data: &ColumnData,
        dtype: LogicalType,
    ) -> Result<(), Error> {
        record(format!("load_column({name}, {dtype})"));
        Ok(())
    }

    fn pprint(&self) -> String {
        record("pprint".to_string());
        String::new()
    }
}
