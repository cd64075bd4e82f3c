use super::*;

#[test]
fn new_table_is_empty() {
    let table = sample_table();
    assert_eq!(table.size(), 0);
    assert_eq!(table.render(), "a\tb");
}

#[test]
fn load_two_columns_and_render() {
    let mut table = sample_table();
    table.load("a", vec![1i64, 2, 3, 4]).unwrap();
    table.load("b", vec!["x", "y", "z", "w"]).unwrap();
    assert_eq!(table.size(), 4);
    assert_eq!(table.render(), "a\tb\n1\tx\n2\ty\n3\tz\n4\tw");
}

#[test]
fn reload_overwrites_from_row_zero() {
    let mut table = sample_table();
    table.load("a", vec![1i64, 2, 3, 4]).unwrap();
    table.load("a", vec![9i64, 8]).unwrap();
    assert_eq!(table.size(), 4);
    assert_eq!(table.render(), "a\tb\n9\t\n8\t\n3\t\n4\t");
}

#[test]
fn native_buffers_load_into_native_columns() {
    let mut table = Table::new(
        &["n", "x", "f", "s", "z"],
        &[
            TypeDescriptor::NativeInt64,
            TypeDescriptor::NativeFloat64,
            TypeDescriptor::NativeBool,
            TypeDescriptor::NativeStr,
            TypeDescriptor::NativeComplex128,
        ],
    )
    .unwrap();

    table.load("n", NativeBuffer::Int64(vec![1, 2])).unwrap();
    table
        .load("x", NativeBuffer::Float64(vec![1.5, 2.5]))
        .unwrap();
    table
        .load("f", NativeBuffer::Bool(vec![true, false]))
        .unwrap();
    table
        .load("s", NativeBuffer::Str(vec!["a".to_string(), "b".to_string()]))
        .unwrap();
    table
        .load(
            "z",
            NativeBuffer::Complex128(vec![
                Complex128::new(1.0, 2.0),
                Complex128::new(3.0, -4.0),
            ]),
        )
        .unwrap();

    assert_eq!(
        table.render(),
        "n\tx\tf\ts\tz\n1\t1.5\ttrue\ta\t1+2i\n2\t2.5\tfalse\tb\t3-4i"
    );
}

#[test]
fn native_buffer_loads_into_scalar_declared_column() {
    let mut table = sample_table();
    table.load("a", NativeBuffer::Int64(vec![5, 6])).unwrap();
    assert_eq!(table.render(), "a\tb\n5\t\n6\t");
}

#[test]
fn scalar_cells_load_into_native_declared_column() {
    let mut table = Table::new(&["n"], &[TypeDescriptor::NativeInt64]).unwrap();
    table.load("n", vec![1i64, 2]).unwrap();
    assert_eq!(table.render(), "n\n1\n2");
}

#[test]
fn empty_cell_load_is_a_noop() {
    let mut table = sample_table();
    table.load("a", Vec::<Value>::new()).unwrap();
    assert_eq!(table.size(), 0);
    assert_eq!(table.render(), "a\tb");
}

#[test]
fn unknown_column_load_errors() {
    let mut table = Table::new(&["a"], &[TypeDescriptor::Int]).unwrap();
    let err = table.load("b", vec![1i64]).unwrap_err();
    assert_eq!(err, Error::UnknownColumn("b".to_string()));
    assert_eq!(
        err.to_string(),
        "unknown column 'b': schema change not implemented"
    );
}

#[test]
fn unknown_column_load_leaves_existing_columns_unchanged() {
    let mut table = sample_table();
    table.load("a", vec![1i64, 2]).unwrap();
    let before = table.render();
    table.load("c", vec![7i64, 8]).unwrap_err();
    assert_eq!(table.render(), before);
}

#[test]
fn type_mismatch_is_reported_by_the_backend() {
    let mut table = sample_table();
    let err = table.load("a", vec!["x", "y"]).unwrap_err();
    assert_eq!(
        err,
        Error::TypeMismatch {
            column: "a".to_string(),
            loaded: LogicalType::Str,
            declared: LogicalType::Int64,
        }
    );
}

#[test]
fn float_cells_do_not_load_into_int_column() {
    let mut table = sample_table();
    let err = table.load("a", vec![1.5f64, 2.5]).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
}
