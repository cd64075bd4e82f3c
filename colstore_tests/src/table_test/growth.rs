use super::*;

#[test]
fn load_grows_capacity_to_payload_length() {
    let mut table = sample_table();
    table.load("a", vec![1i64, 2, 3]).unwrap();
    assert_eq!(table.size(), 3);
}

#[test]
fn capacity_never_shrinks() {
    let mut table = sample_table();
    table.load("a", vec![1i64, 2, 3, 4]).unwrap();
    table.load("b", vec!["x", "y"]).unwrap();
    assert_eq!(table.size(), 4);
}

#[test]
fn growth_preserves_rows_below_old_capacity() {
    let mut table = sample_table();
    table.load("a", vec![1i64, 2]).unwrap();
    table.load("b", vec!["x", "y", "z", "w"]).unwrap();
    assert_eq!(table.size(), 4);
    assert_eq!(table.render(), "a\tb\n1\tx\n2\ty\n0\tz\n0\tw");
}

#[test]
fn equal_length_load_keeps_capacity() {
    let mut table = sample_table();
    table.load("a", vec![1i64, 2, 3]).unwrap();
    table.load("b", vec!["x", "y", "z"]).unwrap();
    assert_eq!(table.size(), 3);
}

#[test]
fn growth_from_failed_load_persists() {
    let mut table = Table::new(&["a"], &[TypeDescriptor::Int]).unwrap();
    table.load("missing", vec![1i64, 2, 3, 4, 5]).unwrap_err();
    assert_eq!(table.size(), 5);
}
