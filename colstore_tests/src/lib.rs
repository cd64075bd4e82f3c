#[cfg(test)]
mod table_test;
