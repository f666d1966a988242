pub mod constants;
pub mod datetime;
pub mod types;

#[cfg(test)]
pub mod test_helpers;
