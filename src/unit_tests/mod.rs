#[macro_use]
mod test_utils;

mod tests;
