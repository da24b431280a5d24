pub mod docs;
pub mod todo;

#[cfg(test)]
pub(crate) mod test_util;
