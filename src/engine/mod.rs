pub mod filter;
pub mod mapper;
pub mod patch;
pub mod record;
pub mod sort;
pub mod stats;
pub mod status;

#[cfg(test)]
pub(crate) mod test_support;
