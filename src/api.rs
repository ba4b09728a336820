mod client;
pub mod ocf;
