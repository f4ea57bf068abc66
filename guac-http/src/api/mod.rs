pub mod client;
pub mod responses;
