pub mod api;
pub mod conf;
pub mod core;
pub mod dataset;
pub mod scenario;
pub mod service;
pub mod table;

#[cfg(feature = "testutil")]
pub mod testutil;
