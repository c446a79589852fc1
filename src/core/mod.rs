//! Aggregation services, sample data, and the session that ties them to a store.

pub mod sample_data;
pub mod services;
pub mod session;

pub use sample_data::SampleDataConfig;
pub use session::FinanceSession;
