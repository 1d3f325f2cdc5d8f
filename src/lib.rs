// Library for tests to access modules

pub mod aggregation;
pub mod config;
pub mod error;
pub mod models;
pub mod modes;
pub mod routes;
pub mod version;
