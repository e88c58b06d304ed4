#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

//! Reports end-to-end browser test runs to the Wopee testing platform over
//! its GraphQL API.
//!
//! The host test framework owns a [`SuiteSession`] and drives it at three
//! lifecycle points, strictly in order and each awaited to completion before
//! the next: [`SuiteSession::open`] before any test executes,
//! [`SuiteSession::end_scenario`] after each logical grouping of tests, and
//! [`SuiteSession::close`] once the run completes. Individual tests report
//! scenarios and steps through the same session.

pub mod configuration;
pub mod domain;
pub mod infrastructure;

pub use crate::domain::models::ReportingError;
pub use crate::domain::services::SuiteSession;
pub use crate::infrastructure::graphql::GraphQLClient;
