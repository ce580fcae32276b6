//! Data transfer objects of the Airflow 2.x REST API (`/api/v1`).
//!
//! Optional attributes are [`Maybe`](crate::airflow::model::Maybe) so that an
//! omitted key, an explicit `null` and a value stay distinguishable.

pub mod connection;
pub mod dag;
pub mod dagrun;
pub mod error;
pub mod eventlog;
pub mod importerror;
pub mod monitoring;
pub mod pool;
pub mod schedule;
pub mod task;
pub mod taskinstance;
pub mod variable;
pub mod xcom;

pub use error::ApiError;
