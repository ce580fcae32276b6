//! Typed REST client for Apache Airflow.
//!
//! Airflow 2.x servers speak the `api/v1` REST API and are covered by
//! [`airflow::client::v2`]; Airflow 3.x servers speak `api/v2` and are covered by
//! [`airflow::client::v3`]. Every endpoint is a function returning an
//! [`Operation`](airflow::client::Operation) that either [`AsyncClient`] or
//! [`BlockingClient`] executes.

pub mod airflow;
pub mod logging;

pub use airflow::client::{AsyncClient, BlockingClient, ClientError, Response};
pub use airflow::config::{AirflowConfig, AirflowVersion, ConfigFile};
pub use airflow::model::{Dto, Maybe, Timestamp};
