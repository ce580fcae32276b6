use serde::{Deserialize, Serialize};

use crate::airflow::model::{impl_dto, Extras, Maybe};

/// A connection as listed, without secrets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionCollectionItem {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub connection_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub conn_type: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub description: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub host: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub login: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub schema: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub port: Maybe<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub connection_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub conn_type: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub description: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub host: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub login: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub schema: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub port: Maybe<i64>,
    /// Write-only: never returned by the API.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub password: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub extra: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionCollection {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub connections: Vec<ConnectionCollectionItem>,
    pub total_entries: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionTest {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub status: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub message: Maybe<String>,
}

impl_dto!(
    ConnectionCollectionItem,
    Connection,
    ConnectionCollection,
    ConnectionTest
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn patch_body_sends_only_what_changed() {
        let patch = Connection {
            connection_id: Maybe::Present("warehouse".to_string()),
            conn_type: Maybe::Present("postgres".to_string()),
            description: Maybe::Null,
            port: Maybe::Present(5432),
            ..Connection::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"connection_id": "warehouse", "conn_type": "postgres", "description": null, "port": 5432})
        );
    }
}
