use serde::{Deserialize, Serialize};

use crate::airflow::model::{impl_dto, Extras, Maybe};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableCollectionItem {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub key: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub description: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub key: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub description: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub value: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableCollection {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub variables: Vec<VariableCollectionItem>,
    pub total_entries: i64,
}

impl_dto!(VariableCollectionItem, Variable, VariableCollection);
