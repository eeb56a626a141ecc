use serde::{Deserialize, Serialize};

use crate::id::IdGenerator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVariable {
    pub id: String,
    pub key: String,
    pub value: String,
    pub enabled: bool,
}

impl EnvVariable {
    pub fn new(
        ids: &mut dyn IdGenerator,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: ids.next_id(),
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }
}

/// Named, swappable set of variables used for `{{key}}` substitution.
/// At most one environment is current at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub id: String,
    pub name: String,
    pub variables: Vec<EnvVariable>,
}

impl Environment {
    pub fn new(ids: &mut dyn IdGenerator, name: impl Into<String>) -> Self {
        Self {
            id: ids.next_id(),
            name: name.into(),
            variables: Vec::new(),
        }
    }
}
