use crate::{PropertyData, changed_event_name};
use serde::{Deserialize, Serialize};

/// Property contract of one exported element.
///
/// Consumed by whatever generates the client-side custom element: the tag to
/// define and the properties (with their change event names) it exposes.
/// Properties are sorted by name so the output is stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSchema {
    pub tag: String,
    pub properties: Vec<PropertySchema>,
}

/// One property of an [`ElementSchema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySchema {
    #[serde(flatten)]
    pub data: PropertyData,
    pub changed_event: String,
}

impl ElementSchema {
    pub fn new(tag: impl Into<String>, properties: impl IntoIterator<Item = PropertyData>) -> Self {
        let mut properties: Vec<PropertySchema> = properties
            .into_iter()
            .map(|data| PropertySchema {
                changed_event: changed_event_name(data.name()),
                data,
            })
            .collect();
        properties.sort_by(|a, b| a.data.name().cmp(b.data.name()));
        Self {
            tag: tag.into(),
            properties,
        }
    }

    pub fn property(&self, name: &str) -> Option<&PropertySchema> {
        self.properties.iter().find(|p| p.data.name() == name)
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
