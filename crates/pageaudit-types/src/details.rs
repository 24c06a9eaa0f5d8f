use serde::ser::Error as _;
use serde::{Deserialize, Serialize};

/// A single table row (or sub-row) as rendered by the report viewer.
pub type TableItem = serde_json::Map<String, serde_json::Value>;

/// How the renderer should format a column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Text,
    Url,
}

/// Heading for the nested rows under a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubItemsHeading {
    pub key: String,
    pub value_type: ValueType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableHeading {
    pub key: String,
    pub value_type: ValueType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_items_heading: Option<SubItemsHeading>,
}

impl TableHeading {
    pub fn new(key: &str, value_type: ValueType, label: &str) -> Self {
        Self {
            key: key.to_string(),
            value_type,
            label: Some(label.to_string()),
            sub_items_heading: None,
        }
    }

    pub fn with_sub_items(mut self, key: &str, value_type: ValueType) -> Self {
        self.sub_items_heading = Some(SubItemsHeading {
            key: key.to_string(),
            value_type,
        });
        self
    }
}

/// Nested rows attached to a table row, e.g. the frames a reason applied to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "subitems")]
pub struct SubItems {
    pub items: Vec<TableItem>,
}

impl SubItems {
    /// One sub-row per value, each holding `{key: value}`.
    pub fn from_values<I, S>(key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = values
            .into_iter()
            .map(|value| {
                let mut item = TableItem::new();
                item.insert(key.to_string(), serde_json::Value::String(value.into()));
                item
            })
            .collect();
        Self { items }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDetails {
    pub headings: Vec<TableHeading>,
    pub items: Vec<TableItem>,
}

impl TableDetails {
    /// Build a table from typed rows. Every row must serialize to a JSON object.
    pub fn from_rows<T: Serialize>(
        headings: Vec<TableHeading>,
        rows: &[T],
    ) -> serde_json::Result<Self> {
        let items = rows
            .iter()
            .map(|row| match serde_json::to_value(row)? {
                serde_json::Value::Object(map) => Ok(map),
                other => Err(serde_json::Error::custom(format!(
                    "table row must be an object, got {other}"
                ))),
            })
            .collect::<serde_json::Result<Vec<_>>>()?;
        Ok(Self { headings, items })
    }
}

/// Structured details attached to an audit result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Details {
    Table(TableDetails),
}

impl Details {
    pub fn as_table(&self) -> Option<&TableDetails> {
        match self {
            Details::Table(table) => Some(table),
        }
    }
}
