use serde::{Deserialize, Serialize};

/// Name and phone collected at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
}

impl CustomerInfo {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

/// Payload for `POST /orders`.
///
/// `lesson_ids` and `num_spaces` are parallel: entry `i` of each describes
/// the same cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub name: String,
    pub phone: String,
    #[serde(rename = "lessonIDs")]
    pub lesson_ids: Vec<String>,
    #[serde(rename = "numSpaces")]
    pub num_spaces: Vec<u32>,
}
