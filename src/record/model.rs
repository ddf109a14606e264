use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single inventory record in the standard HostDB schema.
///
/// Empty fields are left out of the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    /// Record identifier; assigned by the server when empty.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Record type, e.g. `openstack`.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub record_type: String,
    /// Host name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hostname: String,
    /// IP address.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ip: String,
    /// Collection time.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub timestamp: String,
    /// Who or what submitted the record.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub committer: String,
    /// Collector context, e.g. region or tenant.
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub context: Map<String, Value>,
    /// Arbitrary collected payload.
    #[serde(skip_serializing_if = "Value::is_null")]
    pub data: Value,
    /// Content hash computed by the server.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hash: String,
}

/// A batch of records of the same type collected together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordSet {
    /// Record type shared by every record.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Collection time.
    pub timestamp: String,
    /// Context shared by every record.
    pub context: Map<String, Value>,
    /// Who or what submitted the batch.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub committer: String,
    /// Records in the batch.
    pub records: Vec<Record>,
}
