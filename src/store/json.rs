//! JSON document format for persisted host info
//!
//! ```json
//! {
//!   "serializer_version": 1,
//!   "labels": ["board:eve", "pool:bvt"],
//!   "attributes": {"servo_host": "labstation1"}
//! }
//! ```

use crate::error::{HostInfoError, HostInfoResult};
use crate::info::HostInfo;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current serializer version written to every document
pub const SERIALIZER_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Document {
    serializer_version: u32,
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    attributes: BTreeMap<String, String>,
}

/// Serialize host info into a pretty-printed JSON document
pub fn serialize(info: &HostInfo) -> HostInfoResult<String> {
    let doc = Document {
        serializer_version: SERIALIZER_VERSION,
        labels: info.labels.clone(),
        attributes: info.attributes.clone(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Parse a JSON document into host info
pub fn deserialize(content: &str) -> HostInfoResult<HostInfo> {
    let doc: Document = serde_json::from_str(content)?;
    if doc.serializer_version != SERIALIZER_VERSION {
        return Err(HostInfoError::UnsupportedSerializerVersion(
            doc.serializer_version,
        ));
    }
    Ok(HostInfo::new(doc.labels, doc.attributes))
}
