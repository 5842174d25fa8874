use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ModelError;
use crate::tutor::require_id;

/// A student record as stored in the students document. Beyond the
/// required `id` the server treats the record as opaque.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StudentProfile {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl StudentProfile {
    /// Build a profile from a raw registration body. Requires a
    /// non-empty string `id`.
    pub fn from_registration(mut body: Map<String, Value>) -> Result<Self, ModelError> {
        let id = require_id(&body)?;
        body.remove("id");
        Ok(Self { id, fields: body })
    }
}
