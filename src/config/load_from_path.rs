use std::{fs, path::Path};

use serde_json::Value;

use super::{ConfigValidator, HmtlConfig};
use crate::error::Result;

impl HmtlConfig {
    /// Read a JSON document without validating it
    pub fn read_document(path: &Path) -> Result<Value> {
        let content = fs::read_to_string(path)?;
        let document: Value = serde_json::from_str(&content)?;
        Ok(document)
    }

    /// Read, validate and type a configuration file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        ConfigValidator::load(Self::read_document(path)?)
    }
}
