//! JSON export boundary
//!
//! Serializes one parse result for external consumers. The document shape
//! is `{language, entities, calls, timestamp, checksum}`; consumers only
//! rely on it being valid JSON.

use chrono::Utc;
use serde::Serialize;

use super::error::Result;
use super::models::{Call, Entity, Language, ParseResult};

/// Exportable snapshot of one extraction
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument<'a> {
    pub language: &'a str,
    pub entities: &'a [Entity],
    pub calls: &'a [Call],
    /// RFC 3339 export time
    pub timestamp: String,
    /// MD5 of the source buffer the result was extracted from
    pub checksum: String,
}

impl<'a> ExportDocument<'a> {
    /// Build a document from a parse result and the buffer it came from
    pub fn new(result: &'a ParseResult, language: Language, source: &str) -> Self {
        Self {
            language: language.tag(),
            entities: &result.entities,
            calls: &result.calls,
            timestamp: Utc::now().to_rfc3339(),
            checksum: calculate_md5(source),
        }
    }

    /// Serialize as compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Calculate MD5 checksum of content as a hexadecimal string
pub fn calculate_md5(content: &str) -> String {
    format!("{:x}", md5::compute(content.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extractor::parse;

    #[test]
    fn test_calculate_md5() {
        // well-known digest
        assert_eq!(calculate_md5(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(calculate_md5("hello"), "5d41402abc4b2a76b9719d911017c592");
    }

    #[test]
    fn test_export_document_shape() {
        let source = "def greet(name):\n    pass\n\ndef main():\n    greet(\"x\")\n";
        let result = parse(source, "python");
        let doc = ExportDocument::new(&result, Language::Python, source);
        let json = doc.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["language"], "python");
        assert_eq!(value["entities"].as_array().unwrap().len(), 2);
        assert_eq!(value["calls"].as_array().unwrap().len(), 1);
        assert!(value["timestamp"].as_str().unwrap().contains('T'));
        assert_eq!(value["checksum"], calculate_md5(source));
    }

    #[test]
    fn test_export_empty_result_is_valid_json() {
        let result = parse("", "python");
        let doc = ExportDocument::new(&result, Language::Python, "");
        let json = doc.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["entities"].as_array().unwrap().is_empty());
    }
}
