use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// CloudFormation template format version emitted for every template.
pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

/// A CloudFormation-shaped deployment template.
///
/// Sections are `BTreeMap`s so serialized output is byte-deterministic for
/// a given set of entries. Empty sections are omitted entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(rename = "AWSTemplateFormatVersion")]
    pub format_version: String,

    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        rename = "Parameters",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub parameters: BTreeMap<String, Value>,

    #[serde(
        rename = "Resources",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub resources: BTreeMap<String, Value>,

    #[serde(
        rename = "Outputs",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub outputs: BTreeMap<String, Value>,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            format_version: TEMPLATE_FORMAT_VERSION.to_string(),
            description: None,
            parameters: BTreeMap::new(),
            resources: BTreeMap::new(),
            outputs: BTreeMap::new(),
        }
    }
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn add_parameter(&mut self, logical_id: impl Into<String>, parameter: Value) {
        self.parameters.insert(logical_id.into(), parameter);
    }

    pub fn add_resource(&mut self, logical_id: impl Into<String>, resource: Value) {
        self.resources.insert(logical_id.into(), resource);
    }

    pub fn add_output(&mut self, logical_id: impl Into<String>, output: Value) {
        self.outputs.insert(logical_id.into(), output);
    }

    /// Pretty-printed JSON rendering of the template.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_template_omits_sections() {
        let template = Template::new();
        let json = template.to_json_pretty().unwrap();
        assert!(json.contains("\"AWSTemplateFormatVersion\": \"2010-09-09\""));
        assert!(!json.contains("Description"));
        assert!(!json.contains("Resources"));
        assert!(!json.contains("Parameters"));
        assert!(!json.contains("Outputs"));
    }

    #[test]
    fn test_description() {
        let template = Template::new().with_description("A described template");
        let json = template.to_json_pretty().unwrap();
        assert!(json.contains("\"Description\": \"A described template\""));
    }

    #[test]
    fn test_add_resource() {
        let mut template = Template::new();
        template.add_resource(
            "EmbeddingsBucket",
            json!({ "Type": "AWS::S3::Bucket", "Properties": {} }),
        );
        assert_eq!(template.resources.len(), 1);
        let json = template.to_json_pretty().unwrap();
        assert!(json.contains("\"EmbeddingsBucket\""));
        assert!(json.contains("\"AWS::S3::Bucket\""));
    }

    #[test]
    fn test_deterministic_output() {
        let mut a = Template::new();
        a.add_resource("Zebra", json!({ "Type": "AWS::SNS::Topic" }));
        a.add_resource("Alpha", json!({ "Type": "AWS::SQS::Queue" }));

        let mut b = Template::new();
        b.add_resource("Alpha", json!({ "Type": "AWS::SQS::Queue" }));
        b.add_resource("Zebra", json!({ "Type": "AWS::SNS::Topic" }));

        assert_eq!(a.to_json_pretty().unwrap(), b.to_json_pretty().unwrap());
    }

    #[test]
    fn test_round_trip() {
        let template = Template::new().with_description("Round trip");
        let json = template.to_json_pretty().unwrap();
        let deserialized: Template = serde_json::from_str(&json).unwrap();
        assert_eq!(template, deserialized);
    }
}
