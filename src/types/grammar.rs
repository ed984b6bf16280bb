use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Answer of a LanguageTool `/v2/check` call, kept as sent so clients get
/// the checker's own issue details back.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct GrammarReport {
    #[serde(default)]
    pub matches: Vec<Value>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl GrammarReport {
    pub fn is_clean(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn details(&self) -> Value {
        let mut details = self.rest.clone();
        details.insert("matches".to_string(), Value::Array(self.matches.clone()));
        Value::Object(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn details_are_the_answer_as_sent() {
        let answer = json!({
            "software": {"name": "LanguageTool", "version": "6.4"},
            "language": {"name": "English (US)", "code": "en-US"},
            "matches": [{
                "message": "Possible spelling mistake found.",
                "shortMessage": "Spelling mistake",
                "replacements": [{"value": "content"}],
                "offset": 8,
                "length": 7,
                "context": {"text": "This is contnet.", "offset": 8, "length": 7},
                "type": {"typeName": "UnknownWord"},
                "rule": {
                    "id": "MORFOLOGIK_RULE_EN_US",
                    "urls": [{"value": "https://example.org/rule"}],
                    "category": {"id": "TYPOS", "name": "Possible Typo"}
                }
            }]
        });
        let report: GrammarReport = serde_json::from_value(answer.clone()).unwrap();
        assert!(!report.is_clean());
        assert_eq!(report.details(), answer);
    }

    #[test]
    fn sparse_match_gains_no_fields() {
        let answer = json!({ "matches": [{ "message": "m", "rule": { "id": "X" } }] });
        let report: GrammarReport = serde_json::from_value(answer.clone()).unwrap();
        let details = report.details();
        assert_eq!(details, answer);
        assert!(details["matches"][0].get("offset").is_none());
    }

    #[test]
    fn missing_matches_means_clean() {
        let report: GrammarReport = serde_json::from_str(r#"{"software": {}}"#).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.details()["matches"], json!([]));
    }
}
