use serde::{Deserialize, Serialize};

/// Body of `POST /add`. Absent fields decode as `None` so the workflow can
/// report them instead of the body decoder.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct NewNote {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ContentBody {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: &str) -> Self {
        Message {
            message: message.to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Html {
    pub html: String,
}
