//! Request parameters a client sends to the host alongside a role name.

use serde::{Deserialize, Serialize};

use crate::anachrovox::Anachrovox;

/// Parameters for the language model step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LanguageParameters {
    pub role: String,
    pub stream: bool,
    pub use_tools: bool,
    pub max_tokens: u32,
    pub return_tool_metadata: bool,
    /// Prompts and replies, alternating, oldest first.
    #[serde(default)]
    pub history: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl Default for LanguageParameters {
    fn default() -> Self {
        Self {
            role: Anachrovox::NAME.to_string(),
            stream: true,
            use_tools: true,
            max_tokens: 1024,
            return_tool_metadata: true,
            history: Vec::new(),
            top_k: None,
            top_p: None,
            min_p: None,
            temperature: None,
        }
    }
}

impl LanguageParameters {
    pub fn with_history(mut self, history: Vec<String>) -> Self {
        self.history = history;
        self
    }

    /// Record a finished exchange: the user's prompt, then the reply.
    pub fn push_exchange(&mut self, prompt: impl Into<String>, reply: impl Into<String>) {
        self.history.push(prompt.into());
        self.history.push(reply.into());
    }
}

/// Parameters for the text-to-speech step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeechParameters {
    pub enhance: bool,
    pub output_format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
}

impl Default for SpeechParameters {
    fn default() -> Self {
        Self {
            enhance: true,
            output_format: "float".to_string(),
            voice: None,
            speed: None,
        }
    }
}

/// Voice display names and the identifiers the speech bot expects.
pub const VOICES: [(&str, &str); 10] = [
    ("Adam", "male.en.us.adam"),
    ("Bella", "female.en.us.bella"),
    ("Emma", "female.en.gb.emma"),
    ("George", "male.en.gb.george"),
    ("Isabel", "female.en.gb.isabella"),
    ("Lewis", "male.en.gb.lewis"),
    ("Michael", "male.en.us.michael"),
    ("Nicole", "female.en.us.nicole"),
    ("Sarah", "female.en.us.sarah"),
    ("Skye", "female.en.us.sky"),
];

pub fn voice_id(name: &str) -> Option<&'static str> {
    VOICES.iter().find(|(n, _)| *n == name).map(|(_, id)| *id)
}
