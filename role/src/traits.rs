use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("unknown role: {0}")]
    UnknownRole(String),
}

/// Persona contract expected by the orchestration host.
///
/// Implementations are plain static data, so every method is infallible and
/// safe to call from any thread.
pub trait Role: Send + Sync {
    /// Identifier the host uses to select this role.
    fn name(&self) -> &str;

    /// Preamble establishing who the bot is.
    fn introduction(&self) -> &str;

    /// Behavioral rules, in the order they are presented.
    fn rules(&self) -> &[&str];

    /// Wrap a user message in the role's input template.
    fn format_input(&self, message: Option<&str>) -> String;

    /// Whether introduction and rules go out as a system message.
    fn uses_system(&self) -> bool {
        true
    }

    /// Introduction followed by one rule per line.
    fn system_prompt(&self) -> String {
        let mut prompt = self.introduction().to_string();
        for rule in self.rules() {
            prompt.push('\n');
            prompt.push_str(rule);
        }
        prompt
    }

    fn describe(&self) -> RoleDescription {
        RoleDescription {
            name: self.name().to_string(),
            introduction: self.introduction().to_string(),
            rules: self.rules().iter().map(|r| r.to_string()).collect(),
            uses_system: self.uses_system(),
        }
    }
}

/// Serializable snapshot of a [`Role`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoleDescription {
    pub name: String,
    pub introduction: String,
    pub rules: Vec<String>,
    pub uses_system: bool,
}
