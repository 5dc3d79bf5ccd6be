//! Role definitions handed to the bot orchestration host.
//!
//! A [`Role`] bundles the persona text a language-model bot is primed with:
//! a system introduction, an ordered list of rules, and the template that
//! wraps each user message. [`Anachrovox`] is the voice assistant persona;
//! [`RoleRegistry`] lets a host look roles up by name.

pub mod anachrovox;
pub mod params;
pub mod registry;
pub mod traits;

pub use anachrovox::Anachrovox;
pub use params::{voice_id, LanguageParameters, SpeechParameters, VOICES};
pub use registry::RoleRegistry;
pub use traits::{Role, RoleDescription, RoleError};
