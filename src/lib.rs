//! Chatbind - bind clap command types into game-server chat dispatchers
//!
//! Chatbind lets command types written against clap's derive API be
//! registered as in-game commands. The host supplies a requester and the
//! raw split arguments of a chat line; chatbind constructs a fresh command
//! object, drives clap's parsing, validation and help rendering, answers
//! tab-completion requests, and redirects all of clap's console-oriented
//! output into the requester's chat.
//!
//! # Architecture
//!
//! - [`binding`] - Per-command façade: completions, usage, execution
//! - [`descriptor`] - Immutable name/alias metadata per binding
//! - [`factory`] - Fresh command-object construction per invocation
//! - [`normalize`] - Raw chat tokens reshaped for parsing vs. completion
//! - [`complete`] - Candidate derivation from the clap command model
//! - [`convert`] - Shared registry of string-to-domain-type converters
//! - [`output`] - Chat-message sink for clap's usage and error text
//! - [`source`] - The requester seam the host implements
//!
//! # Correctness Invariants
//!
//! 1. Every invocation gets a fresh command instance; no state crosses calls
//! 2. Binding mistakes fail at registration, never in front of a requester
//! 3. Every per-invocation failure becomes chat messages, never a panic
//! 4. The converter registry is immutable once shared

pub mod binding;
pub mod complete;
pub mod convert;
pub mod descriptor;
pub mod errors;
pub mod factory;
pub mod normalize;
pub mod output;
pub mod source;

pub use binding::{BoundCommand, CommandBinding, GameCommand, MAX_COMPLETIONS};
pub use convert::{ConversionError, ConverterRegistry};
pub use descriptor::CommandDescriptor;
pub use errors::ConfigurationError;
pub use factory::InstanceFactory;
pub use output::ChatWriter;
pub use source::{CommandSource, SourceHandle};
