//! binding
//!
//! The façade a host registers as an in-game command.
//!
//! # Responsibilities
//!
//! - Expose name and aliases for the host's dispatch table
//! - Turn tab-completion calls into candidate lists
//! - Render usage text for the requester
//! - Execute parsed commands against a fresh instance per invocation
//!
//! # Architecture
//!
//! A [`CommandBinding`] is stateless between calls. Each call builds its
//! own command object (via the binding's [`InstanceFactory`]) and its own
//! [`ChatWriter`], so concurrent invocations from different requesters
//! share nothing but the read-only converter registry. Parsing, validation
//! and help rendering are clap's; every failure path is reported to the
//! requester's chat and `execute` itself never returns an error.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use chatbind::binding::{CommandBinding, GameCommand};
//! use chatbind::convert::ConverterRegistry;
//! use chatbind::factory::InstanceFactory;
//! use chatbind::source::SourceHandle;
//!
//! #[derive(Default, clap::Parser)]
//! #[command(name = "ping")]
//! struct Ping;
//!
//! impl GameCommand for Ping {
//!     fn run(&mut self, source: &SourceHandle) -> anyhow::Result<()> {
//!         source.send_message("pong");
//!         Ok(())
//!     }
//! }
//!
//! let registry = Arc::new(ConverterRegistry::new());
//! let binding =
//!     CommandBinding::new(InstanceFactory::<Ping>::default_constructed(), registry).unwrap();
//! assert_eq!(binding.name(), "ping");
//! ```

use std::any::type_name;
use std::collections::HashSet;
use std::sync::Arc;

use clap::{CommandFactory, FromArgMatches};

use crate::complete;
use crate::convert::{ConversionError, ConverterRegistry};
use crate::descriptor::CommandDescriptor;
use crate::errors::ConfigurationError;
use crate::factory::InstanceFactory;
use crate::normalize;
use crate::output::ChatWriter;
use crate::source::SourceHandle;

/// Completion candidates are capped here and truncated silently.
pub const MAX_COMPLETIONS: usize = 500;

/// Help text width suited to a chat window rather than a terminal.
pub const CHAT_HELP_WIDTH: usize = 55;

/// A clap-derived command type that can run inside a game host.
///
/// The type's clap metadata must set an explicit command name
/// (`#[command(name = "...")]`); aliases declared there become the
/// binding's aliases.
pub trait GameCommand: FromArgMatches + CommandFactory {
    /// Resolve registry-backed argument types after parsing, before
    /// [`run`](Self::run). Failing here aborts the invocation with the
    /// error's message and never calls `run`.
    fn resolve(&mut self, converters: &ConverterRegistry) -> Result<(), ConversionError> {
        let _ = converters;
        Ok(())
    }

    /// Completion names for the argument with clap id `arg`, computed at
    /// call time from host state (typically a lookup converter's name
    /// table via [`ConverterRegistry::lookup_names`]). The default knows
    /// nothing; returned names merge with the argument's declared values.
    fn completion_candidates(
        &self,
        arg: &str,
        converters: &ConverterRegistry,
    ) -> Option<Vec<String>> {
        let _ = (arg, converters);
        None
    }

    /// The command's own logic. Errors are reported to the requester as a
    /// single chat message without backtraces.
    fn run(&mut self, source: &SourceHandle) -> anyhow::Result<()>;
}

/// One command type bound into the host's dispatcher.
pub struct CommandBinding<K: GameCommand> {
    descriptor: CommandDescriptor,
    factory: InstanceFactory<K>,
    converters: Arc<ConverterRegistry>,
}

impl<K: GameCommand> std::fmt::Debug for CommandBinding<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandBinding")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

impl<K: GameCommand> CommandBinding<K> {
    /// Bind `K` with the default presentation settings (chat-width help,
    /// standard help flag).
    ///
    /// # Errors
    ///
    /// Fails when the factory has no constructor or the clap metadata has
    /// no command name. Both are registration-time mistakes; nothing here
    /// is shown to requesters.
    pub fn new(
        factory: InstanceFactory<K>,
        converters: Arc<ConverterRegistry>,
    ) -> Result<Self, ConfigurationError> {
        Self::with_options(factory, converters, true)
    }

    /// Bind `K`, choosing whether the default presentation settings apply.
    pub fn with_options(
        factory: InstanceFactory<K>,
        converters: Arc<ConverterRegistry>,
        default_options: bool,
    ) -> Result<Self, ConfigurationError> {
        if !factory.has_constructor() {
            return Err(ConfigurationError::NoUsableConstructor {
                type_name: type_name::<K>(),
            });
        }

        let descriptor =
            CommandDescriptor::from_command(&K::command(), type_name::<K>(), default_options)?;

        Ok(Self {
            descriptor,
            factory,
            converters,
        })
    }

    /// Canonical command name.
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// Alias names, in declaration order.
    pub fn aliases(&self) -> &[String] {
        self.descriptor.aliases()
    }

    /// Completion candidates for the partial last token of `raw_args`.
    ///
    /// Static candidates come from the clap model; dynamic ones from a
    /// fresh instance's [`GameCommand::completion_candidates`], built for
    /// this call so it sees the requester. Candidates are deduplicated in
    /// order, capped at [`MAX_COMPLETIONS`], and concatenated onto the
    /// partial token so each result substitutes directly as the full next
    /// token. No match yields an empty list, never an error.
    pub fn completions(&self, source: &SourceHandle, raw_args: &[String]) -> Vec<String> {
        let args = normalize::completion_args(raw_args);
        let Some(partial) = args.last().cloned() else {
            return Vec::new();
        };

        let instance = match self.factory.create(source) {
            Ok(instance) => instance,
            Err(err) => {
                tracing::error!(command = self.descriptor.name(), %err, "binding misconfigured");
                return Vec::new();
            }
        };
        let live = |arg: &str| instance.completion_candidates(arg, &self.converters);

        let mut model = self.model();
        let suffixes = complete::candidates(&mut model, &args, &live);

        tracing::trace!(
            command = self.descriptor.name(),
            requester = %source.name(),
            candidates = suffixes.len(),
            "tab completion"
        );

        let mut seen = HashSet::new();
        suffixes
            .into_iter()
            .filter(|suffix| seen.insert(suffix.clone()))
            .take(MAX_COMPLETIONS)
            .map(|suffix| format!("{partial}{suffix}"))
            .collect()
    }

    /// Rendered usage text for this command.
    pub fn usage(&self) -> String {
        self.model().render_help().to_string()
    }

    /// Execute one invocation.
    ///
    /// Builds a fresh instance, parses the normalized arguments, resolves
    /// registry-typed values, then runs the command. Parse failures, help
    /// and version requests, conversion failures and command-logic errors
    /// all surface as chat messages to `source`; nothing is returned.
    pub fn execute(&self, source: &SourceHandle, raw_args: &[String]) {
        let writer = ChatWriter::new(source.clone());

        tracing::debug!(
            command = self.descriptor.name(),
            requester = %source.name(),
            args = ?raw_args,
            "executing bound command"
        );

        // The constructor slot was checked at binding time, so this only
        // fails if the binding was built by hand around the checks.
        let mut instance = match self.factory.create(source) {
            Ok(instance) => instance,
            Err(err) => {
                tracing::error!(command = self.descriptor.name(), %err, "binding misconfigured");
                return;
            }
        };

        let args = normalize::execution_args(raw_args);

        let matches = match self.model().try_get_matches_from(&args) {
            Ok(matches) => matches,
            // Validation failures, --help and --version all render here.
            Err(err) => {
                writer.write_line(err.render().to_string().trim_end());
                return;
            }
        };

        if let Err(err) = instance.update_from_arg_matches(&matches) {
            writer.write_line(err.render().to_string().trim_end());
            return;
        }

        if let Err(err) = instance.resolve(&self.converters) {
            writer.write_line(&err.to_string());
            return;
        }

        if let Err(err) = instance.run(source) {
            writer.write_line(&format!("{err:#}"));
        }
    }

    /// The clap model for one call, with presentation settings applied.
    /// Host arguments never include the command name itself.
    fn model(&self) -> clap::Command {
        let mut cmd = K::command().no_binary_name(true);
        if self.descriptor.default_options() {
            cmd = cmd.term_width(CHAT_HELP_WIDTH);
        } else {
            cmd = cmd.disable_help_flag(true);
        }
        cmd
    }
}

/// Object-safe view of a binding, for heterogeneous dispatch tables.
///
/// Hosts keep `Box<dyn BoundCommand>` values keyed by name and alias and
/// never need the concrete command type again.
pub trait BoundCommand: Send + Sync {
    /// Canonical command name.
    fn name(&self) -> &str;

    /// Alias names, in declaration order.
    fn aliases(&self) -> &[String];

    /// See [`CommandBinding::completions`].
    fn completions(&self, source: &SourceHandle, raw_args: &[String]) -> Vec<String>;

    /// See [`CommandBinding::usage`].
    fn usage(&self) -> String;

    /// See [`CommandBinding::execute`].
    fn execute(&self, source: &SourceHandle, raw_args: &[String]);
}

impl<K: GameCommand> BoundCommand for CommandBinding<K> {
    fn name(&self) -> &str {
        CommandBinding::name(self)
    }

    fn aliases(&self) -> &[String] {
        CommandBinding::aliases(self)
    }

    fn completions(&self, source: &SourceHandle, raw_args: &[String]) -> Vec<String> {
        CommandBinding::completions(self, source, raw_args)
    }

    fn usage(&self) -> String {
        CommandBinding::usage(self)
    }

    fn execute(&self, source: &SourceHandle, raw_args: &[String]) {
        CommandBinding::execute(self, source, raw_args)
    }
}
