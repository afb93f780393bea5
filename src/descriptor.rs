//! descriptor
//!
//! Immutable per-binding command metadata.
//!
//! # Design
//!
//! A [`CommandDescriptor`] is derived once, at binding time, from the clap
//! command model the bound type declares. It is never mutated afterwards
//! and is owned exclusively by its binding. Validation happens at
//! construction: a descriptor with an empty name cannot exist.

use crate::errors::ConfigurationError;

/// Name, aliases, and presentation settings for one bound command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    name: String,
    aliases: Vec<String>,
    default_options: bool,
}

impl CommandDescriptor {
    /// Derive a descriptor from a clap command model.
    ///
    /// `type_name` names the Rust type in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingName`] if the model's name is
    /// empty.
    pub fn from_command(
        cmd: &clap::Command,
        type_name: &'static str,
        default_options: bool,
    ) -> Result<Self, ConfigurationError> {
        let name = cmd.get_name().to_string();
        if name.is_empty() {
            return Err(ConfigurationError::MissingName { type_name });
        }

        let aliases = cmd.get_all_aliases().map(String::from).collect();

        Ok(Self {
            name,
            aliases,
            default_options,
        })
    }

    /// Canonical command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alias names, in declaration order. May be empty.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Whether the default presentation settings (chat-width help, standard
    /// help flag) apply to this binding.
    pub fn default_options(&self) -> bool {
        self.default_options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_name_and_aliases_in_order() {
        let cmd = clap::Command::new("tp")
            .alias("teleport")
            .alias("warp");
        let desc = CommandDescriptor::from_command(&cmd, "Tp", true).unwrap();

        assert_eq!(desc.name(), "tp");
        assert_eq!(desc.aliases(), ["teleport", "warp"]);
        assert!(desc.default_options());
    }

    #[test]
    fn empty_alias_list_is_fine() {
        let cmd = clap::Command::new("home");
        let desc = CommandDescriptor::from_command(&cmd, "Home", false).unwrap();

        assert_eq!(desc.name(), "home");
        assert!(desc.aliases().is_empty());
        assert!(!desc.default_options());
    }

    #[test]
    fn empty_name_is_a_configuration_error() {
        let cmd = clap::Command::new("");
        let err = CommandDescriptor::from_command(&cmd, "Anon", true).unwrap_err();

        assert_eq!(err, ConfigurationError::MissingName { type_name: "Anon" });
    }
}
