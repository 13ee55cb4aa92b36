// src/commands/registry.rs
use std::collections::HashMap;

use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::cd_cmd::CdCommand;
use super::chown_cmd::ChownCommand;
use super::exit_cmd::ExitCommand;
use super::head::HeadCommand;
use super::ls::LsCommand;
use super::rmdir_cmd::RmdirCommand;
use super::whoami_cmd::WhoamiCommand;

/// Register every built-in verb.
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(HeadCommand));
    registry.register(Box::new(ChownCommand));
    registry.register(Box::new(RmdirCommand));
    registry.register(Box::new(WhoamiCommand));
    registry.register(Box::new(ExitCommand));
}

/// Create a registry holding all built-in verbs.
pub fn create_builtin_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry() {
        let registry = create_builtin_registry();
        assert_eq!(
            registry.names(),
            vec!["cat", "cd", "chown", "exit", "head", "ls", "rmdir", "whoami"]
        );
        assert!(registry.contains("ls"));
        assert!(registry.get("mkdir").is_none());
        assert_eq!(registry.get("head").map(|c| c.name()), Some("head"));
    }
}
