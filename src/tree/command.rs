//! Command builder
//!
//! A [`Command`] is assembled with fluent registration calls and then moved
//! into a [`CommandTree`](crate::tree::CommandTree). Children are owned by
//! their parent builder, so a builder can never end up under two parents.

use crate::domain::{Arguments, CliOption, Param};
use crate::error::{DefinitionError, Result};
use std::fmt;

/// Function run when a command is dispatched
pub type Handler = Box<dyn Fn(&Arguments) -> Result<serde_json::Value> + Send + Sync>;

/// A command node under construction
pub struct Command {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) handler: Option<Handler>,
    pub(crate) options: Vec<CliOption>,
    pub(crate) params: Vec<Param>,
    pub(crate) children: Vec<Command>,
}

impl Command {
    /// Create a command with no description, handler, or children
    ///
    /// # Errors
    /// Returns `DefinitionError::EmptyCommandName` if `name` is empty
    pub fn new(name: impl Into<String>) -> std::result::Result<Self, DefinitionError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DefinitionError::EmptyCommandName);
        }

        Ok(Self {
            name,
            description: String::new(),
            handler: None,
            options: Vec::new(),
            params: Vec::new(),
            children: Vec::new(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Arguments) -> Result<serde_json::Value> + Send + Sync + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    pub fn add_option(mut self, option: CliOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn add_options<I>(self, options: I) -> Self
    where
        I: IntoIterator<Item = CliOption>,
    {
        options.into_iter().fold(self, Self::add_option)
    }

    pub fn add_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn add_params<I>(self, params: I) -> Self
    where
        I: IntoIterator<Item = Param>,
    {
        params.into_iter().fold(self, Self::add_param)
    }

    /// Register a child; its parent link is set when the tree is built
    pub fn add_command(mut self, command: Command) -> Self {
        self.children.push(command);
        self
    }

    pub fn add_commands<I>(self, commands: I) -> Self
    where
        I: IntoIterator<Item = Command>,
    {
        commands.into_iter().fold(self, Self::add_command)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn options(&self) -> &[CliOption] {
        &self.options
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn children(&self) -> &[Command] {
        &self.children
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("handler", &self.handler.is_some())
            .field("options", &self.options)
            .field("params", &self.params)
            .field("children", &self.children)
            .finish()
    }
}
