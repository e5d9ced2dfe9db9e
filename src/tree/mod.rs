//! Command tree
//!
//! Commands live in an arena owned by [`CommandTree`] and are addressed by
//! [`CommandId`]. Each node keeps the id of its parent, which is only used
//! to rebuild the root-first path for usage text.
//!
//! Mutation goes through `&mut CommandTree`; every read (matching, usage,
//! dispatch) takes `&self`. Sharing the tree therefore seals it.

pub mod command;
pub mod definition;
pub mod dispatch;
pub mod matching;
pub mod usage;

pub use command::{Command, Handler};
pub use definition::CommandDefinition;
pub use dispatch::Dispatch;
pub use usage::UsageStyle;

use crate::domain::{CliOption, Param};
use crate::error::DefinitionError;
use crate::tokenizer::{AliasTable, FlagTokenizer, Tokenizer};

use std::collections::BTreeSet;
use std::fmt;

/// Index of a command inside its tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommandId(usize);

impl CommandId {
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

struct Node {
    name: String,
    description: String,
    handler: Option<Handler>,
    options: Vec<CliOption>,
    params: Vec<Param>,
    children: Vec<CommandId>,
    parent: Option<CommandId>,
}

/// Arena of commands plus the tokenizer used for matching and dispatch
pub struct CommandTree {
    nodes: Vec<Node>,
    root: CommandId,
    tokenizer: Box<dyn Tokenizer>,
}

impl CommandTree {
    /// Build a tree rooted at `root`, using [`FlagTokenizer`]
    pub fn new(root: Command) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            root: CommandId(0),
            tokenizer: Box::new(FlagTokenizer::new()),
        };
        tree.root = tree.insert(root);
        tree
    }

    pub fn with_tokenizer<T: Tokenizer + 'static>(mut self, tokenizer: T) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    pub fn set_tokenizer(&mut self, tokenizer: Box<dyn Tokenizer>) {
        self.tokenizer = tokenizer;
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    pub fn root(&self) -> CommandRef<'_> {
        CommandRef {
            tree: self,
            id: self.root,
        }
    }

    pub fn get(&self, id: CommandId) -> Option<CommandRef<'_>> {
        (id.0 < self.nodes.len()).then_some(CommandRef { tree: self, id })
    }

    /// Follow child names from the root; an empty path yields the root
    pub fn find<S: AsRef<str>>(&self, path: &[S]) -> Option<CommandRef<'_>> {
        path.iter()
            .try_fold(self.root(), |node, name| node.child(name.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Flag names declared as switches somewhere in the tree and never as a
    /// valued option
    ///
    /// Used to split positionals before the target command is known.
    pub fn unambiguous_switches(&self) -> BTreeSet<String> {
        let mut switches = BTreeSet::new();
        let mut valued = BTreeSet::new();

        for option in self.nodes.iter().flat_map(|node| &node.options) {
            let names = if option.is_switch() {
                &mut switches
            } else {
                &mut valued
            };
            names.insert(option.short().to_string());
            if let Some(long) = option.long() {
                names.insert(long.to_string());
            }
        }

        switches.retain(|name| !valued.contains(name));
        switches
    }

    /// Add a command subtree without a parent
    ///
    /// The returned id can later be attached with [`CommandTree::link`].
    pub fn insert(&mut self, command: Command) -> CommandId {
        self.insert_subtree(command, None)
    }

    /// Append `command` as the last child of `parent`
    ///
    /// # Errors
    /// Returns `DefinitionError::UnknownCommand` if `parent` is not in this tree
    pub fn add_command(
        &mut self,
        parent: CommandId,
        command: Command,
    ) -> Result<CommandId, DefinitionError> {
        self.check(parent)?;
        let id = self.insert_subtree(command, Some(parent));
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Attach a detached command under `parent`
    ///
    /// # Errors
    /// - `AlreadyParented` if `child` already has a parent
    /// - `Cycle` if `child` is `parent` or one of its ancestors
    /// - `UnknownCommand` if either id is not in this tree
    pub fn link(&mut self, parent: CommandId, child: CommandId) -> Result<(), DefinitionError> {
        self.check(parent)?;
        self.check(child)?;

        if let Some(existing) = self.nodes[child.0].parent {
            return Err(DefinitionError::AlreadyParented {
                child: self.nodes[child.0].name.clone(),
                parent: self.nodes[existing.0].name.clone(),
            });
        }

        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(DefinitionError::Cycle {
                    child: self.nodes[child.0].name.clone(),
                    parent: self.nodes[parent.0].name.clone(),
                });
            }
            cursor = self.nodes[id.0].parent;
        }

        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        log::debug!(
            "linked '{}' under '{}'",
            self.nodes[child.0].name,
            self.nodes[parent.0].name
        );
        Ok(())
    }

    pub fn add_option(&mut self, id: CommandId, option: CliOption) -> Result<(), DefinitionError> {
        self.check(id)?;
        self.nodes[id.0].options.push(option);
        Ok(())
    }

    pub fn add_param(&mut self, id: CommandId, param: Param) -> Result<(), DefinitionError> {
        self.check(id)?;
        self.nodes[id.0].params.push(param);
        Ok(())
    }

    fn check(&self, id: CommandId) -> Result<(), DefinitionError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(DefinitionError::UnknownCommand(id.0))
        }
    }

    fn insert_subtree(&mut self, command: Command, parent: Option<CommandId>) -> CommandId {
        let Command {
            name,
            description,
            handler,
            options,
            params,
            children,
        } = command;

        let id = CommandId(self.nodes.len());
        self.nodes.push(Node {
            name,
            description,
            handler,
            options,
            params,
            children: Vec::with_capacity(children.len()),
            parent,
        });

        for child in children {
            let child_id = self.insert_subtree(child, Some(id));
            self.nodes[id.0].children.push(child_id);
        }

        id
    }
}

impl fmt::Debug for CommandTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandTree")
            .field("root", &self.root().name())
            .field("nodes", &self.nodes.len())
            .finish()
    }
}

/// Read handle to one command of a tree
#[derive(Clone, Copy)]
pub struct CommandRef<'a> {
    tree: &'a CommandTree,
    id: CommandId,
}

impl<'a> CommandRef<'a> {
    fn node(&self) -> &'a Node {
        &self.tree.nodes[self.id.0]
    }

    fn at(&self, id: CommandId) -> CommandRef<'a> {
        CommandRef {
            tree: self.tree,
            id,
        }
    }

    pub fn id(&self) -> CommandId {
        self.id
    }

    pub fn tree(&self) -> &'a CommandTree {
        self.tree
    }

    pub fn name(&self) -> &'a str {
        &self.node().name
    }

    pub fn description(&self) -> &'a str {
        &self.node().description
    }

    pub fn options(&self) -> &'a [CliOption] {
        &self.node().options
    }

    pub fn params(&self) -> &'a [Param] {
        &self.node().params
    }

    pub fn has_handler(&self) -> bool {
        self.node().handler.is_some()
    }

    pub(crate) fn handler(&self) -> Option<&'a Handler> {
        self.node().handler.as_ref()
    }

    /// Children in registration order
    pub fn children(&self) -> impl Iterator<Item = CommandRef<'a>> + 'a {
        let tree = self.tree;
        self.node()
            .children
            .iter()
            .map(move |&id| CommandRef { tree, id })
    }

    pub fn has_children(&self) -> bool {
        !self.node().children.is_empty()
    }

    /// First child with exactly this name
    pub fn child(&self, name: &str) -> Option<CommandRef<'a>> {
        self.children().find(|c| c.name() == name)
    }

    pub fn parent(&self) -> Option<CommandRef<'a>> {
        self.node().parent.map(|id| self.at(id))
    }

    /// Names from the root down to this command
    pub fn path(&self) -> Vec<&'a str> {
        let mut names = vec![self.name()];
        let mut cursor = self.parent();
        while let Some(node) = cursor {
            names.push(node.name());
            cursor = node.parent();
        }
        names.reverse();
        names
    }

    /// Long id -> `[short id]` for every option that declares a long id
    pub fn aliases(&self) -> AliasTable {
        self.options()
            .iter()
            .filter_map(|opt| {
                opt.long()
                    .map(|long| (long.to_string(), vec![opt.short().to_string()]))
            })
            .collect()
    }
}

impl<'a> CommandRef<'a> {
    /// Short and long ids of this command's switches
    pub fn switches(&self) -> BTreeSet<String> {
        self.options()
            .iter()
            .filter(|opt| opt.is_switch())
            .flat_map(|opt| std::iter::once(opt.short()).chain(opt.long()))
            .map(String::from)
            .collect()
    }
}

impl PartialEq for CommandRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for CommandRef<'_> {}

impl fmt::Debug for CommandRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRef")
            .field("id", &self.id.0)
            .field("path", &self.path())
            .finish()
    }
}
