/// The Elm Architecture (TEA) pattern implementation for the message board
///
/// This module provides a structured approach to state management following
/// the Model-Update-View pattern from Elm, adapted for Ratatui terminal interfaces.
/// Remote calls and timers are described as commands and their results come
/// back as messages.

pub mod command;
pub mod message;
pub mod model;
pub mod update;

pub use command::{run_store_command, Command, CommandExecutor, StoreCommand};
pub use message::{Focus, Msg};
pub use model::Model;
pub use update::update;

/// Result of processing a TEA update cycle
pub struct UpdateResult<M> {
    pub model: M,
    pub commands: Vec<Command>,
}

impl<M> UpdateResult<M> {
    pub fn new(model: M, commands: Vec<Command>) -> Self {
        Self { model, commands }
    }

    pub fn just_model(model: M) -> Self {
        Self {
            model,
            commands: Vec::new(),
        }
    }

    pub fn with_command(model: M, command: Command) -> Self {
        Self {
            model,
            commands: vec![command],
        }
    }
}
