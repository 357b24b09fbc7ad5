use serde::{Deserialize, Serialize};

/// An editor command that can be executed remotely
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub id: String,
    pub name: String,
}

/// Envelope returned by `GET /commands`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandList {
    pub commands: Vec<Command>,
}
