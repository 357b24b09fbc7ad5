//! Editor command operations

use obsidian_rest_domain::constants::COMMANDS_SEGMENT;
use obsidian_rest_domain::{Command, CommandList, ObsidianError, ResourceKind, Result};
use reqwest::{Method, StatusCode};
use tracing::{debug, instrument};

use super::client::ObsidianClient;
use super::request::{expect_empty, expect_json, ApiRequest, NotFound};

/// Command operations
#[derive(Debug, Clone, Copy)]
pub struct CommandService<'a> {
    client: &'a ObsidianClient,
}

impl<'a> CommandService<'a> {
    pub(crate) fn new(client: &'a ObsidianClient) -> Self {
        Self { client }
    }

    /// List every command the editor currently offers, in server order.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Command>> {
        let url = self.client.endpoint([COMMANDS_SEGMENT])?;
        let response = self.client.send(ApiRequest::new(Method::GET, url)).await?;
        let list: CommandList = expect_json(response, StatusCode::OK, None).await?;

        debug!(count = list.commands.len(), "Commands listed");
        Ok(list.commands)
    }

    /// Execute the command with `command_id` (e.g. `editor:toggle-bold`).
    ///
    /// # Errors
    ///
    /// Returns `ObsidianError::NotFound` naming the id if the editor does not
    /// know the command, `ObsidianError::InvalidInput` for an empty id.
    #[instrument(skip(self), fields(command_id = %command_id))]
    pub async fn execute(&self, command_id: &str) -> Result<()> {
        if command_id.is_empty() {
            return Err(ObsidianError::InvalidInput("command id is empty".to_string()));
        }

        let url = self.client.endpoint([COMMANDS_SEGMENT, command_id])?;
        let response = self.client.send(ApiRequest::new(Method::POST, url)).await?;
        expect_empty(
            response,
            StatusCode::NO_CONTENT,
            Some(NotFound { kind: ResourceKind::Command, name: command_id }),
        )
        .await
    }
}
