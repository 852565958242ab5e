use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::form::EditForm;

/// Lists commands. Dispatch intercepts it, since the text comes from the
/// registry.
pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        "/help"
    }

    fn aliases(&self) -> &[&str] {
        &["/h", "/?"]
    }

    fn description(&self) -> &str {
        "show available commands"
    }

    async fn execute(&self, _args: &str, _form: &mut EditForm) -> CommandResult {
        CommandResult::Handled
    }
}
