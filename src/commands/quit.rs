use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::form::EditForm;

pub struct QuitCommand;

#[async_trait]
impl Command for QuitCommand {
    fn name(&self) -> &str {
        "/quit"
    }

    fn aliases(&self) -> &[&str] {
        &["quit", "exit", "/exit"]
    }

    fn description(&self) -> &str {
        "leave the edit session (unsaved edits are dropped)"
    }

    async fn execute(&self, _args: &str, _form: &mut EditForm) -> CommandResult {
        CommandResult::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_form;

    #[tokio::test]
    async fn returns_quit() {
        let (mut form, _api) = test_form().await;
        assert_eq!(QuitCommand.execute("", &mut form).await, CommandResult::Quit);
    }

    #[test]
    fn has_aliases() {
        let aliases = QuitCommand.aliases();
        assert!(aliases.contains(&"quit"));
        assert!(aliases.contains(&"exit"));
        assert!(aliases.contains(&"/exit"));
    }
}
