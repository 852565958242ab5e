use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::form::EditForm;

pub struct ShowCommand;

#[async_trait]
impl Command for ShowCommand {
    fn name(&self) -> &str {
        "/show"
    }

    fn aliases(&self) -> &[&str] {
        &["/s"]
    }

    fn description(&self) -> &str {
        "show the form with any field errors"
    }

    async fn execute(&self, _args: &str, form: &mut EditForm) -> CommandResult {
        println!("  intern {}", form.id());
        print!("{}", form.state().render());
        CommandResult::Handled
    }
}
