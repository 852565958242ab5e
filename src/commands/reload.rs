use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::form::EditForm;
use crate::spinner::while_waiting;

pub struct ReloadCommand;

#[async_trait]
impl Command for ReloadCommand {
    fn name(&self) -> &str {
        "/reload"
    }

    fn description(&self) -> &str {
        "fetch the intern again, discarding local edits"
    }

    async fn execute(&self, _args: &str, form: &mut EditForm) -> CommandResult {
        match while_waiting("loading intern", form.reload()).await {
            Ok(()) => print!("{}", form.state().render()),
            Err(e) => eprintln!("error: {e:#}"),
        }
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_form;
    use crate::model::Field;

    #[tokio::test]
    async fn discards_local_edits() {
        let (mut form, _api) = test_form().await;
        form.set_field(Field::Name, "Someone Else");
        assert_eq!(ReloadCommand.execute("", &mut form).await, CommandResult::Handled);
        assert_eq!(form.record().name, "Ada Lovelace");
        assert_eq!(form.record().internship_start, "2024-01-01");
    }
}
