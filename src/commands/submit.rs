use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::form::{EditForm, SubmitOutcome};
use crate::spinner::while_waiting;

pub struct SubmitCommand;

#[async_trait]
impl Command for SubmitCommand {
    fn name(&self) -> &str {
        "/submit"
    }

    fn aliases(&self) -> &[&str] {
        &["/save"]
    }

    fn description(&self) -> &str {
        "validate and save the intern"
    }

    async fn execute(&self, _args: &str, form: &mut EditForm) -> CommandResult {
        match while_waiting("saving intern", form.submit()).await {
            Ok(SubmitOutcome::Saved) => println!("✓ saved intern {}", form.id()),
            Ok(SubmitOutcome::Rejected(_)) => {
                println!("✗ not saved, fix the fields below");
                print!("{}", form.state().render());
            }
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
    use crate::validation::REQUIRED;

    #[tokio::test]
    async fn valid_form_is_sent_once() {
        let (mut form, api) = test_form().await;
        assert_eq!(SubmitCommand.execute("", &mut form).await, CommandResult::Handled);
        let updates = api.updates().unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].internship_start, "2024-01-01T00:00+00Z");
    }

    #[tokio::test]
    async fn invalid_form_is_not_sent() {
        let (mut form, api) = test_form().await;
        form.set_field(Field::Name, "");
        SubmitCommand.execute("", &mut form).await;
        assert!(api.updates().unwrap().is_empty());
        assert_eq!(form.errors().get(Field::Name), Some(REQUIRED));
    }
}
