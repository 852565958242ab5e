use async_trait::async_trait;

use super::{Command, CommandResult};
use crate::form::EditForm;
use crate::model::Field;

/// Overwrites one field of the form, like typing into its input.
pub struct SetFieldCommand {
    name: &'static str,
    field: Field,
    usage: &'static str,
    description: String,
}

impl SetFieldCommand {
    pub fn new(name: &'static str, field: Field, usage: &'static str) -> Self {
        Self {
            name,
            field,
            usage,
            description: format!("set {} (empty clears it)", field.label().to_lowercase()),
        }
    }
}

#[async_trait]
impl Command for SetFieldCommand {
    fn name(&self) -> &str {
        self.name
    }

    fn usage(&self) -> &str {
        self.usage
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn execute(&self, args: &str, form: &mut EditForm) -> CommandResult {
        form.set_field(self.field, args);
        CommandResult::Handled
    }
}
