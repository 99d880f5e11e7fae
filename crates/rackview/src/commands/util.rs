//! Shared helpers for command handlers.

use rackview_core::Confirmation;

use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<Confirmation, CliError> {
    if yes_flag {
        return Ok(Confirmation::Confirmed);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(if confirmed {
        Confirmation::Confirmed
    } else {
        Confirmation::Declined
    })
}

/// Prompt for a free-text value (e.g., a username).
pub fn prompt_input(message: &str) -> Result<String, CliError> {
    dialoguer::Input::new()
        .with_prompt(message)
        .interact_text()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))
}
