//! `login`, `logout`, and `whoami` handlers.

use secrecy::SecretString;
use serde_json::json;

use rackview_core::DashboardController;

use crate::cli::{GlobalOpts, LoginArgs, OutputFormat};
use crate::commands::util;
use crate::error::CliError;
use crate::output;

pub async fn login(
    args: LoginArgs,
    controller: &mut DashboardController,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let username = match args.username {
        Some(u) => u,
        None => util::prompt_input("Username")?,
    };
    let password = SecretString::from(
        rpassword::prompt_password("Password: ").map_err(CliError::Io)?,
    );

    controller.login(&username, &password).await?;

    // login() only returns Ok with a session in place
    let Some(session) = controller.session() else {
        return Ok(());
    };
    output::print_output(
        &format!(
            "Signed in as {} ({}). {} server(s) in inventory.",
            session.username,
            session.role,
            controller.servers().len()
        ),
        global.quiet,
    );
    Ok(())
}

pub fn logout(controller: &mut DashboardController, global: &GlobalOpts) -> Result<(), CliError> {
    controller.logout()?;
    output::print_output("Signed out.", global.quiet);
    Ok(())
}

pub fn whoami(controller: &DashboardController, global: &GlobalOpts) -> Result<(), CliError> {
    let session = controller.session().ok_or(CliError::NotSignedIn)?;
    let rendered = match global.output {
        OutputFormat::Json => output::render_json(&json!({
            "username": session.username,
            "role": session.role,
        })),
        OutputFormat::Table | OutputFormat::Plain => {
            format!("{} ({})", session.username, session.role)
        }
    };
    output::print_output(&rendered, global.quiet);
    Ok(())
}
