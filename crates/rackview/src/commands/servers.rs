//! `servers list|add|delete` handlers.

use rackview_core::{Confirmation, DashboardController, DashboardView, ServerDraft};

use crate::cli::{GlobalOpts, OutputFormat, ServerAddArgs, ServersArgs, ServersCommand};
use crate::commands::util;
use crate::error::CliError;
use crate::output;

pub async fn handle(
    args: ServersArgs,
    controller: &mut DashboardController,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ServersCommand::List => list(controller, global).await,
        ServersCommand::Add(add) => add_server(add, controller, global).await,
        ServersCommand::Delete { id } => delete(id, controller, global).await,
    }
}

async fn list(
    controller: &mut DashboardController,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    controller.refresh_servers().await?;

    let rendered = match global.output {
        OutputFormat::Json => output::render_json(controller.servers()),
        OutputFormat::Table => {
            let view = DashboardView::build(
                controller.permissions(),
                controller.servers(),
                controller.logs(),
            );
            output::servers_table(&view.servers, output::should_color(global.color))
        }
        OutputFormat::Plain => controller
            .servers()
            .iter()
            .map(|s| format!("{}\t{}", s.id, s.hostname))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    output::print_output(&rendered, global.quiet);
    Ok(())
}

async fn add_server(
    args: ServerAddArgs,
    controller: &mut DashboardController,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let draft = ServerDraft {
        hostname: args.hostname,
        os_type: args.os_type,
        os_version: args.os_version,
        server_type: args.server_type,
        private_ip: args.private_ip,
        public_ip: args.public_ip,
        primary_owner: args.primary_owner,
        secondary_owner: args.secondary_owner,
        datacenter: args.datacenter,
        environment: args.environment,
    };
    let id = controller.create_server(draft).await?;
    output::print_output(&format!("Server created (id {id})."), global.quiet);
    Ok(())
}

/// Prompt text for deleting a server, naming the hostname when the
/// snapshot knows it.
fn delete_prompt(id: i64, hostname: Option<&str>) -> String {
    match hostname {
        Some(h) => format!("Delete server {id} ({h})?"),
        None => format!("Delete server {id}?"),
    }
}

async fn delete(
    id: i64,
    controller: &mut DashboardController,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    controller.refresh_servers().await?;
    let hostname = controller
        .servers()
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.hostname.clone());

    let confirmation = util::confirm(&delete_prompt(id, hostname.as_deref()), global.yes)?;
    controller.delete_server(id, confirmation).await?;

    match confirmation {
        Confirmation::Declined => output::print_output("Aborted.", global.quiet),
        Confirmation::Confirmed => {
            output::print_output(&format!("Server {id} deleted."), global.quiet);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_prompt_names_the_hostname_when_known() {
        assert_eq!(delete_prompt(42, Some("db-01")), "Delete server 42 (db-01)?");
        assert_eq!(delete_prompt(7, None), "Delete server 7?");
    }
}
