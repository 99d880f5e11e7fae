//! Command handlers.

pub mod logs;
pub mod servers;
pub mod session;
pub mod util;

use rackview_core::DashboardController;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Command,
    controller: &mut DashboardController,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match command {
        Command::Login(args) => session::login(args, controller, global).await,
        Command::Logout => session::logout(controller, global),
        Command::Whoami => session::whoami(controller, global),
        Command::Servers(args) => servers::handle(args, controller, global).await,
        Command::Logs => logs::handle(controller, global).await,
    }
}
