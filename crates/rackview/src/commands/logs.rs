//! `logs` handler.

use rackview_core::{DashboardController, DashboardView};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    controller: &mut DashboardController,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    controller.refresh_logs().await?;

    if !controller.permissions().can_view_logs {
        return Err(CliError::PermissionDenied {
            message: "the audit log requires the admin role".into(),
        });
    }

    let rendered = match global.output {
        OutputFormat::Json => output::render_json(controller.logs()),
        OutputFormat::Table => {
            let view = DashboardView::build(
                controller.permissions(),
                controller.servers(),
                controller.logs(),
            );
            let rows = view.logs.unwrap_or_default();
            output::logs_table(&rows, output::should_color(global.color))
        }
        OutputFormat::Plain => controller
            .logs()
            .iter()
            .map(|e| format!("{}\t{}\t{}", e.timestamp.to_rfc3339(), e.action, e.resource))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    output::print_output(&rendered, global.quiet);
    Ok(())
}
