//! Implementation of the `abpgen business` command.
//!
//! Turns the arguments into a `ScaffoldRequest`, wires the adapters for the
//! solution on disk and prints what the run produced.

use std::io::IsTerminal;

use serde_json::json;
use tracing::{debug, info, instrument};

use abpgen_adapters::{JinjaRenderer, LocalProjectTree, SolutionScanner, TracingReporter};
use abpgen_core::{
    application::{
        Materialization, ScaffoldReport, ScaffoldService,
        ports::{ProgressReporter, UserNotifier},
    },
    domain::{ScaffoldRequest, ViewFileSpec},
    error::AbpgenResult,
};

use crate::{
    cli::BusinessArgs,
    commands::{packages_inspector, scan_solution, solution_dir},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    progress::{ConsoleNotifier, TerminalProgress},
};

/// Execute the `abpgen business` command.
///
/// 1. Build and validate the request (defaults filled in)
/// 2. Scan the solution directory
/// 3. Confirm with the user unless `--yes`, `--quiet` or JSON output
/// 4. Check preconditions, then scaffold
/// 5. Print the created and skipped files
#[instrument(skip_all, fields(business = %args.business))]
pub fn execute(
    args: BusinessArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let request = build_request(&args)?;

    let dir = solution_dir(args.solution.as_ref(), &config)?;
    let scanner = scan_solution(&dir, &config)?;

    if !(args.yes || output.is_quiet() || output.is_json()) {
        show_plan(&request, &scanner, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    let renderer = build_renderer(&config)?;
    let inspector = packages_inspector(&scanner);

    let show_progress = config.output.progress
        && !output.is_quiet()
        && !output.is_json()
        && std::io::stderr().is_terminal();
    let progress: Box<dyn ProgressReporter> = if show_progress {
        Box::new(TerminalProgress::new(true))
    } else {
        Box::new(TracingReporter)
    };
    // Failures shown by the console notifier are not printed a second time.
    let notifies_user = !(output.is_json() || output.is_quiet());
    let notifier: Box<dyn UserNotifier> = if !output.is_json() {
        Box::new(ConsoleNotifier::new(output.clone()))
    } else {
        Box::new(TracingReporter)
    };

    let service = ScaffoldService::new(
        Box::new(scanner),
        Box::new(LocalProjectTree::new()),
        Box::new(renderer),
        Box::new(inspector),
        progress,
        notifier,
    );

    if !service.can_execute(&request) {
        return Err(CliError::PreconditionFailed);
    }

    info!(business = %request.business_name(), "scaffold started");
    let report = service.execute(&request).map_err(|e| {
        if notifies_user {
            CliError::Reported(e)
        } else {
            CliError::Core(e)
        }
    })?;

    print_report(&report, &output)
}

// ── Request construction ──────────────────────────────────────────────────────

fn build_request(args: &BusinessArgs) -> CliResult<ScaffoldRequest> {
    let service = args
        .service
        .clone()
        .unwrap_or_else(|| default_service_name(&args.business));
    let interface = args
        .interface
        .clone()
        .unwrap_or_else(|| default_interface_name(&service));
    let views = if args.views.is_empty() {
        vec![ViewFileSpec::page(&args.business)]
    } else {
        args.views.clone()
    };

    debug!(%service, %interface, views = views.len(), "request defaults applied");

    let request = ScaffoldRequest::builder()
        .business_name(&args.business)
        .service_name(service)
        .service_interface_name(interface)
        .service_folder(&args.service_folder)
        .view_folder(&args.view_folder)
        .view_files(views)
        .build()
        .map_err(|e| CliError::Core(e.into()))?;
    Ok(request)
}

fn default_service_name(business: &str) -> String {
    format!("{business}AppService")
}

fn default_interface_name(service: &str) -> String {
    format!("I{service}")
}

fn build_renderer(config: &AppConfig) -> AbpgenResult<JinjaRenderer> {
    let renderer = match &config.templates.dir {
        Some(dir) => JinjaRenderer::with_override_dir(dir)?,
        None => JinjaRenderer::new()?,
    };
    if !renderer.overridden().is_empty() {
        info!(templates = ?renderer.overridden(), "using template overrides");
    }
    Ok(renderer)
}

// ── Interaction ───────────────────────────────────────────────────────────────

fn show_plan(
    request: &ScaffoldRequest,
    scanner: &SolutionScanner,
    output: &OutputManager,
) -> CliResult<()> {
    output.header(&format!(
        "Adding business '{}' to {}",
        request.business_name(),
        scanner.root().display()
    ))?;
    output.print(&format!(
        "  Service:   {}\\{}.cs",
        request.service_folder(),
        request.service_name()
    ))?;
    output.print(&format!(
        "  Interface: {}\\{}.cs",
        request.service_folder(),
        request.service_interface_name()
    ))?;
    for view in request.view_files() {
        let kind = if view.is_popup { "popup" } else { "page" };
        output.print(&format!(
            "  View:      {}\\{}.cshtml + .js ({kind})",
            request.view_folder(),
            view.file_name
        ))?;
    }
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    if !std::io::stdin().is_terminal() {
        return confirm_line();
    }
    dialoguer::Confirm::new()
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    confirm_line()
}

fn confirm_line() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Report ────────────────────────────────────────────────────────────────────

fn print_report(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(&report_json(report))?;
        return Ok(());
    }

    for file in &report.files {
        let path = file.folder.location().join(&file.file_name);
        let line = format!("{:<8} {}", file.outcome.to_string(), path.display());
        match file.outcome {
            Materialization::Created => output.print(&line)?,
            Materialization::Skipped => output.info(&line)?,
        }
    }

    let created = report.created().count();
    let skipped = report.skipped().count();
    debug!(created, skipped, steps = report.steps, "scaffold finished");
    output.print(&format!(
        "{created} file(s) created, {skipped} already present"
    ))?;
    Ok(())
}

fn report_json(report: &ScaffoldReport) -> serde_json::Value {
    let files: Vec<_> = report
        .files
        .iter()
        .map(|f| {
            json!({
                "path": f.folder.location().join(&f.file_name),
                "template": f.template.template_name(),
                "outcome": f.outcome.to_string(),
            })
        })
        .collect();

    json!({
        "service_folder": report.service_folder.location(),
        "view_folder": report.view_folder.location(),
        "files": files,
        "steps": report.steps,
        "total_steps": report.total_steps,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
