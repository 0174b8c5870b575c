//! `abpgen check`: show what discovery finds in a solution.

use serde_json::json;
use tracing::instrument;

use abpgen_adapters::SolutionScanner;
use abpgen_core::{
    application::ports::{DependencyInspector, Project, ProjectDiscovery},
    domain::VersionAwarePathRule,
};

use crate::{
    cli::CheckArgs,
    commands::{packages_inspector, scan_solution, solution_dir},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// What `check` reports.
#[derive(Debug)]
struct Findings {
    application: Option<Project>,
    web: Option<Project>,
    solution_name: String,
    packages: Vec<String>,
    legacy: bool,
}

impl Findings {
    fn collect(scanner: &SolutionScanner) -> CliResult<Self> {
        let application = scanner.find_application_project();
        let web = scanner.find_web_project();
        let packages = match &web {
            Some(web) => packages_inspector(scanner).installed_package_names(web)?,
            None => Vec::new(),
        };
        let legacy = VersionAwarePathRule::legacy_detected(&packages);

        Ok(Self {
            application,
            web,
            solution_name: scanner.solution_name(),
            packages,
            legacy,
        })
    }

    fn is_ready(&self) -> bool {
        self.application.is_some() && self.web.is_some()
    }
}

#[instrument(skip_all)]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let dir = solution_dir(args.solution.as_ref(), &config)?;
    let scanner = scan_solution(&dir, &config)?;
    let findings = Findings::collect(&scanner)?;

    if output.is_json() {
        output.json(&json!({
            "root": scanner.root(),
            "solution_file": scanner.solution_file(),
            "solution_name": findings.solution_name,
            "application_project": findings.application.as_ref().map(project_json),
            "web_project": findings.web.as_ref().map(project_json),
            "packages": findings.packages.len(),
            "legacy_views_casing": findings.legacy,
            "ready": findings.is_ready(),
        }))?;
    } else {
        print_findings(&scanner, &findings, &output)?;
    }

    if findings.is_ready() {
        Ok(())
    } else {
        Err(CliError::PreconditionFailed)
    }
}

fn project_json(project: &Project) -> serde_json::Value {
    json!({
        "name": project.name,
        "dir": project.root.location(),
    })
}

fn print_findings(
    scanner: &SolutionScanner,
    findings: &Findings,
    output: &OutputManager,
) -> CliResult<()> {
    output.header(&format!("Solution at {}", scanner.root().display()))?;

    let solution = if findings.solution_name.is_empty() {
        "(unknown)".to_string()
    } else {
        findings.solution_name.clone()
    };
    output.print(&format!("  Name:        {solution}"))?;

    for (label, project) in [
        ("Application", &findings.application),
        ("Web", &findings.web),
    ] {
        match project {
            Some(p) => output.success(&format!(
                "{label} project: {} ({})",
                p.name,
                p.root.location().display()
            ))?,
            None => output.error(&format!("{label} project not found"))?,
        }
    }

    output.print(&format!("  Packages:    {}", findings.packages.len()))?;
    if findings.legacy {
        output.info("Legacy Abp package found: views are written to 'Views'")?;
    }
    Ok(())
}
