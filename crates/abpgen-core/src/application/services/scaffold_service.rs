//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates one "add new business" run:
//! 1. Validate the request and locate the application + web projects
//! 2. Resolve the service folder (and its `Dto` child) in the application project
//! 3. Generate the service class and its interface
//! 4. Resolve the view folder in the web project (legacy casing applied)
//! 5. Generate a markup + script pair per requested view
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::fmt;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        error::ProjectRole,
        ports::{
            DependencyInspector, FolderNode, ProgressReporter, Project, ProjectDiscovery,
            ProjectTree, Severity, TemplateRenderer, UserNotifier,
        },
        services::{
            file_materializer::{FileMaterializer, Materialization},
            path_resolver::PathResolver,
        },
    },
    domain::{
        DomainValidator, FolderPath, NamespaceBuilder, ProgressState,
        ScaffoldRequest, ServiceFileModel, ServiceInterfaceFileModel, TemplateId, TemplateModel,
        VersionAwarePathRule, ViewFileModel,
    },
    error::{AbpgenError, AbpgenResult},
};

/// Child folder created under every service folder for data-transfer objects.
pub const DTO_FOLDER: &str = "Dto";

/// Notification sent after a successful run.
pub const DONE_MESSAGE: &str = "Done!";

/// Stages of one run. `Failed` is reachable from every non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldState {
    Validating,
    ResolvingServiceFolders,
    GeneratingServiceFiles,
    ResolvingViewFolder,
    GeneratingViewFiles,
    Done,
    Failed,
}

impl ScaffoldState {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

impl fmt::Display for ScaffoldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Validating => "validating",
            Self::ResolvingServiceFolders => "resolving service folders",
            Self::GeneratingServiceFiles => "generating service files",
            Self::ResolvingViewFolder => "resolving view folder",
            Self::GeneratingViewFiles => "generating view files",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// One file handled by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub folder: FolderNode,
    pub file_name: String,
    pub template: TemplateId,
    pub outcome: Materialization,
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub service_folder: FolderNode,
    pub view_folder: FolderNode,
    pub files: Vec<GeneratedFile>,
    pub steps: u32,
    pub total_steps: u32,
}

impl ScaffoldReport {
    pub fn created(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files
            .iter()
            .filter(|f| f.outcome == Materialization::Created)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files
            .iter()
            .filter(|f| f.outcome == Materialization::Skipped)
    }
}

/// The application and web projects a run operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionProjects {
    pub application: Project,
    pub web: Project,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    discovery: Box<dyn ProjectDiscovery>,
    tree: Box<dyn ProjectTree>,
    renderer: Box<dyn TemplateRenderer>,
    inspector: Box<dyn DependencyInspector>,
    progress: Box<dyn ProgressReporter>,
    notifier: Box<dyn UserNotifier>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        discovery: Box<dyn ProjectDiscovery>,
        tree: Box<dyn ProjectTree>,
        renderer: Box<dyn TemplateRenderer>,
        inspector: Box<dyn DependencyInspector>,
        progress: Box<dyn ProgressReporter>,
        notifier: Box<dyn UserNotifier>,
    ) -> Self {
        Self {
            discovery,
            tree,
            renderer,
            inspector,
            progress,
            notifier,
        }
    }

    /// Whether `execute` may run for `request`.
    ///
    /// Reports the reason to the user when it may not.
    pub fn can_execute(&self, request: &ScaffoldRequest) -> bool {
        let checked = DomainValidator::validate_request(request)
            .map_err(AbpgenError::from)
            .and_then(|()| self.locate_projects());

        match checked {
            Ok(projects) => {
                debug!(
                    application = %projects.application.name,
                    web = %projects.web.name,
                    "preconditions met"
                );
                true
            }
            Err(e) => {
                warn!(error = %e, "preconditions not met");
                self.notifier.notify(&e.to_string(), Severity::Warning);
                false
            }
        }
    }

    /// Locate both collaborating projects.
    pub fn locate_projects(&self) -> AbpgenResult<SolutionProjects> {
        let application = self
            .discovery
            .find_application_project()
            .ok_or(ApplicationError::MissingProject {
                role: ProjectRole::Application,
            })?;
        let web = self
            .discovery
            .find_web_project()
            .ok_or(ApplicationError::MissingProject {
                role: ProjectRole::Web,
            })?;

        Ok(SolutionProjects { application, web })
    }

    /// Scaffold the business area described by `request`.
    ///
    /// Files created before a failure are kept; running again after fixing
    /// the cause skips them. The progress reporter is finished exactly once
    /// on every exit path.
    #[instrument(
        skip_all,
        fields(
            business = %request.business_name(),
            service = %request.service_name(),
            views = request.view_files().len()
        )
    )]
    pub fn execute(&self, request: &ScaffoldRequest) -> AbpgenResult<ScaffoldReport> {
        let _finish = FinishOnDrop(self.progress.as_ref());
        let mut run = Run::new(request);

        match self.run(request, &mut run) {
            Ok(report) => {
                info!(
                    created = report.created().count(),
                    skipped = report.skipped().count(),
                    "Scaffold completed successfully"
                );
                self.notifier.notify(DONE_MESSAGE, Severity::Info);
                Ok(report)
            }
            Err(e) => {
                debug!(state = %run.state, error = %e, "scaffold failed");
                run.enter(ScaffoldState::Failed);
                self.notifier.notify(&failure_message(&e), Severity::Warning);
                Err(e)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn run(&self, request: &ScaffoldRequest, run: &mut Run) -> AbpgenResult<ScaffoldReport> {
        // Validating: nothing below may run without both projects.
        DomainValidator::validate_request(request)?;
        let projects = self.locate_projects()?;
        let app_name = self.discovery.solution_name();
        DomainValidator::validate_app_name(&app_name)?;

        let resolver = PathResolver::new(self.tree.as_ref());

        run.enter(ScaffoldState::ResolvingServiceFolders);
        let service_folder = resolver.resolve(&projects.application.root, request.service_folder())?;
        resolver.resolve_str(&service_folder, DTO_FOLDER)?;

        run.enter(ScaffoldState::GeneratingServiceFiles);
        let namespace = NamespaceBuilder::service_for(&app_name, request.service_folder());
        let service_model = ServiceFileModel {
            app_name: app_name.clone(),
            namespace: namespace.clone(),
            interface_name: request.service_interface_name().to_string(),
            service_name: request.service_name().to_string(),
        };
        self.generate(
            run,
            &service_folder,
            request.service_name(),
            TemplateId::ServiceFile,
            &service_model.into(),
        )?;

        let interface_model = ServiceInterfaceFileModel {
            namespace,
            interface_name: request.service_interface_name().to_string(),
        };
        self.generate(
            run,
            &service_folder,
            request.service_interface_name(),
            TemplateId::ServiceInterfaceFile,
            &interface_model.into(),
        )?;

        run.enter(ScaffoldState::ResolvingViewFolder);
        let installed = self.inspector.installed_package_names(&projects.web)?;
        let view_path = FolderPath::parse(VersionAwarePathRule::adjust(
            request.view_folder().as_str(),
            &installed,
        ))?;
        let view_folder = resolver.resolve(&projects.web.root, &view_path)?;

        run.enter(ScaffoldState::GeneratingViewFiles);
        let view_namespace = NamespaceBuilder::view_for(request.view_folder());
        for spec in request.view_files() {
            let model: TemplateModel = ViewFileModel {
                business_name: request.business_name().to_string(),
                namespace: view_namespace.clone(),
                file_name: spec.file_name.clone(),
                is_popup: spec.is_popup,
                view_folder: request.view_folder().as_str().to_string(),
                view_files: request.view_files().to_vec(),
            }
            .into();

            for id in TemplateId::VIEW_KINDS {
                self.generate(run, &view_folder, &spec.file_name, id, &model)?;
            }
        }

        debug_assert!(run.progress.is_complete(), "steps left unreported");
        run.enter(ScaffoldState::Done);
        Ok(ScaffoldReport {
            service_folder,
            view_folder,
            files: std::mem::take(&mut run.files),
            steps: run.progress.current(),
            total_steps: run.progress.total(),
        })
    }

    /// Report progress for one file, then materialise it.
    fn generate(
        &self,
        run: &mut Run,
        folder: &FolderNode,
        stem: &str,
        template: TemplateId,
        model: &TemplateModel,
    ) -> AbpgenResult<()> {
        let file_name = format!("{stem}{}", template.file_extension());

        let step = run.progress.advance();
        self.progress.report(
            &progress_message(template, &file_name),
            step,
            run.progress.total(),
        );

        let outcome = FileMaterializer::new(self.tree.as_ref())
            .create_with(folder, &file_name, || self.renderer.render(template, model))?;

        run.files.push(GeneratedFile {
            folder: folder.clone(),
            file_name,
            template,
            outcome,
        });
        Ok(())
    }
}

/// Mutable bookkeeping of a single `execute` call.
struct Run {
    state: ScaffoldState,
    progress: ProgressState,
    files: Vec<GeneratedFile>,
}

impl Run {
    fn new(request: &ScaffoldRequest) -> Self {
        Self {
            state: ScaffoldState::Validating,
            progress: ProgressState::for_views(request.view_files().len()),
            files: Vec::new(),
        }
    }

    fn enter(&mut self, next: ScaffoldState) {
        debug_assert!(!self.state.is_terminal(), "run already ended");
        debug!(from = %self.state, to = %next, "state transition");
        self.state = next;
    }
}

/// Calls `finish()` when dropped so every exit path ends the progress display.
struct FinishOnDrop<'a>(&'a dyn ProgressReporter);

impl Drop for FinishOnDrop<'_> {
    fn drop(&mut self) {
        self.0.finish();
    }
}

fn progress_message(template: TemplateId, file_name: &str) -> String {
    let kind = match template {
        TemplateId::ServiceFile => "service",
        TemplateId::ServiceInterfaceFile => "interface",
        TemplateId::CshtmlView | TemplateId::JsView => "view",
    };
    format!("Generating {kind} file: {file_name}")
}

/// Precondition failures are shown as-is; anything later is a generation failure.
fn failure_message(error: &AbpgenError) -> String {
    match error {
        AbpgenError::Application(ApplicationError::MissingProject { .. }) | AbpgenError::Domain(_) => {
            error.to_string()
        }
        _ => format!("Generation failed.\nException: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ports::output::{
        MockDependencyInspector, MockProgressReporter, MockProjectDiscovery, MockProjectTree,
        MockTemplateRenderer, MockUserNotifier,
    };
    use crate::domain::ViewFileSpec;

    fn request(views: &[&str]) -> ScaffoldRequest {
        ScaffoldRequest::builder()
            .business_name("Order")
            .service_name("OrderService")
            .service_interface_name("IOrderService")
            .service_folder(r"Sales\Orders")
            .view_folder(r"App\Main\views")
            .view_files(views.iter().map(|v| ViewFileSpec::page(*v)))
            .build()
            .unwrap()
    }

    fn discovery(app: bool, web: bool) -> MockProjectDiscovery {
        let mut discovery = MockProjectDiscovery::new();
        discovery.expect_find_application_project().returning(move || {
            app.then(|| Project::new("Acme.Application", FolderNode::new("app")))
        });
        discovery
            .expect_find_web_project()
            .returning(move || web.then(|| Project::new("Acme.Web", FolderNode::new("web"))));
        discovery
            .expect_solution_name()
            .returning(|| "Acme".to_string());
        discovery
    }

    /// A tree where nothing exists yet and every write succeeds.
    fn empty_tree() -> MockProjectTree {
        let mut tree = MockProjectTree::new();
        tree.expect_find_folder().returning(|_, _| Ok(None));
        tree.expect_create_folder()
            .returning(|parent, name| Ok(parent.child(name)));
        tree.expect_contains_file().returning(|_, _| Ok(false));
        tree.expect_add_file().returning(|_, _, _| Ok(()));
        tree
    }

    fn untouched_tree() -> MockProjectTree {
        let mut tree = MockProjectTree::new();
        tree.expect_find_folder().never();
        tree.expect_create_folder().never();
        tree.expect_contains_file().never();
        tree.expect_add_file().never();
        tree
    }

    fn renderer() -> MockTemplateRenderer {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .returning(|id, _| Ok(format!("// {id}")));
        renderer
    }

    fn no_packages() -> MockDependencyInspector {
        let mut inspector = MockDependencyInspector::new();
        inspector
            .expect_installed_package_names()
            .returning(|_| Ok(Vec::new()));
        inspector
    }

    fn quiet_progress() -> MockProgressReporter {
        let mut progress = MockProgressReporter::new();
        progress.expect_report().return_const(());
        progress.expect_finish().times(1).return_const(());
        progress
    }

    fn recording_notifier(log: Arc<Mutex<Vec<(String, Severity)>>>) -> MockUserNotifier {
        let mut notifier = MockUserNotifier::new();
        notifier
            .expect_notify()
            .returning(move |msg, severity| log.lock().unwrap().push((msg.to_string(), severity)));
        notifier
    }

    #[test]
    fn can_execute_requires_application_project() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut progress = MockProgressReporter::new();
        progress.expect_finish().never();

        let service = ScaffoldService::new(
            Box::new(discovery(false, true)),
            Box::new(untouched_tree()),
            Box::new(renderer()),
            Box::new(no_packages()),
            Box::new(progress),
            Box::new(recording_notifier(log.clone())),
        );

        assert!(!service.can_execute(&request(&["OrderList"])));
        let log = log.lock().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(
            log[0].0,
            "Cannot find the Application project. Please ensure that you are in the ABP solution."
        );
        assert_eq!(log[0].1, Severity::Warning);
    }

    #[test]
    fn can_execute_requires_web_project() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut progress = MockProgressReporter::new();
        progress.expect_finish().never();

        let service = ScaffoldService::new(
            Box::new(discovery(true, false)),
            Box::new(untouched_tree()),
            Box::new(renderer()),
            Box::new(no_packages()),
            Box::new(progress),
            Box::new(recording_notifier(log.clone())),
        );

        assert!(!service.can_execute(&request(&[])));
        assert!(log.lock().unwrap()[0].0.contains("Web project"));
    }

    #[test]
    fn execute_without_projects_mutates_nothing_and_finishes() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut progress = MockProgressReporter::new();
        progress.expect_report().never();
        progress.expect_finish().times(1).return_const(());

        let service = ScaffoldService::new(
            Box::new(discovery(true, false)),
            Box::new(untouched_tree()),
            Box::new(renderer()),
            Box::new(no_packages()),
            Box::new(progress),
            Box::new(recording_notifier(log.clone())),
        );

        let err = service.execute(&request(&["OrderList"])).unwrap_err();
        assert!(err.is_missing_project());
        assert!(!log.lock().unwrap()[0].0.starts_with("Generation failed"));
    }

    #[test]
    fn step_counter_reaches_total() {
        let steps = Arc::new(Mutex::new(Vec::new()));
        let recorded = steps.clone();
        let mut progress = MockProgressReporter::new();
        progress
            .expect_report()
            .returning(move |msg, step, total| {
                recorded.lock().unwrap().push((msg.to_string(), step, total))
            });
        progress.expect_finish().times(1).return_const(());

        let service = ScaffoldService::new(
            Box::new(discovery(true, true)),
            Box::new(empty_tree()),
            Box::new(renderer()),
            Box::new(no_packages()),
            Box::new(progress),
            Box::new(recording_notifier(Arc::new(Mutex::new(Vec::new())))),
        );

        let report = service
            .execute(&request(&["OrderList", "OrderEdit"]))
            .unwrap();

        assert_eq!(report.total_steps, 6);
        assert_eq!(report.steps, 6);

        let steps = steps.lock().unwrap();
        let numbers: Vec<u32> = steps.iter().map(|(_, step, _)| *step).collect();
        assert_eq!(numbers, [1, 2, 3, 4, 5, 6]);
        assert!(steps.iter().all(|(_, _, total)| *total == 6));
        assert_eq!(steps[0].0, "Generating service file: OrderService.cs");
        assert_eq!(steps[1].0, "Generating interface file: IOrderService.cs");
        assert_eq!(steps[2].0, "Generating view file: OrderList.cshtml");
        assert_eq!(steps[3].0, "Generating view file: OrderList.js");
    }

    #[test]
    fn successful_run_reports_done() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let service = ScaffoldService::new(
            Box::new(discovery(true, true)),
            Box::new(empty_tree()),
            Box::new(renderer()),
            Box::new(no_packages()),
            Box::new(quiet_progress()),
            Box::new(recording_notifier(log.clone())),
        );

        let report = service.execute(&request(&["OrderList"])).unwrap();

        assert_eq!(report.service_folder, FolderNode::new("app/Sales/Orders"));
        assert_eq!(report.view_folder, FolderNode::new("web/App/Main/views"));
        assert_eq!(report.created().count(), 4);
        assert_eq!(
            log.lock().unwrap().as_slice(),
            [(DONE_MESSAGE.to_string(), Severity::Info)]
        );
    }

    #[test]
    fn dto_folder_is_created_under_service_folder() {
        let created = Arc::new(Mutex::new(Vec::new()));
        let recorded = created.clone();
        let mut tree = MockProjectTree::new();
        tree.expect_find_folder().returning(|_, _| Ok(None));
        tree.expect_create_folder().returning(move |parent, name| {
            let child = parent.child(name);
            recorded.lock().unwrap().push(child.clone());
            Ok(child)
        });
        tree.expect_contains_file().returning(|_, _| Ok(false));
        tree.expect_add_file().returning(|_, _, _| Ok(()));

        let service = ScaffoldService::new(
            Box::new(discovery(true, true)),
            Box::new(tree),
            Box::new(renderer()),
            Box::new(no_packages()),
            Box::new(quiet_progress()),
            Box::new(recording_notifier(Arc::new(Mutex::new(Vec::new())))),
        );
        service.execute(&request(&[])).unwrap();

        assert!(
            created
                .lock()
                .unwrap()
                .contains(&FolderNode::new("app/Sales/Orders/Dto"))
        );
    }

    #[test]
    fn skipped_files_still_consume_steps() {
        let mut tree = MockProjectTree::new();
        tree.expect_find_folder()
            .returning(|parent, name| Ok(Some(parent.child(name))));
        tree.expect_create_folder().never();
        tree.expect_contains_file().returning(|_, _| Ok(true));
        tree.expect_add_file().never();

        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().never();

        let service = ScaffoldService::new(
            Box::new(discovery(true, true)),
            Box::new(tree),
            Box::new(renderer),
            Box::new(no_packages()),
            Box::new(quiet_progress()),
            Box::new(recording_notifier(Arc::new(Mutex::new(Vec::new())))),
        );

        let report = service.execute(&request(&["OrderList"])).unwrap();
        assert_eq!(report.steps, 4);
        assert_eq!(report.skipped().count(), 4);
    }

    #[test]
    fn legacy_package_capitalises_view_folder() {
        let mut inspector = MockDependencyInspector::new();
        inspector
            .expect_installed_package_names()
            .returning(|_| Ok(vec!["Abp.1.0.1.5".to_string()]));

        let service = ScaffoldService::new(
            Box::new(discovery(true, true)),
            Box::new(empty_tree()),
            Box::new(renderer()),
            Box::new(inspector),
            Box::new(quiet_progress()),
            Box::new(recording_notifier(Arc::new(Mutex::new(Vec::new())))),
        );

        let report = service.execute(&request(&["OrderList"])).unwrap();
        assert_eq!(report.view_folder, FolderNode::new("web/App/Main/Views"));
    }

    #[test]
    fn render_failure_fails_run_and_still_finishes() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(|id, _| match id {
            TemplateId::JsView => Err(ApplicationError::template(id.template_name(), "boom").into()),
            _ => Ok(String::from("ok")),
        });

        let service = ScaffoldService::new(
            Box::new(discovery(true, true)),
            Box::new(empty_tree()),
            Box::new(renderer),
            Box::new(no_packages()),
            Box::new(quiet_progress()),
            Box::new(recording_notifier(log.clone())),
        );

        let err = service.execute(&request(&["OrderList"])).unwrap_err();
        assert!(matches!(
            err,
            AbpgenError::Application(ApplicationError::TemplateError { .. })
        ));

        let log = log.lock().unwrap();
        assert_eq!(log.len(), 1);
        assert!(log[0].0.starts_with("Generation failed.\nException: "));
        assert!(log[0].0.contains("boom"));
        assert_eq!(log[0].1, Severity::Warning);
    }

    #[test]
    fn progress_messages_name_the_kind() {
        assert_eq!(
            progress_message(TemplateId::ServiceInterfaceFile, "IOrderService.cs"),
            "Generating interface file: IOrderService.cs"
        );
        assert_eq!(
            progress_message(TemplateId::JsView, "OrderList.js"),
            "Generating view file: OrderList.js"
        );
    }
}
