//! minijinja-backed template renderer.
//!
//! The four built-in templates are compiled into the binary. A template
//! directory may replace any of them by providing a file with the same name
//! (`service.cs.j2`, `service_interface.cs.j2`, `view.cshtml.j2`,
//! `view.js.j2`); files are read once, when the renderer is built.

use std::{fs, path::Path};

use minijinja::{Environment, UndefinedBehavior, Value};
use tracing::{debug, instrument};

use abpgen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{TemplateId, TemplateModel},
    error::AbpgenResult,
};

/// Source text of the embedded template for `id`.
pub const fn builtin_source(id: TemplateId) -> &'static str {
    match id {
        TemplateId::ServiceFile => include_str!("../../templates/service.cs.j2"),
        TemplateId::ServiceInterfaceFile => {
            include_str!("../../templates/service_interface.cs.j2")
        }
        TemplateId::CshtmlView => include_str!("../../templates/view.cshtml.j2"),
        TemplateId::JsView => include_str!("../../templates/view.js.j2"),
    }
}

/// Renders [`TemplateModel`]s with minijinja.
///
/// Undefined variables are errors, so a template referring to a field its
/// model lacks fails instead of rendering an empty string.
#[derive(Debug)]
pub struct JinjaRenderer {
    env: Environment<'static>,
    overridden: Vec<TemplateId>,
}

impl JinjaRenderer {
    /// Renderer using only the embedded templates.
    pub fn new() -> AbpgenResult<Self> {
        Self::build(|_| Ok(None))
    }

    /// Renderer preferring templates found in `dir`.
    #[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
    pub fn with_override_dir(dir: impl AsRef<Path>) -> AbpgenResult<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(ApplicationError::io(dir, "Template directory not found").into());
        }

        Self::build(|id| {
            let path = dir.join(id.template_name());
            if !path.is_file() {
                return Ok(None);
            }
            fs::read_to_string(&path)
                .map(Some)
                .map_err(|e| ApplicationError::io(&path, format!("Failed to read template: {e}")).into())
        })
    }

    /// Templates whose source came from an override directory.
    pub fn overridden(&self) -> &[TemplateId] {
        &self.overridden
    }

    fn build<F>(mut load_override: F) -> AbpgenResult<Self>
    where
        F: FnMut(TemplateId) -> AbpgenResult<Option<String>>,
    {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);

        let mut overridden = Vec::new();
        for id in TemplateId::ALL {
            let result = match load_override(id)? {
                Some(source) => {
                    debug!(template = %id, "using override template");
                    overridden.push(id);
                    env.add_template_owned(id.template_name(), source)
                }
                None => env.add_template(id.template_name(), builtin_source(id)),
            };
            result.map_err(|e| ApplicationError::template(id.template_name(), e.to_string()))?;
        }

        Ok(Self { env, overridden })
    }
}

impl TemplateRenderer for JinjaRenderer {
    fn render(&self, id: TemplateId, model: &TemplateModel) -> AbpgenResult<String> {
        if !model.binds_to(id) {
            return Err(ApplicationError::template(
                id.template_name(),
                format!("a {} model cannot be bound to this template", model.kind()),
            )
            .into());
        }

        let template = self
            .env
            .get_template(id.template_name())
            .map_err(|e| ApplicationError::template(id.template_name(), e.to_string()))?;

        template
            .render(Value::from_serialize(model))
            .map_err(|e| ApplicationError::template(id.template_name(), e.to_string()).into())
    }
}
