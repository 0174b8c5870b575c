//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use abpgen_core::domain::ViewFileSpec;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "abpgen",
    bin_name = "abpgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Add a business area to an ABP solution",
    long_about = "abpgen adds an application service, its interface and the \
                  matching Razor view + script pairs to an existing ABP \
                  solution, creating the folders they live in.",
    after_help = "EXAMPLES:\n\
        \x20 abpgen business Order --service-folder Sales\\\\Orders --view-folder App\\\\Main\\\\views\\\\order\n\
        \x20 abpgen business Order --service-folder Sales/Orders --view-folder App/Main/views/order --view index --view createModal:popup\n\
        \x20 abpgen check --solution ./Acme\n\
        \x20 abpgen completions bash > /usr/share/bash-completion/completions/abpgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate service, interface and views for a business area.
    #[command(
        visible_alias = "b",
        about = "Add a new business area",
        after_help = "EXAMPLES:\n\
            \x20 abpgen business Order --service-folder Orders --view-folder App/Main/views/order\n\
            \x20 abpgen business Order --service-folder Sales/Orders --view-folder App/Main/views/order \\\n\
            \x20     --service OrderAppService --view index --view createModal:popup --yes"
    )]
    Business(BusinessArgs),

    /// Show what abpgen detects in a solution.
    #[command(
        about = "Inspect the solution",
        after_help = "EXAMPLES:\n\
            \x20 abpgen check\n\
            \x20 abpgen check --solution ../Acme --output-format json"
    )]
    Check(CheckArgs),

    /// Initialise an abpgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 abpgen init           # ./abpgen.toml\n\
            \x20 abpgen init --global  # user configuration directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 abpgen completions bash > ~/.local/share/bash-completion/completions/abpgen\n\
            \x20 abpgen completions zsh  > ~/.zfunc/_abpgen\n\
            \x20 abpgen completions fish > ~/.config/fish/completions/abpgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the abpgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 abpgen config path\n\
            \x20 abpgen config show"
    )]
    Config(ConfigCommands),
}

// ── business ──────────────────────────────────────────────────────────────────

/// Arguments for `abpgen business`.
#[derive(Debug, Args)]
pub struct BusinessArgs {
    /// Business (entity) name, e.g. `Order`.
    #[arg(value_name = "BUSINESS", help = "Business name, e.g. Order")]
    pub business: String,

    /// Service folder inside the application project.
    #[arg(
        short = 's',
        long = "service-folder",
        value_name = "PATH",
        help = "Service folder under the Application project (\\ or / separated)"
    )]
    pub service_folder: String,

    /// View folder inside the web project.
    #[arg(
        short = 'w',
        long = "view-folder",
        value_name = "PATH",
        help = "View folder under the Web project (\\ or / separated)"
    )]
    pub view_folder: String,

    /// Service class name; defaults to `{BUSINESS}AppService`.
    #[arg(long = "service", value_name = "NAME", help = "Service class name")]
    pub service: Option<String>,

    /// Service interface name; defaults to `I{SERVICE}`.
    #[arg(long = "interface", value_name = "NAME", help = "Service interface name")]
    pub interface: Option<String>,

    /// A view to generate; repeatable. Append `:popup` for a modal view.
    #[arg(
        long = "view",
        value_name = "NAME[:popup]",
        value_parser = parse_view_spec,
        help = "View to generate (repeatable); NAME:popup for a modal"
    )]
    pub views: Vec<ViewFileSpec>,

    /// Solution directory; defaults to the configured one, then the CWD.
    #[arg(long = "solution", value_name = "DIR", help = "Solution directory")]
    pub solution: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and generate immediately"
    )]
    pub yes: bool,
}

/// Parse `NAME` or `NAME:popup`.
pub fn parse_view_spec(raw: &str) -> Result<ViewFileSpec, String> {
    match raw.split_once(':') {
        None => Ok(ViewFileSpec::page(raw)),
        Some((name, kind)) if kind.eq_ignore_ascii_case("popup") => Ok(ViewFileSpec::popup(name)),
        Some((_, kind)) => Err(format!(
            "unknown view kind '{kind}' (expected NAME or NAME:popup)"
        )),
    }
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `abpgen check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Solution directory; defaults to the configured one, then the CWD.
    #[arg(long = "solution", value_name = "DIR", help = "Solution directory")]
    pub solution: Option<PathBuf>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `abpgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the user configuration directory instead of `./abpgen.toml`.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `abpgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `abpgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the path of the configuration file in effect.
    Path,
    /// Print the effective configuration (defaults, file and environment merged).
    Show,
}

// ── tests ─────────────────────────────────────────────────────────────────────
