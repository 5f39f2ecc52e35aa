//! Command implementations.

mod analytics;
mod create;
mod list;
mod stats;
mod validate;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use prompt_analytics::PromptCorpus;
use prompt_config::LabConfig;
use prompt_validator::PromptValidator;
use tracing::debug;

use crate::cli::Command;

/// Resolved project context shared by every command.
pub struct Lab {
    config: LabConfig,
}

impl Lab {
    /// Loads configuration for `root`, applying the command-line overrides.
    pub fn from_args(
        root: &Path,
        config_file: Option<&Path>,
        schema: Option<PathBuf>,
    ) -> anyhow::Result<Self> {
        let config = match config_file {
            Some(path) => LabConfig::from_file(root, path),
            None => LabConfig::discover(root),
        }
        .context("failed to load configuration")?;
        let config = match schema {
            Some(schema) => config.with_schema(schema),
            None => config,
        };
        debug!(prompts = %config.prompts_path().display(), "resolved project");
        Ok(Self { config })
    }

    #[cfg(test)]
    pub fn new(config: LabConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    pub fn prompts_dir(&self) -> PathBuf {
        self.config.prompts_path()
    }

    /// Builds a validator from the configured schema, or the bundled one.
    pub fn validator(&self) -> anyhow::Result<PromptValidator> {
        match self.config.schema_path() {
            Some(path) => PromptValidator::from_schema_file(&path)
                .with_context(|| format!("failed to load schema {}", path.display())),
            None => PromptValidator::with_builtin_schema().context("failed to load bundled schema"),
        }
    }

    pub fn corpus(&self) -> PromptCorpus {
        PromptCorpus::load(self.prompts_dir())
    }

    /// Renders `path` relative to the project root when possible.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(self.root())
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

/// Runs `command` against `lab`, writing human-readable output to stdout.
pub fn dispatch(lab: &Lab, command: Command) -> anyhow::Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Create => {
            let stdin = io::stdin();
            create::run(lab, &mut stdin.lock(), &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate { path } => validate::run(lab, path.as_deref(), &mut out),
        Command::List { category } => {
            list::run(lab, category.as_deref(), &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Stats => {
            stats::run(lab, &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Analytics(command) => {
            analytics::run(lab, command, &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
