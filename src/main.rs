//! uiforge CLI - UI Toolkit scaffolding tool
//!
//! The binary is mechanical glue: it resolves the project root, loads the
//! optional project config, constructs the scaffolding service and prints
//! its reports. All scaffolding logic lives in the library.

mod cli;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use uiforge::{ForgeConfig, ForgeError, ProjectContext, UiScaffold};

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let project = resolve_project(cli.project)?;
    let scaffold = UiScaffold::new(project);

    let report = match cli.command {
        Commands::New {
            kind,
            name,
            variant,
            body,
        } => {
            let custom = body.map(|path| read_body(&path)).transpose()?;
            scaffold.create(kind, &name, &variant, custom.as_deref())?
        }
        Commands::Component { name, variant } => scaffold.create_component(&name, &variant)?,
        Commands::Update { name, body } => {
            let content = read_body(&body)?;
            scaffold.update(&name, &content)?
        }
        Commands::Show { name } => scaffold.read(&name)?,
        Commands::List => scaffold.list_all(),
    };

    println!("{report}");
    Ok(())
}

fn read_body(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read body file {}", path.display()))
}

fn resolve_project(flag: Option<PathBuf>) -> Result<ProjectContext> {
    let root = match flag {
        Some(path) => {
            if !path.is_dir() {
                return Err(ForgeError::ProjectNotSet.into());
            }
            path
        }
        None => env::current_dir().map_err(|_| ForgeError::ProjectNotSet)?,
    };
    let config = ForgeConfig::load(&root)?;
    Ok(ProjectContext::with_config(root, &config))
}
