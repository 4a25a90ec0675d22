use std::path::PathBuf;

use clap::{Parser, Subcommand};

use uiforge::AssetKind;

/// uiforge - UI Toolkit scaffolding tool
#[derive(Parser, Debug)]
#[command(name = "uiforge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true)]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a single asset from a template variant
    New {
        /// Kind of asset to create
        #[arg(value_enum)]
        kind: AssetKind,

        /// Logical asset name
        name: String,

        /// Template variant (unknown tags use the kind's base skeleton)
        #[arg(short, long, default_value = "default")]
        variant: String,

        /// File holding the body for the custom variant
        #[arg(long)]
        body: Option<PathBuf>,
    },

    /// Scaffold a coordinated markup + stylesheet + script component
    Component {
        /// Logical component name
        name: String,

        /// Template variant shared by all three files
        #[arg(short, long, default_value = "default")]
        variant: String,
    },

    /// Replace the content of an existing markup document in place
    Update {
        /// Logical asset name
        name: String,

        /// File holding the replacement body
        #[arg(long)]
        body: PathBuf,
    },

    /// Print the content of a markup document
    Show {
        /// Logical asset name
        name: String,
    },

    /// List every markup document under the assets directory
    List,
}
