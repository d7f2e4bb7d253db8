use clap::{Parser, Subcommand};

/// Browse deployment templates published in remote repositories.
#[derive(Debug, Parser)]
#[clap(version)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub cmd: Command,
    /// Settings file listing the template repositories
    #[clap(short, long, default_value = "templatefetch.toml")]
    pub settings_location: String,
    /// Offline snapshot used when the remote source is unreachable
    #[clap(short, long)]
    pub manifest_location: Option<String>,
    /// Display name of the repository to use, defaults to the first configured one
    #[clap(short, long)]
    pub repository: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    ///Lists the configured template repositories
    Repositories,
    ///Lists the templates of a repository
    Templates,
    ///Lists the files of a template
    Files { template: String },
    ///Prints the content of a file
    Content { path: String },
    ///Prints the shareable raw content URL of a file
    RawUrl { path: String },
    ///Prints the content type of a file name
    Language { file_name: String },
}
