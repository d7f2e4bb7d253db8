use std::{error::Error, path::Path};

use clap::Parser;
use templatefetch::{
    cli::{
        args::{CliArgs, Command},
        command_handlers::{
            do_content, do_files, do_language, do_raw_url, do_repositories, do_templates,
            select_repository,
        },
    },
    config::TemplatefetchConfig,
    model::settings::Settings,
    TemplateCatalog,
};

async fn run() -> Result<(), Box<dyn Error>> {
    let cli_args: CliArgs = CliArgs::parse();

    if let Command::Language { file_name } = &cli_args.cmd {
        return do_language(file_name);
    }

    let settings = Settings::from_file(Path::new(&cli_args.settings_location))?;
    if let Command::Repositories = &cli_args.cmd {
        return do_repositories(&settings);
    }

    let mut builder = TemplateCatalog::builder().config(TemplatefetchConfig::load()?);
    if let Some(manifest_location) = &cli_args.manifest_location {
        builder = builder.bundled_manifest_file(manifest_location);
    }
    let catalog = builder.try_build()?;
    let repository = select_repository(&settings, cli_args.repository.as_deref())?;

    match cli_args.cmd {
        Command::Templates => do_templates(&catalog, repository).await,
        Command::Files { template } => do_files(&catalog, repository, &template).await,
        Command::Content { path } => do_content(&catalog, repository, &path).await,
        Command::RawUrl { path } => do_raw_url(&catalog, repository, &path),
        Command::Repositories | Command::Language { .. } => Ok(()),
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
