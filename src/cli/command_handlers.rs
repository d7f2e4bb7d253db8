use std::error::Error;

use log::debug;

use crate::{
    model::{
        catalog::{CatalogEntry, EntryKind},
        repository::TemplateRepository,
        settings::Settings,
    },
    TemplateCatalog,
};

/// Handler to repositories command
pub fn do_repositories(settings: &Settings) -> Result<(), Box<dyn Error>> {
    for repository in &settings.repositories {
        match &repository.description {
            Some(description) => println!(
                "{}\t{}@{}\t{}",
                repository.display_name, repository.url, repository.branch, description
            ),
            None => println!(
                "{}\t{}@{}",
                repository.display_name, repository.url, repository.branch
            ),
        }
    }
    Ok(())
}

/// Handler to templates command
pub async fn do_templates(
    catalog: &TemplateCatalog,
    repository: &TemplateRepository,
) -> Result<(), Box<dyn Error>> {
    let templates = catalog.list_templates(repository).await?;
    debug!(
        "Found {} templates in {}",
        templates.len(),
        repository.display_name
    );
    for template in templates {
        println!("{}", template.name);
    }
    Ok(())
}

/// Handler to files command
pub async fn do_files(
    catalog: &TemplateCatalog,
    repository: &TemplateRepository,
    template: &str,
) -> Result<(), Box<dyn Error>> {
    for entry in catalog.list_template_files(repository, template).await? {
        println!("{}", render_entry(&entry));
    }
    Ok(())
}

/// Handler to content command
pub async fn do_content(
    catalog: &TemplateCatalog,
    repository: &TemplateRepository,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    let content = catalog.get_file_content(repository, path).await?;
    print!("{content}");
    Ok(())
}

/// Handler to raw-url command
pub fn do_raw_url(
    catalog: &TemplateCatalog,
    repository: &TemplateRepository,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    println!("{}", catalog.get_raw_url(repository, path)?);
    Ok(())
}

/// Handler to language command
pub fn do_language(file_name: &str) -> Result<(), Box<dyn Error>> {
    println!("{}", TemplateCatalog::language_id(file_name));
    Ok(())
}

/// Repository by display name if given, otherwise the first configured one
pub fn select_repository<'a>(
    settings: &'a Settings,
    display_name: Option<&str>,
) -> Result<&'a TemplateRepository, Box<dyn Error>> {
    match display_name {
        Some(name) => settings
            .find(name)
            .ok_or_else(|| format!("No repository named {name} is configured").into()),
        None => settings
            .repositories
            .first()
            .ok_or_else(|| "No template repository is configured".into()),
    }
}

fn render_entry(entry: &CatalogEntry) -> String {
    let kind = match entry.kind {
        EntryKind::File => "file",
        EntryKind::Dir => "dir",
        EntryKind::Other => "other",
    };
    match entry.size_bytes {
        Some(size) => format!("{kind}\t{}\t{size}", entry.path),
        None => format!("{kind}\t{}", entry.path),
    }
}
