use anyhow::Result;
use notehub_core::{CATEGORIES, NoteHubConfig};

use crate::build_page_service;

pub(crate) async fn run_render(config: &NoteHubConfig, slug: &[String]) -> Result<()> {
    let service = build_page_service(config)?;
    let page = service.render(slug).await?;
    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}

pub(crate) fn run_metadata(config: &NoteHubConfig, slug: &[String]) -> Result<()> {
    let service = build_page_service(config)?;
    println!("{}", serde_json::to_string_pretty(&service.metadata(slug))?);
    Ok(())
}

pub(crate) fn run_categories() -> Result<()> {
    for category in CATEGORIES {
        println!("{category}");
    }
    Ok(())
}
