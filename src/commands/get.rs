//! Show a single project or post

use anyhow::Result;

use crate::content::SiteContent;
use crate::Folio;

pub async fn run(folio: &Folio, kind: &str, id: &str) -> Result<()> {
    let state = folio.load_state().await;
    println!("{}", render(state.resolved(), kind, id)?);
    Ok(())
}

/// Pretty JSON of the first project or post with the given id
pub fn render(content: &SiteContent, kind: &str, id: &str) -> Result<String> {
    let text = match kind {
        "project" | "projects" => match content.project(id) {
            Some(project) => serde_json::to_string_pretty(project)?,
            None => anyhow::bail!("No project with id {:?}", id),
        },
        "post" | "posts" => match content.post(id) {
            Some(post) => serde_json::to_string_pretty(post)?,
            None => anyhow::bail!("No post with id {:?}", id),
        },
        _ => anyhow::bail!("Unknown content type: {}. Use project or post.", kind),
    };
    Ok(text)
}
