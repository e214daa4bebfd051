//! Create a new project or blog post

use anyhow::Result;

use crate::content::{BlogPost, Project, SiteContent};
use crate::draft::sections;
use crate::Folio;

/// Append a blank project or post titled `title` and commit it
pub async fn run(folio: &Folio, kind: &str, title: &str) -> Result<()> {
    let now = chrono::Local::now();
    let mut created = String::new();

    super::edit_and_commit(folio, |state| {
        let draft = state.draft_mut();
        match kind {
            "project" => {
                let id = unique_id(draft.draft(), title, "project");
                let mut project = Project::blank(&id, now.format("%Y").to_string());
                project.title = title.to_string();
                draft.list_insert(&sections::Projects, project, None)?;
                created = format!("project {}", id);
            }
            "post" => {
                let id = unique_id(draft.draft(), title, "blog");
                let mut post = BlogPost::blank(&id, now.format("%Y-%m-%d").to_string());
                post.title = title.to_string();
                draft.list_insert(&sections::Blog, post, None)?;
                created = format!("post {}", id);
            }
            _ => anyhow::bail!("Unknown content type: {}. Use project or post.", kind),
        }
        Ok(())
    })
    .await?;

    println!("Created {}", created);
    Ok(())
}

/// Slug of `title`, suffixed until no project or post uses it
pub fn unique_id(content: &SiteContent, title: &str, fallback: &str) -> String {
    let base = match slug::slugify(title) {
        slug if slug.is_empty() => fallback.to_string(),
        slug => slug,
    };
    let taken = |id: &str| content.project(id).is_some() || content.post(id).is_some();

    if !taken(base.as_str()) {
        return base;
    }
    let mut n = 2;
    loop {
        let id = format!("{}-{}", base, n);
        if !taken(id.as_str()) {
            return id;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init::init_site;
    use crate::content::default_content;
    use tempfile::TempDir;

    #[test]
    fn test_unique_id() {
        let content = default_content();
        assert_eq!(unique_id(&content, "My New Project", "project"), "my-new-project");
        assert_eq!(unique_id(&content, "Genai", "project"), "genai-2");
        assert_eq!(unique_id(&content, "!!!", "blog"), "blog");
    }

    #[tokio::test]
    async fn test_new_project_is_committed() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        run(&folio, "project", "Cash Flow Forecast").await.unwrap();

        let saved = folio.gateway().load().unwrap();
        let project = saved.projects.last().unwrap();
        assert_eq!(project.id, "cash-flow-forecast");
        assert_eq!(project.title, "Cash Flow Forecast");
        assert!(!project.featured);
        assert!(project.embed.is_none());
    }

    #[tokio::test]
    async fn test_new_unknown_kind() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert!(run(&folio, "page", "About").await.is_err());
        assert!(folio.gateway().load().is_none());
    }
}
