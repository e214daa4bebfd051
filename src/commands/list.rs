//! List site content

use anyhow::Result;

use crate::content::query::ALL_CATEGORIES;
use crate::content::SiteContent;
use crate::Folio;

/// Filters for `list projects`
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub category: Option<String>,
    pub search: Option<String>,
    /// Include unpublished posts
    pub all: bool,
}

/// List site content by type
pub async fn run(folio: &Folio, content_type: &str, options: &ListOptions) -> Result<()> {
    let state = folio.load_state().await;
    for line in render(state.resolved(), content_type, options)? {
        println!("{}", line);
    }
    Ok(())
}

/// Output lines for one listing
pub fn render(content: &SiteContent, content_type: &str, options: &ListOptions) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    match content_type {
        "project" | "projects" => {
            let category = options.category.as_deref().unwrap_or(ALL_CATEGORIES);
            let search = options.search.as_deref().unwrap_or_default();
            let projects = content.filter_projects(category, search);
            lines.push(format!("Projects ({}):", projects.len()));
            for project in projects {
                let mut flags = Vec::new();
                if project.featured {
                    flags.push("featured");
                }
                if project.is_gen_ai == Some(true) {
                    flags.push("genai");
                }
                if project.embed.as_ref().is_some_and(|e| e.is_live()) {
                    flags.push("embed");
                }
                let flags = if flags.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", flags.join(", "))
                };
                lines.push(format!(
                    "  {} - {} [{}, {}]{}",
                    project.id, project.title, project.category, project.year, flags
                ));
            }
        }
        "post" | "posts" => {
            let posts: Vec<_> = if options.all {
                content.blog.iter().collect()
            } else {
                content.published_posts()
            };
            lines.push(format!("Posts ({}):", posts.len()));
            for post in posts {
                let draft = if post.published { "" } else { " (draft)" };
                lines.push(format!("  {} - {} [{}]{}", post.date, post.title, post.id, draft));
            }
        }
        "category" | "categories" => {
            let categories = content.project_categories();
            lines.push(format!("Categories ({}):", categories.len() - 1));
            for category in categories.into_iter().skip(1) {
                let count = content
                    .projects
                    .iter()
                    .filter(|p| p.category == category)
                    .count();
                lines.push(format!("  {} ({})", category, count));
            }
        }
        "tag" | "tags" => {
            let tags = content.tag_counts();
            lines.push(format!("Tags ({}):", tags.len()));
            for (tag, count) in tags {
                lines.push(format!("  {} ({})", tag, count));
            }
        }
        "skill" | "skills" => {
            lines.push(format!("Skills ({}):", content.about.skills.len()));
            for skill in &content.about.skills {
                lines.push(format!("  {} - {} ({})", skill.name, skill.category, skill.level));
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown content type: {}. Use projects, posts, categories, tags or skills.",
                content_type
            );
        }
    }
    Ok(lines)
}
