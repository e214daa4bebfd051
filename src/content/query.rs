//! Read-side lookups used by the pages and the CLI

use std::collections::HashMap;

use super::schema::{BlogPost, Project, SiteContent};

/// Category label that matches every project
pub const ALL_CATEGORIES: &str = "All";

/// Number of featured projects shown on the home page
pub const HOME_FEATURED_LIMIT: usize = 3;

impl SiteContent {
    /// Find a project by id. On duplicate ids the first match wins.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Find a blog post by id. On duplicate ids the first match wins.
    pub fn post(&self, id: &str) -> Option<&BlogPost> {
        self.blog.iter().find(|p| p.id == id)
    }

    /// Featured projects in document order, at most `limit`
    pub fn featured_projects(&self, limit: usize) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).take(limit).collect()
    }

    /// Published posts in document order
    pub fn published_posts(&self) -> Vec<&BlogPost> {
        self.blog.iter().filter(|p| p.published).collect()
    }

    /// Category filter choices: "All", then each category once, in order of
    /// first appearance
    pub fn project_categories(&self) -> Vec<&str> {
        let mut categories = vec![ALL_CATEGORIES];
        for project in &self.projects {
            if !categories.contains(&project.category.as_str()) {
                categories.push(&project.category);
            }
        }
        categories
    }

    /// Projects matching a category and a free-text search.
    ///
    /// The search is a case-insensitive substring match over title, summary,
    /// tags and tools, taken as typed. An empty search matches everything.
    pub fn filter_projects(&self, category: &str, search: &str) -> Vec<&Project> {
        let query = search.to_lowercase();
        self.projects
            .iter()
            .filter(|p| category == ALL_CATEGORIES || p.category == category)
            .filter(|p| query.is_empty() || project_matches(p, &query))
            .collect()
    }

    /// Tag usage counts across projects and posts, most used first
    pub fn tag_counts(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let tags = self
            .projects
            .iter()
            .flat_map(|p| p.tags.iter())
            .chain(self.blog.iter().flat_map(|p| p.tags.iter()));
        for tag in tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
        let mut counts: Vec<_> = counts
            .into_iter()
            .map(|(tag, count)| (tag.to_string(), count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }

    /// Project ids that appear more than once
    pub fn duplicate_project_ids(&self) -> Vec<&str> {
        duplicates(self.projects.iter().map(|p| p.id.as_str()))
    }

    /// Blog post ids that appear more than once
    pub fn duplicate_post_ids(&self) -> Vec<&str> {
        duplicates(self.blog.iter().map(|p| p.id.as_str()))
    }
}

fn project_matches(project: &Project, query: &str) -> bool {
    project.title.to_lowercase().contains(query)
        || project.summary.to_lowercase().contains(query)
        || project.tags.iter().any(|t| t.to_lowercase().contains(query))
        || project.tools.iter().any(|t| t.to_lowercase().contains(query))
}

fn duplicates<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    let mut repeated = Vec::new();
    for id in ids {
        if seen.contains(&id) {
            if !repeated.contains(&id) {
                repeated.push(id);
            }
        } else {
            seen.push(id);
        }
    }
    repeated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::defaults::default_content;

    #[test]
    fn test_lookup_by_id() {
        let content = default_content();
        assert_eq!(content.project("genai").unwrap().is_gen_ai, Some(true));
        assert_eq!(content.post("b1").unwrap().date, "2025-01-15");
        assert!(content.project("missing").is_none());
    }

    #[test]
    fn test_first_match_wins_on_duplicates() {
        let mut content = default_content();
        let mut copy = content.projects[0].clone();
        copy.title = "Shadow".to_string();
        content.projects.push(copy);

        assert_eq!(
            content.project("pe-model").unwrap().title,
            "Private Equity Transaction & Debt Covenant Model"
        );
        assert_eq!(content.duplicate_project_ids(), vec!["pe-model"]);
        assert!(content.duplicate_post_ids().is_empty());
    }

    #[test]
    fn test_featured_and_published() {
        let mut content = default_content();
        let featured: Vec<_> = content
            .featured_projects(HOME_FEATURED_LIMIT)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(featured, vec!["pe-model", "pbi-dash", "tab-sector"]);

        content.blog[0].published = false;
        assert!(content.published_posts().is_empty());
    }

    #[test]
    fn test_project_categories() {
        let content = default_content();
        assert_eq!(
            content.project_categories(),
            vec!["All", "Excel", "Power BI", "Tableau", "Python", "GenAI Finance"]
        );
    }

    #[test]
    fn test_filter_projects() {
        let content = default_content();
        assert_eq!(content.filter_projects("All", "").len(), 6);
        assert_eq!(content.filter_projects("Tableau", "").len(), 2);

        let ids: Vec<_> = content
            .filter_projects("All", "numpy")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["tab-risk"]);

        assert!(content.filter_projects("Excel", "tableau").is_empty());
        assert!(content.filter_projects("All", " numpy ").is_empty());
    }

    #[test]
    fn test_tag_counts() {
        let mut content = default_content();
        content.blog[0].tags.push("LBO".to_string());
        let counts = content.tag_counts();
        assert_eq!(counts[0], ("LBO".to_string(), 2));
    }
}
