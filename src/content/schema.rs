//! Site document model

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The whole editable site: one document, independently editable sections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteContent {
    pub site_settings: SiteSettings,
    pub seo: Seo,
    pub hero: Hero,
    pub about: About,
    pub projects: Vec<Project>,
    pub blog: Vec<BlogPost>,
    pub testimonials: Vec<Testimonial>,
    pub contact: Contact,
    pub resume: Resume,
}

/// Site identity shown in the navbar and footer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub name: String,
    pub domain: String,
    pub tagline: String,
}

/// Search-engine metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Seo {
    pub meta_title: String,
    pub meta_description: String,
    /// Comma-separated keyword list, stored verbatim
    pub keywords: String,
}

/// Landing section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hero {
    pub greeting: String,
    pub name: String,
    /// Rotating role titles, in display order
    pub roles: Vec<String>,
    pub description: String,
    pub cta_primary: String,
    pub cta_secondary: String,
    pub stats: Vec<HeroStat>,
}

/// A single label/value badge under the hero text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroStat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub bio: String,
    /// "What I'm doing now" paragraph
    pub now: String,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub period: String,
    pub gpa: String,
    pub details: String,
    pub highlight: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub bullets: Vec<String>,
}

impl Experience {
    /// A fresh entry as the editor adds it: empty fields and one empty bullet
    pub fn blank() -> Self {
        Self {
            bullets: vec![String::new()],
            ..Default::default()
        }
    }
}

/// A skill bar. `level` is meant to be 0-100 but is stored unclamped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub category: String,
    pub level: i64,
}

/// A portfolio project, addressed publicly by `id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    /// URL slug, used as the route key
    pub id: String,
    pub title: String,
    pub category: String,
    pub year: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub tools: Vec<String>,
    pub metrics: Vec<String>,
    pub featured: bool,
    #[serde(rename = "isGenAI", skip_serializing_if = "Option::is_none")]
    pub is_gen_ai: Option<bool>,
    pub case_study: CaseStudy,
    /// Label to URL, in insertion order
    pub links: IndexMap<String, String>,
    pub embed: Option<Embed>,
}

impl Project {
    /// A new, empty project with the given id and year
    pub fn blank(id: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            year: year.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseStudy {
    pub problem: String,
    pub approach: String,
    pub data: String,
    pub methods: String,
    pub results: String,
    pub learnings: String,
}

/// An embedded dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Embed {
    #[serde(rename = "type")]
    pub kind: EmbedKind,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub fallback_text: String,
}

impl Embed {
    /// Whether there is a URL to embed; otherwise the fallback text is shown
    pub fn is_live(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedKind {
    #[serde(rename = "powerbi")]
    PowerBi,
    Tableau,
}

/// A blog post, addressed publicly by `id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    pub excerpt: String,
    pub content: String,
    pub published: bool,
    pub tags: Vec<String>,
}

impl BlogPost {
    /// A new unpublished draft post
    pub fn blank(id: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub quote: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub form_message: String,
    pub social: Social,
}

const LINKEDIN: &str = "linkedin";
const GITHUB: &str = "github";

/// Social profile links keyed by provider. LinkedIn and GitHub are always
/// present and listed first; other providers follow in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "IndexMap<String, String>", into = "IndexMap<String, String>")]
pub struct Social {
    providers: IndexMap<String, String>,
}

impl Default for Social {
    fn default() -> Self {
        Self::new("", "")
    }
}

impl From<IndexMap<String, String>> for Social {
    fn from(mut map: IndexMap<String, String>) -> Self {
        let mut social = Self::new(
            map.shift_remove(LINKEDIN).unwrap_or_default(),
            map.shift_remove(GITHUB).unwrap_or_default(),
        );
        social.providers.extend(map);
        social
    }
}

impl From<Social> for IndexMap<String, String> {
    fn from(social: Social) -> Self {
        social.providers
    }
}

impl Social {
    pub fn new(linkedin: impl Into<String>, github: impl Into<String>) -> Self {
        let mut providers = IndexMap::new();
        providers.insert(LINKEDIN.to_string(), linkedin.into());
        providers.insert(GITHUB.to_string(), github.into());
        Self { providers }
    }

    pub fn linkedin(&self) -> &str {
        self.get(LINKEDIN).unwrap_or_default()
    }

    pub fn github(&self) -> &str {
        self.get(GITHUB).unwrap_or_default()
    }

    pub fn get(&self, provider: &str) -> Option<&str> {
        self.providers.get(provider).map(String::as_str)
    }

    /// Set a provider's URL, adding the provider if it is new
    pub fn set(&mut self, provider: impl Into<String>, url: impl Into<String>) {
        self.providers.insert(provider.into(), url.into());
    }

    /// Remove an extra provider. LinkedIn and GitHub are cleared instead.
    pub fn remove(&mut self, provider: &str) {
        if provider == LINKEDIN || provider == GITHUB {
            self.set(provider, "");
        } else {
            self.providers.shift_remove(provider);
        }
    }

    /// All providers in display order
    pub fn entries(&self) -> Vec<(&str, &str)> {
        self.providers
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resume {
    pub button_label: String,
    pub file_path: String,
}
