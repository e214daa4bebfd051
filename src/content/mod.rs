//! Content module - the site document, its defaults, parsing and lookups

pub mod defaults;
pub mod fields;
pub mod query;
mod schema;
mod validate;

pub use defaults::default_content;
pub use schema::{
    About, BlogPost, CaseStudy, Contact, Education, Embed, EmbedKind, Experience, Hero, HeroStat,
    Project, Resume, Seo, SiteContent, SiteSettings, Skill, Social, Testimonial,
};
pub use validate::{
    document_from_value, is_structurally_valid, parse_document, to_pretty_json, ContentError,
};
