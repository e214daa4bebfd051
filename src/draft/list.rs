//! Ordered-list editing
//!
//! The primitives here work on any `Vec<T>`. `ListSection` names one list
//! inside the document so the draft store can apply them to typed items.

use crate::content::SiteContent;

use super::DraftError;

/// Insert `item` at `index`, or append when `index` is `None` or past the end
pub fn insert_item<T>(items: &mut Vec<T>, item: T, index: Option<usize>) {
    let index = index.map_or(items.len(), |i| i.min(items.len()));
    items.insert(index, item);
}

/// Remove and return the item at `index`
pub fn remove_item<T>(items: &mut Vec<T>, index: usize, section: &str) -> Result<T, DraftError> {
    check_index(items, index, section)?;
    Ok(items.remove(index))
}

/// Replace the item at `index`, returning the old one
pub fn replace_item<T>(
    items: &mut [T],
    index: usize,
    item: T,
    section: &str,
) -> Result<T, DraftError> {
    check_index(items, index, section)?;
    Ok(std::mem::replace(&mut items[index], item))
}

/// Move the item at `from` so that it ends up at `to`.
///
/// This is a remove followed by an insert, not a swap: moving index 2 to
/// index 1 shifts the previous occupant of index 1 down to index 2. Both
/// indices must be valid positions in the list.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize, section: &str) -> Result<(), DraftError> {
    check_index(items, from, section)?;
    check_index(items, to, section)?;
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    Ok(())
}

fn check_index<T>(items: &[T], index: usize, section: &str) -> Result<(), DraftError> {
    if index < items.len() {
        Ok(())
    } else {
        Err(DraftError::IndexOutOfRange {
            section: section.to_string(),
            index,
            len: items.len(),
        })
    }
}

/// One editable ordered list inside the document
pub trait ListSection {
    type Item: Clone;

    /// Field path of the list, used in error messages
    fn name(&self) -> String;

    fn items<'a>(&self, content: &'a SiteContent) -> Result<&'a Vec<Self::Item>, DraftError>;

    fn items_mut<'a>(
        &self,
        content: &'a mut SiteContent,
    ) -> Result<&'a mut Vec<Self::Item>, DraftError>;
}

/// Handles for every list the editor can change
pub mod sections {
    use super::{check_index, ListSection};
    use crate::content::{self as doc, SiteContent};
    use crate::draft::DraftError;

    macro_rules! list_section {
        ($(#[$doc:meta])* $name:ident, $item:ty, $path:literal, $($field:ident).+) => {
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl ListSection for $name {
                type Item = $item;

                fn name(&self) -> String {
                    $path.to_string()
                }

                fn items<'a>(&self, content: &'a SiteContent) -> Result<&'a Vec<$item>, DraftError> {
                    Ok(&content.$($field).+)
                }

                fn items_mut<'a>(
                    &self,
                    content: &'a mut SiteContent,
                ) -> Result<&'a mut Vec<$item>, DraftError> {
                    Ok(&mut content.$($field).+)
                }
            }
        };
    }

    macro_rules! nested_section {
        ($(#[$doc:meta])* $name:ident { $parent:ident }, $parent_path:literal, $($list:ident).+ => $field:ident, $suffix:literal) => {
            $(#[$doc])*
            #[derive(Debug, Clone, Copy)]
            pub struct $name {
                pub $parent: usize,
            }

            impl ListSection for $name {
                type Item = String;

                fn name(&self) -> String {
                    format!("{}.{}.{}", $parent_path, self.$parent, $suffix)
                }

                fn items<'a>(&self, content: &'a SiteContent) -> Result<&'a Vec<String>, DraftError> {
                    let parents = &content.$($list).+;
                    check_index(parents, self.$parent, $parent_path)?;
                    Ok(&parents[self.$parent].$field)
                }

                fn items_mut<'a>(
                    &self,
                    content: &'a mut SiteContent,
                ) -> Result<&'a mut Vec<String>, DraftError> {
                    let parents = &mut content.$($list).+;
                    check_index(parents, self.$parent, $parent_path)?;
                    Ok(&mut parents[self.$parent].$field)
                }
            }
        };
    }

    list_section!(
        /// `hero.roles`
        HeroRoles, String, "hero.roles", hero.roles
    );
    list_section!(
        /// `hero.stats`
        HeroStats, doc::HeroStat, "hero.stats", hero.stats
    );
    list_section!(Education, doc::Education, "about.education", about.education);
    list_section!(Experience, doc::Experience, "about.experience", about.experience);
    list_section!(Skills, doc::Skill, "about.skills", about.skills);
    list_section!(
        Certifications,
        String,
        "about.certifications",
        about.certifications
    );
    list_section!(Projects, doc::Project, "projects", projects);
    list_section!(Blog, doc::BlogPost, "blog", blog);
    list_section!(Testimonials, doc::Testimonial, "testimonials", testimonials);

    nested_section!(
        /// Bullet points of one experience entry
        Bullets { experience }, "about.experience", about.experience => bullets, "bullets"
    );
    nested_section!(ProjectTags { project }, "projects", projects => tags, "tags");
    nested_section!(ProjectTools { project }, "projects", projects => tools, "tools");
    nested_section!(ProjectMetrics { project }, "projects", projects => metrics, "metrics");
    nested_section!(PostTags { post }, "blog", blog => tags, "tags");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> Vec<char> {
        vec!['a', 'b', 'c', 'd']
    }

    #[test]
    fn test_move_forward_and_backward() {
        let mut items = letters();
        move_item(&mut items, 0, 2, "x").unwrap();
        assert_eq!(items, vec!['b', 'c', 'a', 'd']);

        let mut items = letters();
        move_item(&mut items, 3, 0, "x").unwrap();
        assert_eq!(items, vec!['d', 'a', 'b', 'c']);

        let mut items = letters();
        move_item(&mut items, 2, 1, "x").unwrap();
        assert_eq!(items, vec!['a', 'c', 'b', 'd']);
    }

    #[test]
    fn test_move_out_of_range() {
        let mut items = letters();
        let err = move_item(&mut items, 1, 4, "x").unwrap_err();
        assert_eq!(
            err,
            DraftError::IndexOutOfRange {
                section: "x".to_string(),
                index: 4,
                len: 4
            }
        );
        assert_eq!(items, letters());
    }

    #[test]
    fn test_remove() {
        let mut items = vec!['a', 'b', 'c'];
        assert_eq!(remove_item(&mut items, 1, "x").unwrap(), 'b');
        assert_eq!(items, vec!['a', 'c']);

        let mut items = vec!['a', 'b', 'c'];
        assert!(matches!(
            remove_item(&mut items, 5, "x"),
            Err(DraftError::IndexOutOfRange { index: 5, len: 3, .. })
        ));
        assert_eq!(items, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_insert_clamps_to_end() {
        let mut items = vec!['a', 'b'];
        insert_item(&mut items, 'z', None);
        insert_item(&mut items, 'y', Some(0));
        insert_item(&mut items, 'x', Some(99));
        assert_eq!(items, vec!['y', 'a', 'b', 'z', 'x']);
    }

    #[test]
    fn test_nested_section_reports_parent() {
        use crate::content::default_content;
        let content = default_content();
        let err = sections::Bullets { experience: 7 }
            .items(&content)
            .unwrap_err();
        assert_eq!(
            err,
            DraftError::IndexOutOfRange {
                section: "about.experience".to_string(),
                index: 7,
                len: 3
            }
        );
        assert_eq!(
            sections::Bullets { experience: 2 }.name(),
            "about.experience.2.bullets"
        );
        assert_eq!(
            sections::ProjectTools { project: 5 }.items(&content).unwrap(),
            &vec!["Python".to_string(), "LangChain".to_string(), "OpenAI API".to_string()]
        );
    }
}
