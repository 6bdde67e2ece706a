//! The forum-hosting stub.
//!
//! Hosting multiple forums on one installation must not affect standard
//! single-forum deployments, so the model stays deliberately thin: a forum
//! knows its title and slug, and its collections are empty until hosting
//! grows real storage behind it.

use serde::{Deserialize, Serialize};

use agora_contracts::{
    actor::User,
    target::{Category, Group, Topic},
};

use crate::slug;

/// A hosted forum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forum {
    pub title: String,
    slug: Option<String>,
}

impl Forum {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: None,
        }
    }

    /// The URL slug, derived from the title on first access and memoized.
    ///
    /// An empty title yields an empty slug; a title that slugifies to
    /// nothing (say, non-ASCII characters) falls back to `"forum"`.
    pub fn slug(&mut self) -> &str {
        if self.slug.is_none() {
            if self.title.is_empty() {
                return "";
            }
            let derived = slug::for_title(&self.title);
            self.slug = Some(if derived.is_empty() {
                "forum".to_string()
            } else {
                derived
            });
        }
        self.slug.as_deref().unwrap_or("")
    }

    pub fn categories(&self) -> Vec<Category> {
        Vec::new()
    }

    pub fn topics(&self) -> Vec<Topic> {
        Vec::new()
    }

    pub fn groups(&self) -> Vec<Group> {
        Vec::new()
    }

    pub fn members(&self) -> Vec<User> {
        Vec::new()
    }
}
