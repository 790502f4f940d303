// src/dtos/category.rs
use serde::Deserialize;

use crate::models::Category;

/// The categories endpoint answers either with a bare array or an envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CategoryList {
    Envelope { data: Vec<Category> },
    Bare(Vec<Category>),
}

impl CategoryList {
    pub fn into_vec(self, limit: usize) -> Vec<Category> {
        let mut list = match self {
            CategoryList::Envelope { data } => data,
            CategoryList::Bare(list) => list,
        };
        list.truncate(limit);
        list
    }
}
