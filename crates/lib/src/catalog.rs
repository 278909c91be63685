use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, FixedOffset};
use rand::Rng;
use tracing::debug;

use crate::{chronological, post::Post, tags::TagIndex};

/// `YYYY-MM-DD` in the timestamp's own offset, the key posts are looked up
/// by.
pub fn date_key(created: &DateTime<FixedOffset>) -> String {
    created.format("%Y-%m-%d").to_string()
}

/// An immutable snapshot of every ingested post plus the indices derived from
/// them. Built once by a [`CatalogBuilder`] and never modified afterwards.
#[derive(Debug, Default)]
pub struct Catalog {
    posts: Vec<Arc<Post>>,
    by_date: HashMap<String, Arc<Post>>,
    tags: TagIndex,
}

impl Catalog {
    /// Posts, newest first.
    pub fn posts(&self) -> &[Arc<Post>] {
        &self.posts
    }

    pub fn get(&self, date_key: &str) -> Option<&Arc<Post>> {
        self.by_date.get(date_key)
    }

    pub fn tags(&self) -> &TagIndex {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn date_keys(&self) -> impl Iterator<Item = &str> {
        self.by_date.keys().map(String::as_str)
    }
}

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    posts: Vec<Arc<Post>>,
    by_date: HashMap<String, Arc<Post>>,
    tags: TagIndex,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a post in scan order. When two posts share a creation day the
    /// later one replaces the earlier one in the date lookup; both stay in the
    /// post sequence.
    pub fn push(&mut self, post: Post) {
        let post = Arc::new(post);
        self.tags.add(&post.tags);

        let key = date_key(&post.created);
        if let Some(replaced) = self.by_date.insert(key.clone(), post.clone()) {
            debug!(
                "date key {key} now refers to {:?} instead of {:?}",
                post.title, replaced.title
            );
        }
        self.posts.push(post);
    }

    pub(crate) fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn finish<R: Rng>(mut self, rng: &mut R) -> Catalog {
        chronological::sort(&mut self.posts, rng);
        Catalog {
            posts: self.posts,
            by_date: self.by_date,
            tags: self.tags,
        }
    }
}

#[cfg(test)]
mod test {
    use chrono::{DateTime, FixedOffset, TimeZone};
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::{date_key, Catalog, CatalogBuilder};
    use crate::post::{canonical_path, Post};

    fn dt(y: i32, m: u32, d: u32, h: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, 0, 0)
            .unwrap()
    }

    fn post(title: &str, created: DateTime<FixedOffset>, tags: &[&str]) -> Post {
        Post {
            title: title.to_string(),
            subtitle: String::new(),
            author: String::new(),
            path: canonical_path(&created),
            created,
            edited: None,
            tags: tags.iter().map(ToString::to_string).collect(),
            content_preview: String::new(),
            content: String::new(),
        }
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.get("2020-01-01").is_none());
        assert!(catalog.tags().is_empty());
    }

    #[test]
    fn date_key_format() {
        let created = dt(2018, 4, 5, 13);
        assert_eq!("2018-04-05", date_key(&created));
    }

    #[test]
    fn date_key_uses_local_day() {
        let created = FixedOffset::east_opt(12 * 3600)
            .unwrap()
            .with_ymd_and_hms(2018, 4, 15, 8, 0, 0)
            .unwrap();
        assert_eq!("2018-04-15", date_key(&created));

        let mut builder = CatalogBuilder::new();
        builder.push(post("kiwi", created, &[]));
        let catalog = builder.finish(&mut StdRng::seed_from_u64(0));
        assert_eq!("kiwi", catalog.get("2018-04-15").unwrap().title);
        assert!(catalog.get("2018-04-14").is_none());
    }

    #[test]
    fn build() {
        let mut builder = CatalogBuilder::new();
        builder.push(post("old", dt(2017, 3, 1, 0), &["a"]));
        builder.push(post("new", dt(2020, 6, 9, 0), &["a", "b"]));
        builder.push(post("mid", dt(2019, 1, 1, 0), &[]));
        let catalog = builder.finish(&mut StdRng::seed_from_u64(0));

        let titles: Vec<&str> = catalog.posts().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(vec!["new", "mid", "old"], titles);
        assert_eq!("mid", catalog.get("2019-01-01").unwrap().title);
        assert_eq!(vec!["a".to_string(), "b".to_string()], catalog.tags().to_vec());
    }

    #[test]
    fn same_day_last_scanned_wins() {
        let mut builder = CatalogBuilder::new();
        builder.push(post("morning", dt(2020, 6, 9, 8), &[]));
        builder.push(post("evening", dt(2020, 6, 9, 20), &[]));
        let catalog = builder.finish(&mut StdRng::seed_from_u64(0));

        assert_eq!(2, catalog.len());
        assert_eq!(1, catalog.date_keys().count());
        assert_eq!("evening", catalog.get("2020-06-09").unwrap().title);
    }
}
