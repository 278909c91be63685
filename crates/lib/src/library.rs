//! Loading and refreshing the published [`Catalog`].
//!
//! A refresh reads every content document from the [`Source`], ingests the
//! ones it can, and publishes the result as a brand-new catalog. Readers hold
//! an `Arc<Catalog>` snapshot, so a refresh never changes a catalog someone
//! is already looking at. A document that can't be read or parsed is logged
//! and left out; only a source that can't be listed fails the refresh, in
//! which case the previous catalog stays published.

use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwap;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    catalog::{Catalog, CatalogBuilder},
    post::{IngestError, Post},
    source::{Source, SourceError},
};

/// Only documents whose names end in this are considered posts.
pub const CONTENT_SUFFIX: &str = ".md";

pub fn is_content_document(name: &str) -> bool {
    name.ends_with(CONTENT_SUFFIX)
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("unable to list documents: {0}")]
    Source(#[from] SourceError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

fn ingest<S: Source + ?Sized>(source: &S, name: &str) -> Result<Post, IngestError> {
    let data = source.read(name)?;
    Post::from_bytes(&data)
}

/// Runs the whole pipeline over `source` without publishing anything.
pub fn build_catalog<S, R>(source: &S, rng: &mut R) -> Result<(Catalog, LoadReport), LoadError>
where
    S: Source + ?Sized,
    R: Rng,
{
    let names = source.list()?;

    let mut builder = CatalogBuilder::new();
    let mut skipped = 0;
    for name in names.iter().filter(|name| is_content_document(name)) {
        match ingest(source, name) {
            Ok(post) => {
                debug!("loaded {name} as {}", post.path);
                builder.push(post);
            }
            Err(err) => {
                warn!("skipping {name}: {err}");
                skipped += 1;
            }
        }
    }

    let report = LoadReport {
        loaded: builder.len(),
        skipped,
    };
    Ok((builder.finish(rng), report))
}

pub struct Library {
    source: Box<dyn Source>,
    current: ArcSwap<Catalog>,
    writer: Mutex<()>,
}

impl Library {
    /// The library starts out publishing an empty catalog; call
    /// [`Library::refresh`] to load posts.
    pub fn new(source: impl Source + 'static) -> Self {
        Self {
            source: Box::new(source),
            current: ArcSwap::from_pointee(Catalog::default()),
            writer: Mutex::new(()),
        }
    }

    /// The currently published catalog.
    pub fn catalog(&self) -> Arc<Catalog> {
        self.current.load_full()
    }

    pub fn refresh(&self) -> Result<LoadReport, LoadError> {
        self.refresh_with_rng(&mut rand::thread_rng())
    }

    pub fn refresh_with_rng<R: Rng>(&self, rng: &mut R) -> Result<LoadReport, LoadError> {
        // One refresh at a time; readers are never blocked by this.
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        let (catalog, report) = build_catalog(self.source.as_ref(), rng)?;
        self.current.store(Arc::new(catalog));

        info!(
            "published catalog with {} posts ({} documents skipped)",
            report.loaded, report.skipped
        );
        Ok(report)
    }
}
