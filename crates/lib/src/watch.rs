use std::sync::Arc;

use camino::Utf8Path;
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, error};

use crate::{fs::path_has_extensions, library::Library};

// Let's keep the possible events simpler for our needs
#[derive(Debug, PartialEq)]
enum FsEvent {
    Rename,
    Edit,
    Create,
    Delete,
    Ignored,
    Unhandled(notify::EventKind),
}

impl From<notify::EventKind> for FsEvent {
    fn from(event_kind: notify::EventKind) -> Self {
        use notify::event::{CreateKind, DataChange, EventKind, ModifyKind, RemoveKind};
        match event_kind {
            EventKind::Modify(ModifyKind::Name(_)) => Self::Rename,
            EventKind::Modify(ModifyKind::Data(DataChange::Content | DataChange::Any))
            | EventKind::Modify(ModifyKind::Any) => Self::Edit,
            EventKind::Remove(RemoveKind::File | RemoveKind::Any) => Self::Delete,
            EventKind::Create(CreateKind::File | CreateKind::Any) => Self::Create,
            EventKind::Access(_) => Self::Ignored,
            unhandled => Self::Unhandled(unhandled),
        }
    }
}

/// Rebuilds the library's catalog whenever a post document changes on disk.
#[derive(Clone)]
pub struct RefreshOnChange(pub Arc<Library>);

impl notify::EventHandler for RefreshOnChange {
    fn handle_event(&mut self, event: notify::Result<notify::Event>) {
        match event {
            Ok(notify::Event { kind, paths, .. }) => {
                let touches_posts = paths
                    .iter()
                    .filter_map(|path| Utf8Path::from_path(path))
                    .any(|path| path_has_extensions(path, &["md"]));
                if !touches_posts {
                    return;
                }
                match FsEvent::from(kind) {
                    FsEvent::Ignored => (),
                    FsEvent::Unhandled(event) => debug!("unhandled watch event: {event:?}"),
                    event => {
                        debug!("{event:?} on {paths:?}, refreshing");
                        if let Err(err) = self.0.refresh() {
                            error!("refresh after {event:?} failed: {err}");
                        }
                    }
                }
            }
            Err(e) => error!("watch error: {e:?}"),
        }
    }
}

/// Starts watching `dir`. Changes stop being picked up once the returned
/// watcher is dropped.
pub fn watch(library: Arc<Library>, dir: &Utf8Path) -> notify::Result<RecommendedWatcher> {
    let mut watcher = notify::recommended_watcher(RefreshOnChange(library))?;
    watcher.watch(dir.as_std_path(), RecursiveMode::NonRecursive)?;
    Ok(watcher)
}
