use std::path::Path as StdPath;
use std::sync::Arc;

use derivative::Derivative;
use log::debug;

use crate::Listing;
use crate::Options;
use crate::Progress;
use crate::walker::Walker;

/// Lists the directory subtree at `path`.
///
/// Folders are processed one at a time and their items one after the
/// other; `progress`, when given, is called for every processed item.
///
/// This never fails: if `path` itself cannot be read the result is
/// [`Listing::Failed`], while items that cannot be read carry their own
/// [`crate::Item::error`].
pub async fn list<P: AsRef<StdPath>>(
    path: P,
    options: &Options,
    progress: Option<&dyn Progress>,
) -> Listing {
    let path = path.as_ref();
    debug!("[list] {} with {options:?}", path.display());
    Walker::new(options, progress).list_dir(path, 0).await
}

/// Reusable listing settings: options plus an optional progress callback.
#[derive(Clone, Default, Derivative)]
#[derivative(Debug)]
pub struct Lister {
    options: Options,
    #[derivative(Debug = "ignore")]
    progress: Option<Arc<dyn Progress>>,
}

impl Lister {
    /// Creates a lister without progress callback.
    pub fn new(options: Options) -> Self {
        Self {
            options,
            progress: None,
        }
    }

    /// Sets the progress callback.
    pub fn with_progress<P: Progress + 'static>(mut self, progress: P) -> Self {
        self.progress = Some(Arc::new(progress));
        self
    }

    /// The options used by [`Lister::list`].
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Lists the directory subtree at `path`, see [`list`].
    pub async fn list<P: AsRef<StdPath>>(&self, path: P) -> Listing {
        list(path, &self.options, self.progress.as_deref()).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::Item;
    use crate::NoOpProgress;
    use crate::TestRoot;

    #[tokio::test]
    async fn lister_matches_free_function() {
        let root = TestRoot::new().await.unwrap();
        let options = Options::default().ignore_folders(false);

        let plain = list(root.path(), &options, None).await;
        let lister = Lister::new(options).with_progress(NoOpProgress);
        assert_eq!(lister.list(root.path()).await, plain);
    }

    #[tokio::test]
    async fn lister_calls_progress_for_every_item() {
        let root = TestRoot::new().await.unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let lister = Lister::default().with_progress(move |_: &mut Item, _: usize, _: usize| {
            counter.fetch_add(1, Ordering::SeqCst);
            false
        });

        let items = lister.list(root.path()).await.into_items().unwrap();
        assert_eq!(items.len(), 4);
        // 4 root entries, 2 in c, 2 in c/d, 1 in e
        assert_eq!(calls.load(Ordering::SeqCst), 9);
    }

    #[tokio::test]
    async fn listing_can_be_spawned() {
        let root = TestRoot::new().await.unwrap();
        let path = root.path().to_path_buf();
        let lister = Lister::default();

        let listing = tokio::spawn(async move { lister.list(path).await })
            .await
            .unwrap();
        assert!(!listing.is_failed());
    }
}
