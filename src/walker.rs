use std::path::Path as StdPath;

use async_recursion::async_recursion;
use derivative::Derivative;
use log::debug;
use log::warn;

use crate::DirError;
use crate::Item;
use crate::Listing;
use crate::Mode;
use crate::Options;
use crate::Progress;
use crate::filter::FilterSet;
use crate::path::Separator;

/// State of one listing, shared by every folder it descends into.
#[derive(Derivative)]
#[derivative(Debug)]
pub(crate) struct Walker<'a> {
    pub options: &'a Options,
    pub filter: FilterSet,
    pub separator: Separator,
    #[derivative(Debug = "ignore")]
    pub progress: Option<&'a dyn Progress>,
}

impl<'a> Walker<'a> {
    pub fn new(options: &'a Options, progress: Option<&'a dyn Progress>) -> Self {
        Self {
            options,
            filter: FilterSet::from_options(options),
            separator: Separator::for_options(options),
            progress,
        }
    }

    /// Lists the folder at `path`, `depth` levels below the listed root.
    ///
    /// Never fails: a folder that cannot be read yields
    /// [`Listing::Failed`].
    #[async_recursion]
    pub async fn list_dir(&self, path: &StdPath, depth: usize) -> Listing {
        let items = match self.read_directory(path, depth).await {
            Ok(items) => items,
            Err(error) => {
                warn!("[list_dir] {}: {error}", path.display());
                return Listing::Failed(DirError {
                    error,
                    path: path.to_string_lossy().into_owned(),
                });
            }
        };

        let mut items = if self.options.needs_enrichment() {
            let enriched = self.enrich(items, depth).await;
            if enriched.aborted {
                debug!("[list_dir] {} stopped by progress callback", path.display());
            }
            enriched.items
        } else {
            items
        };

        self.retain_included(&mut items);
        Listing::Items(items)
    }

    /// Final include pass over one folder's result.
    ///
    /// In tree mode folders holding content stay, so that matching
    /// descendants keep their ancestors.
    fn retain_included(&self, items: &mut Vec<Item>) {
        if !self.filter.has_include() {
            return;
        }
        let tree = self.options.mode == Mode::Tree;
        items.retain(|item| {
            (tree && item.is_dir() && item.content.is_some())
                || self.filter.is_included(&item.full_name)
        });
    }
}
