//! Asynchronous recursive directory listing.
//!
//! A typical use is collecting every file of a folder, or the folder's
//! structure, for archiving, indexing or syncing.
//!
//! ```rust
//! # tokio_test::block_on(async {
//! # use recursive_readdir::{list, Listing, Options};
//! let options = Options::default()
//!     .include(".toml")
//!     .exclude("target")
//!     .extensions(true);
//! match list("./", &options, None).await {
//!     Listing::Items(items) => {
//!         assert!(items.iter().any(|item| item.name == "Cargo.toml"));
//!         println!("{}", serde_json::to_string_pretty(&items).unwrap());
//!     }
//!     Listing::Failed(failure) => panic!("{failure}"),
//! }
//! # })
//! ```
//!
//! An item might look like
//! ```json
//! {
//!   "name": "Cargo.toml",
//!   "name_raw": [67, 97, 114, 103, 111, 46, 116, 111, 109, 108],
//!   "title": "Cargo",
//!   "path": "/home/me/recursive-readdir",
//!   "path_raw": [47, 104, 111, 109, 101, ...],
//!   "full_name": "/home/me/recursive-readdir/Cargo.toml",
//!   "full_name_raw": [47, 104, 111, 109, 101, ...],
//!   "extension": ".toml",
//!   "is_directory": false
//! }
//! ```
//!
//! Folders are walked one at a time and, inside a folder, items are
//! processed last to first, each one completely before the next. A
//! [`Progress`] callback observes every processed item and can stop the
//! rest of its folder.
//!
//! Failures never abort a listing. A folder that cannot be read becomes a
//! [`Listing::Failed`]; a file or folder whose metadata or contents cannot
//! be read keeps the failure in [`Item::error`].

mod encoding;
mod enrich;
mod entry;
mod errors;
mod filter;
mod item;
mod lister;
mod options;
mod path;
mod progress;
mod reader;
mod stat;
pub mod utils;
mod walker;

pub use encoding::Encoding;
pub use errors::DirError;
pub use errors::Error;
pub use item::Item;
pub use item::Listing;
pub use lister::Lister;
pub use lister::list;
pub use options::Mode;
pub use options::Options;
pub use path::normalize_separators;
pub use progress::NoOpProgress;
pub use progress::Progress;
pub use stat::FileStat;

#[cfg(feature = "test_utils")]
pub(crate) mod test_utils;
#[cfg(feature = "test_utils")]
pub use test_utils::TestRoot;
