pub mod file;
pub mod gallery;

pub use file::{FileMeta, Timestamp};
pub use gallery::{EntryLabels, Gallery, GalleryEntry};
