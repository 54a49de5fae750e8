pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::GalleryError;
pub use models::{EntryLabels, FileMeta, Gallery, GalleryEntry, Timestamp};
pub use utils::{
    content_type_from_file_path, double_digit_number, size_string_from_file, time_string_from_file,
    time_string_from_file_in,
};
