pub mod format;
pub mod mime;

pub use format::{double_digit_number, size_string_from_file, time_string_from_file, time_string_from_file_in};
pub use mime::content_type_from_file_path;
