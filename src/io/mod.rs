pub mod csv_reader;
pub mod csv_writer;
pub mod error;
pub mod media;
pub mod parse;

// Re-export commonly used types
pub use csv_reader::CsvUserStream;
pub use csv_writer::{write_plan, write_summary, write_violations};
pub use error::IoError;
pub use media::{IMAGE_EXTENSIONS, is_image, list_media_dir, load_media_dir};
pub use parse::RawUserRow;
