// Review corpus: labeled movie reviews and the download that provides them.

pub mod download;
pub mod loader;
pub mod review;
