use std::env;
use std::path::PathBuf;

/// Location for uploaded product images
///
/// Environment variables:
/// - IMAGES_DIR: directory for stored image files (default: "./images")
pub struct ImagesConfig {
    pub dir: PathBuf,
}

impl ImagesConfig {
    pub fn from_env() -> Self {
        let dir = env::var("IMAGES_DIR").unwrap_or_else(|_| "./images".to_string());
        Self {
            dir: PathBuf::from(dir),
        }
    }
}
