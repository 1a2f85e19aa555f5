//! Image ingestion and clipboard glue: open dialog, decode, paste-in,
//! copy-out. Everything user-facing returns `Result<_, String>` with a
//! message the app routes to a toast and the session log.

use image::RgbaImage;
use rfd::FileDialog;
use std::path::{Path, PathBuf};

/// File extensions offered in the open dialog — the formats the `image`
/// crate is built with.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "webp", "bmp", "tga", "ico", "tif", "tiff", "gif",
];

/// Show the native open dialog. `None` when the user cancels.
pub fn pick_image_file() -> Option<PathBuf> {
    FileDialog::new()
        .add_filter("Images", SUPPORTED_EXTENSIONS)
        .pick_file()
}

/// Decode an image file to RGBA8.
pub fn load_image(path: &Path) -> Result<RgbaImage, String> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|e| format!("Could not open {}: {}", path.display(), e))
}

/// Decode raw file bytes (dropped files may arrive without a path).
pub fn load_image_from_bytes(bytes: &[u8]) -> Result<RgbaImage, String> {
    image::load_from_memory(bytes)
        .map(|img| img.to_rgba8())
        .map_err(|e| format!("Could not decode dropped image: {}", e))
}

/// Try to read an image off the system clipboard. Two cases:
///   1. Raw image data (Print Screen, copy from another editor).
///   2. Text content that happens to be a valid image file path.
pub fn image_from_clipboard() -> Option<RgbaImage> {
    if let Ok(mut clip) = arboard::Clipboard::new() {
        if let Ok(data) = clip.get_image() {
            if let Some(img) = RgbaImage::from_raw(
                data.width as u32,
                data.height as u32,
                data.bytes.into_owned(),
            ) {
                return Some(img);
            }
        }
    }

    if let Ok(mut clip) = arboard::Clipboard::new() {
        if let Ok(text) = clip.get_text() {
            let path = Path::new(text.trim());
            if path.is_file()
                && let Ok(img) = image::open(path)
            {
                return Some(img.to_rgba8());
            }
        }
    }

    None
}

/// Put plain text (a hex or rgb() string) on the system clipboard.
pub fn copy_text(text: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clip) => clip.set_text(text.to_string()).is_ok(),
        Err(_) => false,
    }
}
