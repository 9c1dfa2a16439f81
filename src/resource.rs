//! Shared image resource handle.
//!
//! An [`ImageResource`] is the opaque, externally-owned entity a placeholder
//! value points at: raw image bytes plus a format descriptor. The bytes are
//! held behind a reference count so one resource can back many placeholder
//! values in a document without copying. Nothing here decodes the payload;
//! the templating engine embeds it as-is.

use crate::error::{ValueError, ValueResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Raster formats the templating engine knows how to embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
}

impl ImageFormat {
    /// MIME type reported to the consuming document format.
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Bmp => "image/bmp",
            ImageFormat::Tiff => "image/tiff",
        }
    }

    /// File extensions associated with the format, lowercase, primary first.
    pub fn file_extensions(self) -> &'static [&'static str] {
        match self {
            ImageFormat::Png => &["png"],
            ImageFormat::Jpeg => &["jpg", "jpeg"],
            ImageFormat::Gif => &["gif"],
            ImageFormat::Bmp => &["bmp"],
            ImageFormat::Tiff => &["tif", "tiff"],
        }
    }

    /// Maps a file extension to its format, case-insensitively.
    pub fn from_extension(extension: &str) -> Option<ImageFormat> {
        let extension = extension.to_ascii_lowercase();
        [
            ImageFormat::Png,
            ImageFormat::Jpeg,
            ImageFormat::Gif,
            ImageFormat::Bmp,
            ImageFormat::Tiff,
        ]
        .into_iter()
        .find(|format| format.file_extensions().contains(&extension.as_str()))
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_type())
    }
}

/// Opaque image payload referenced by placeholder values.
///
/// Cloning bumps a reference count; every clone shares the same byte
/// allocation. The payload is never empty. Consumers read the bytes and the
/// format, they never mutate or release the resource — its lifetime is
/// independent of any value that references it.
#[derive(Clone)]
pub struct ImageResource {
    data: Arc<[u8]>,
    format: ImageFormat,
}

impl ImageResource {
    /// Wraps an in-memory image payload.
    ///
    /// # Errors
    /// Returns [`ValueError::EmptyImageData`] when the payload is empty.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>, format: ImageFormat) -> ValueResult<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(ValueError::EmptyImageData);
        }
        Ok(Self {
            data: bytes.into(),
            format,
        })
    }

    /// Reads an image payload from disk, inferring the format from the file
    /// extension.
    ///
    /// # Errors
    /// Returns [`ValueError::UnsupportedImageFormat`] when the extension maps
    /// to no known format, [`ValueError::ImageRead`] when the file cannot be
    /// read, and [`ValueError::EmptyImageData`] for an empty file.
    pub fn from_path(path: impl AsRef<Path>) -> ValueResult<Self> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let format = ImageFormat::from_extension(extension).ok_or_else(|| {
            ValueError::UnsupportedImageFormat {
                extension: extension.to_string(),
            }
        })?;

        let bytes = fs::read(path).map_err(|source| ValueError::ImageRead {
            path: path.to_path_buf(),
            source,
        })?;
        if bytes.is_empty() {
            return Err(ValueError::EmptyImageData);
        }

        tracing::debug!(
            path = %path.display(),
            bytes = bytes.len(),
            mime = format.mime_type(),
            "loaded image resource"
        );

        Ok(Self {
            data: bytes.into(),
            format,
        })
    }

    /// Raw image bytes, never empty.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

impl fmt::Debug for ImageResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageResource")
            .field("format", &self.format)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl PartialEq for ImageResource {
    fn eq(&self, other: &Self) -> bool {
        self.format == other.format
            && (Arc::ptr_eq(&self.data, &other.data) || self.data == other.data)
    }
}

impl Eq for ImageResource {}
