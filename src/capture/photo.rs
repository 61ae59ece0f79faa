use crate::errors::{AppError, AppResult};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Where the photo came from. A camera capture reaches this client as an
/// image stream on standard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSource {
    Upload,
    Camera,
}

/// Image payload held in memory until submission, never written anywhere.
#[derive(Clone, PartialEq, Eq)]
pub struct AttendancePhoto {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime: &'static str,
    pub source: PhotoSource,
}

impl std::fmt::Debug for AttendancePhoto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttendancePhoto")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .field("source", &self.source)
            .finish()
    }
}

impl AttendancePhoto {
    /// Accept `bytes` only when they sniff as an image.
    pub fn from_bytes(bytes: Vec<u8>, file_name: &str, source: PhotoSource) -> AppResult<Self> {
        if bytes.is_empty() {
            return Err(AppError::UnsupportedPhoto(format!("{file_name} is empty")));
        }

        let kind = infer::get(&bytes).ok_or_else(|| {
            AppError::UnsupportedPhoto(format!("{file_name}: unrecognised file type"))
        })?;
        if kind.matcher_type() != infer::MatcherType::Image {
            return Err(AppError::UnsupportedPhoto(format!(
                "{file_name}: {} is not an image",
                kind.mime_type()
            )));
        }

        Ok(Self {
            bytes,
            file_name: file_name.to_string(),
            mime: kind.mime_type(),
            source,
        })
    }

    pub fn from_path(path: &Path) -> AppResult<Self> {
        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "photo".to_string());
        Self::from_bytes(bytes, &name, PhotoSource::Upload)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> AppResult<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let mut photo = Self::from_bytes(bytes, "capture", PhotoSource::Camera)?;
        photo.file_name = format!("capture.{}", extension_for(photo.mime));
        Ok(photo)
    }

    /// `-` reads a capture from stdin, anything else is a file path.
    pub fn load(arg: &str) -> AppResult<Self> {
        if arg == "-" {
            Self::from_reader(std::io::stdin().lock())
        } else {
            Self::from_path(Path::new(arg))
        }
    }
}

fn extension_for(mime: &str) -> &'static str {
    match mime {
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/bmp" => "bmp",
        _ => "jpg",
    }
}
