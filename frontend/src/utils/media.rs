//! Display URLs for employee photos.
//!
//! Byte payloads become object URLs in the browser; every URL handed out by
//! [`MediaHandle::acquire`] is revoked exactly once, either by an explicit
//! [`MediaHandle::release`] or when the handle is dropped.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::cell::Cell;

use crate::models::{Photo, PhotoData};

pub fn mime_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MediaSource {
    Url(String),
    Bytes { bytes: Vec<u8>, mime: &'static str },
}

impl MediaSource {
    pub fn from_photo(photo: &Photo) -> Option<Self> {
        let mime = mime_type_for(photo.file_name.as_deref().unwrap_or_default());
        match &photo.data {
            PhotoData::Bytes(bytes) if bytes.is_empty() => None,
            PhotoData::Bytes(bytes) => Some(MediaSource::Bytes {
                bytes: bytes.clone(),
                mime,
            }),
            PhotoData::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    None
                } else if is_url(text) {
                    Some(MediaSource::Url(text.to_string()))
                } else {
                    match STANDARD.decode(text) {
                        Ok(bytes) if !bytes.is_empty() => Some(MediaSource::Bytes { bytes, mime }),
                        Ok(_) => None,
                        Err(err) => {
                            log::warn!("photo payload is neither a URL nor base64: {}", err);
                            None
                        }
                    }
                }
            }
        }
    }
}

fn is_url(text: &str) -> bool {
    text.starts_with("http://")
        || text.starts_with("https://")
        || text.starts_with("data:")
        || text.starts_with('/')
}

#[derive(Debug)]
pub struct MediaHandle {
    src: String,
    revocable: bool,
    released: Cell<bool>,
}

impl MediaHandle {
    pub fn acquire(source: MediaSource) -> Result<Self, String> {
        match source {
            MediaSource::Url(url) => Ok(Self {
                src: url,
                revocable: false,
                released: Cell::new(false),
            }),
            MediaSource::Bytes { bytes, mime } => Ok(Self {
                src: object_url(&bytes, mime)?,
                revocable: cfg!(target_arch = "wasm32"),
                released: Cell::new(false),
            }),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn is_released(&self) -> bool {
        self.released.get()
    }

    pub fn release(&self) {
        if self.released.replace(true) {
            return;
        }
        if self.revocable {
            revoke_object_url(&self.src);
        }
    }
}

impl Drop for MediaHandle {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(target_arch = "wasm32")]
fn object_url(bytes: &[u8], mime: &str) -> Result<String, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));
    let bag = web_sys::BlobPropertyBag::new();
    bag.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&array, &bag)
        .map_err(|_| "Failed to create blob".to_string())?;
    web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create object URL".to_string())
}

// Without a browser there is no object URL registry; an inline data URL needs no revoke.
#[cfg(not(target_arch = "wasm32"))]
fn object_url(bytes: &[u8], mime: &str) -> Result<String, String> {
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

#[cfg(target_arch = "wasm32")]
fn revoke_object_url(url: &str) {
    if web_sys::Url::revoke_object_url(url).is_err() {
        log::warn!("failed to revoke object URL");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn revoke_object_url(_url: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(data: PhotoData, file_name: &str) -> Photo {
        Photo {
            data,
            file_name: Some(file_name.to_string()),
        }
    }

    #[test]
    fn mime_type_follows_extension() {
        assert_eq!(mime_type_for("me.PNG"), "image/png");
        assert_eq!(mime_type_for("me.jpeg"), "image/jpeg");
        assert_eq!(mime_type_for("me.jpg"), "image/jpeg");
        assert_eq!(mime_type_for("anim.gif"), "image/gif");
        assert_eq!(mime_type_for("scan.bmp"), "image/bmp");
        assert_eq!(mime_type_for("notes.txt"), "application/octet-stream");
        assert_eq!(mime_type_for("noextension"), "application/octet-stream");
    }

    #[test]
    fn url_strings_are_used_as_is() {
        let source = MediaSource::from_photo(&photo(
            PhotoData::Text("https://cdn.example.com/a.png".into()),
            "a.png",
        ));
        assert_eq!(
            source,
            Some(MediaSource::Url("https://cdn.example.com/a.png".into()))
        );
    }

    #[test]
    fn base64_strings_decode_to_bytes() {
        let source = MediaSource::from_photo(&photo(PhotoData::Text("aGVsbG8=".into()), "a.gif"));
        assert_eq!(
            source,
            Some(MediaSource::Bytes {
                bytes: b"hello".to_vec(),
                mime: "image/gif"
            })
        );
    }

    #[test]
    fn empty_or_garbage_payloads_have_no_source() {
        assert!(MediaSource::from_photo(&photo(PhotoData::Bytes(vec![]), "a.png")).is_none());
        assert!(MediaSource::from_photo(&photo(PhotoData::Text("  ".into()), "a.png")).is_none());
        assert!(MediaSource::from_photo(&photo(PhotoData::Text("%%%".into()), "a.png")).is_none());
    }

    #[test]
    fn byte_handle_renders_data_url_and_releases_once() {
        let handle = MediaHandle::acquire(MediaSource::Bytes {
            bytes: b"hello".to_vec(),
            mime: "image/png",
        })
        .unwrap();
        assert_eq!(handle.src(), "data:image/png;base64,aGVsbG8=");
        assert!(!handle.is_released());
        handle.release();
        handle.release();
        assert!(handle.is_released());
    }
}
