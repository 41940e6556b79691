use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[async_trait]
pub trait ImageEncoder: Send + Sync {
    async fn encode(&self, file: &ImageFile) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlEncoder;

#[async_trait]
impl ImageEncoder for DataUrlEncoder {
    async fn encode(&self, file: &ImageFile) -> Option<String> {
        if file.is_empty() {
            return None;
        }

        let mime_type = if file.mime_type.is_empty() {
            "application/octet-stream"
        } else {
            file.mime_type.as_str()
        };

        debug!("Encoding '{}' ({} bytes) as data URL", file.name, file.bytes.len());
        Some(format!("data:{};base64,{}", mime_type, STANDARD.encode(&file.bytes)))
    }
}
