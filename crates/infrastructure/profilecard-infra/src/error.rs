#[derive(Debug, thiserror::Error)]
pub enum AvatarError {
    #[error("unsupported avatar reference `{0}`")]
    UnsupportedReference(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server responded with {status} for {url}")]
    Status { status: u16, url: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode error: {0}")]
    Decode(#[from] image::ImageError),
    #[error("decode task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
