use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HangmanError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to load image {path}: {source}")]
    ImageError {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Missing asset: {0}")]
    MissingAsset(PathBuf),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Window error: {0}")]
    WindowError(#[from] winit::error::OsError),

    #[error("Event loop error: {0}")]
    EventLoopError(#[from] winit::error::EventLoopError),

    #[error("Surface error: {0}")]
    SurfaceError(#[from] wgpu::CreateSurfaceError),

    #[error("No compatible GPU adapter found")]
    NoAdapter,

    #[error("Device error: {0}")]
    DeviceError(#[from] wgpu::RequestDeviceError),
}

pub type Result<T> = std::result::Result<T, HangmanError>;
