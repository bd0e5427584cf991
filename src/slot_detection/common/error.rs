use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to decode frame image: {0}")]
    DecodeError(String),

    #[error("Frame image has no alpha channel: {0}")]
    MissingAlpha(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Coordinate ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DetectionError>;
