const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const TIFF_LITTLE_ENDIAN: [u8; 4] = [b'I', b'I', 0x2A, 0x00];
const TIFF_BIG_ENDIAN: [u8; 4] = [b'M', b'M', 0x00, 0x2A];

/// Container formats a frame image can be supplied in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFormat {
    Png,
    Tiff,
}

impl FrameFormat {
    /// Identifies the container from its leading magic bytes.
    pub fn detect(data: &[u8]) -> Option<Self> {
        if data.starts_with(&PNG_SIGNATURE) {
            Some(FrameFormat::Png)
        } else if data.starts_with(&TIFF_LITTLE_ENDIAN) || data.starts_with(&TIFF_BIG_ENDIAN) {
            Some(FrameFormat::Tiff)
        } else {
            None
        }
    }
}
