#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::slot_detection::common::error::DetectionError;
    use crate::slot_detection::decoders::{
        AutoFrameReader, FrameFormat, FrameImageReader, PngFrameReader, TiffFrameReader,
    };
    use crate::slot_detection::test_support::FrameCanvas;

    fn encode_png(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
            writer.finish().unwrap();
        }
        out
    }

    fn encode_tiff_rgba(width: u32, height: u32, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = tiff::encoder::TiffEncoder::new(Cursor::new(&mut out)).unwrap();
            encoder
                .write_image::<tiff::encoder::colortype::RGBA8>(width, height, data)
                .unwrap();
        }
        out
    }

    fn encode_tiff_rgb(width: u32, height: u32, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = tiff::encoder::TiffEncoder::new(Cursor::new(&mut out)).unwrap();
            encoder
                .write_image::<tiff::encoder::colortype::RGB8>(width, height, data)
                .unwrap();
        }
        out
    }

    #[test]
    fn test_png_rgba_round_trips_pixels() {
        let canvas = FrameCanvas::opaque(12, 8).hole(2, 2, 4, 3);
        let encoded = encode_png(12, 8, png::ColorType::Rgba, &canvas.data);

        let frame = PngFrameReader.read_frame(&encoded).unwrap();

        assert_eq!((frame.width, frame.height), (12, 8));
        assert_eq!(frame.data, canvas.data);
    }

    #[test]
    fn test_png_gray_alpha_is_expanded() {
        let encoded = encode_png(2, 1, png::ColorType::GrayscaleAlpha, &[10, 0, 200, 255]);

        let frame = PngFrameReader.read_frame(&encoded).unwrap();

        assert_eq!(frame.data, vec![10, 10, 10, 0, 200, 200, 200, 255]);
    }

    #[test]
    fn test_png_without_alpha_is_rejected() {
        let encoded = encode_png(2, 2, png::ColorType::Rgb, &[0u8; 12]);

        let result = PngFrameReader.read_frame(&encoded);

        assert!(matches!(result, Err(DetectionError::MissingAlpha(_))));
    }

    #[test]
    fn test_truncated_png_is_decode_error() {
        let canvas = FrameCanvas::opaque(16, 16);
        let encoded = encode_png(16, 16, png::ColorType::Rgba, &canvas.data);

        let result = PngFrameReader.read_frame(&encoded[..40]);

        assert!(matches!(result, Err(DetectionError::DecodeError(_))));
    }

    #[test]
    fn test_tiff_rgba_is_read() {
        let canvas = FrameCanvas::opaque(6, 4).hole(1, 1, 2, 2);
        let encoded = encode_tiff_rgba(6, 4, &canvas.data);

        let frame = TiffFrameReader.read_frame(&encoded).unwrap();

        assert_eq!((frame.width, frame.height), (6, 4));
        assert_eq!(frame.data, canvas.data);
    }

    #[test]
    fn test_tiff_without_alpha_is_rejected() {
        let encoded = encode_tiff_rgb(3, 3, &[128u8; 27]);

        let result = TiffFrameReader.read_frame(&encoded);

        assert!(matches!(result, Err(DetectionError::MissingAlpha(_))));
    }

    #[test]
    fn test_format_detection() {
        let canvas = FrameCanvas::opaque(2, 2);
        let png_bytes = encode_png(2, 2, png::ColorType::Rgba, &canvas.data);
        let tiff_bytes = encode_tiff_rgba(2, 2, &canvas.data);

        assert_eq!(FrameFormat::detect(&png_bytes), Some(FrameFormat::Png));
        assert_eq!(FrameFormat::detect(&tiff_bytes), Some(FrameFormat::Tiff));
        assert_eq!(FrameFormat::detect(b"GIF89a"), None);
        assert_eq!(FrameFormat::detect(&[]), None);
    }

    #[test]
    fn test_auto_reader_dispatches() {
        let canvas = FrameCanvas::opaque(5, 5).hole(0, 0, 2, 2);
        let png_bytes = encode_png(5, 5, png::ColorType::Rgba, &canvas.data);
        let tiff_bytes = encode_tiff_rgba(5, 5, &canvas.data);

        assert_eq!(AutoFrameReader.read_frame(&png_bytes).unwrap().data, canvas.data);
        assert_eq!(AutoFrameReader.read_frame(&tiff_bytes).unwrap().data, canvas.data);
        assert!(matches!(
            AutoFrameReader.read_frame(b"not an image"),
            Err(DetectionError::UnsupportedFormat(_))
        ));
    }
}
