//! The crop / resize / re-encode pipeline.
//!
//! One call takes one decoded surface from request to encoded bytes:
//!
//! 1. Clamp the crop (if any) into the image; the crop becomes the working
//!    region
//! 2. Resolve output dimensions against the working region and round them
//! 3. Draw the working region at the output size in a single resample
//! 4. Encode at the requested format and quality
//! 5. Measure size and compression ratio against the original bytes
//!
//! The surface is taken by value and dropped when the call returns, on the
//! error paths as well.

use crate::codec::RasterCodec;
use crate::decode::{fits_output_limit, MAX_OUTPUT_PIXELS};
use crate::error::TransformError;
use crate::transform::crop::clamp_crop;
use crate::transform::resize::{resolve_dimensions, round_dimensions};
use crate::types::{compression_ratio, CropRect, TransformRequest, TransformResult};
use crate::ImageSurface;

/// The geometry a request resolves to for a given surface, before any pixel
/// work is done.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformPlan {
    /// Image-space region to draw: the clamped crop, or the whole surface.
    pub source: CropRect,
    /// Final output width in pixels.
    pub width: u32,
    /// Final output height in pixels.
    pub height: u32,
}

/// Resolve the source region and output size of `request` for a
/// `natural_width x natural_height` image.
///
/// # Errors
///
/// `TransformError::InvalidDimensions` for a zero-sized image,
/// `TransformError::InvalidCrop` for a crop with no area inside the image and
/// `TransformError::OutputTooLarge` when the output exceeds
/// `MAX_OUTPUT_PIXELS`.
pub fn plan_transform(
    natural_width: u32,
    natural_height: u32,
    request: &TransformRequest,
) -> Result<TransformPlan, TransformError> {
    if natural_width == 0 || natural_height == 0 {
        return Err(TransformError::InvalidDimensions {
            width: natural_width as f64,
            height: natural_height as f64,
        });
    }

    let source = match &request.crop {
        Some(crop) => clamp_crop(crop, natural_width, natural_height)?,
        None => CropRect::full(natural_width, natural_height),
    };

    // Working dimensions are the crop's size when cropping
    let resolved = resolve_dimensions(source.width, source.height, request.resize.as_ref())?;
    let (width, height) = round_dimensions(resolved);
    if !fits_output_limit(width, height) {
        return Err(TransformError::OutputTooLarge {
            width,
            height,
            max_pixels: MAX_OUTPUT_PIXELS,
        });
    }

    Ok(TransformPlan {
        source,
        width,
        height,
    })
}

/// Crop, resize and encode `surface` according to `request`.
///
/// `original_byte_size` is the size of the bytes the surface was decoded
/// from, used for the compression ratio.
///
/// # Errors
///
/// `InvalidDimensions`/`InvalidCrop` for bad geometry, `Decode` if the codec
/// fails to draw, and `Encode` if it cannot produce the requested format.
pub fn transform<C: RasterCodec + ?Sized>(
    codec: &C,
    surface: ImageSurface,
    request: &TransformRequest,
    original_byte_size: u64,
) -> Result<TransformResult, TransformError> {
    let (natural_width, natural_height) = surface.dimensions();
    let plan = plan_transform(natural_width, natural_height, request)?;

    log::debug!(
        "transform {}x{} -> {}x{} from {:?} as {}",
        natural_width,
        natural_height,
        plan.width,
        plan.height,
        plan.source,
        request.conversion.format
    );

    let drawn = codec.draw(&surface, &plan.source, plan.width, plan.height)?;
    drop(surface);

    let format = request.conversion.format;
    let encoded_bytes = codec.encode(&drawn, format, request.conversion.quality_fraction())?;
    let byte_size = encoded_bytes.len() as u64;
    let ratio = compression_ratio(original_byte_size, byte_size);

    log::debug!(
        "encoded {} bytes ({} original, ratio {:.3})",
        byte_size,
        original_byte_size,
        ratio
    );

    Ok(TransformResult {
        encoded_bytes,
        width: plan.width,
        height: plan.height,
        byte_size,
        format,
        compression_ratio: ratio,
    })
}

/// Decode `bytes` and run [`transform`] on the result.
///
/// The compression ratio is measured against `bytes.len()`.
pub fn optimize<C: RasterCodec + ?Sized>(
    codec: &C,
    bytes: &[u8],
    request: &TransformRequest,
) -> Result<TransformResult, TransformError> {
    let surface = codec.decode(bytes)?;
    transform(codec, surface, request, bytes.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::DecodeError;
    use crate::encode::EncodeError;
    use crate::types::{ConversionSettings, OutputFormat, ResizeRequest};
    use crate::ImageCodec;
    use std::cell::RefCell;

    fn jpeg(quality: u8) -> ConversionSettings {
        ConversionSettings::new(OutputFormat::Jpeg, quality)
    }

    /// Records draw calls and returns fixed-size output.
    #[derive(Default)]
    struct RecordingCodec {
        draws: RefCell<Vec<(CropRect, u32, u32)>>,
        fail_encode: bool,
    }

    impl RasterCodec for RecordingCodec {
        fn decode(&self, bytes: &[u8]) -> Result<ImageSurface, DecodeError> {
            if bytes.is_empty() {
                return Err(DecodeError::InvalidFormat);
            }
            Ok(ImageSurface::filled(bytes[0] as u32, bytes[0] as u32, [0, 0, 0, 255]))
        }

        fn draw(
            &self,
            _surface: &ImageSurface,
            region: &CropRect,
            width: u32,
            height: u32,
        ) -> Result<ImageSurface, DecodeError> {
            self.draws.borrow_mut().push((*region, width, height));
            Ok(ImageSurface::filled(width, height, [0, 0, 0, 255]))
        }

        fn encode(
            &self,
            surface: &ImageSurface,
            format: OutputFormat,
            _quality: f32,
        ) -> Result<Vec<u8>, EncodeError> {
            if self.fail_encode {
                return Err(EncodeError::UnsupportedFormat(format.to_string()));
            }
            Ok(vec![0u8; surface.natural_width() as usize])
        }
    }

    #[test]
    fn test_plan_no_crop_no_resize() {
        let plan = plan_transform(800, 600, &TransformRequest::convert(jpeg(90))).unwrap();
        assert_eq!(plan.source, CropRect::full(800, 600));
        assert_eq!((plan.width, plan.height), (800, 600));
    }

    #[test]
    fn test_plan_crop_then_resize_uses_cropped_size() {
        let request = TransformRequest::convert(jpeg(90))
            .with_crop(CropRect::new(0.0, 0.0, 500.0, 500.0))
            .with_resize(ResizeRequest::width_only(100));
        let plan = plan_transform(2000, 1000, &request).unwrap();
        assert_eq!((plan.width, plan.height), (100, 100));
    }

    #[test]
    fn test_plan_end_to_end_example() {
        let request = TransformRequest::convert(jpeg(90))
            .with_crop(CropRect::new(100.0, 100.0, 400.0, 300.0))
            .with_resize(ResizeRequest::width_only(200));
        let plan = plan_transform(800, 600, &request).unwrap();
        assert_eq!((plan.width, plan.height), (200, 150));
        assert_eq!(plan.source, CropRect::new(100.0, 100.0, 400.0, 300.0));
    }

    #[test]
    fn test_plan_fractional_crop_rounded_once() {
        let request = TransformRequest::convert(jpeg(90))
            .with_crop(CropRect::new(0.0, 0.0, 100.6, 50.4));
        let plan = plan_transform(200, 200, &request).unwrap();
        assert_eq!((plan.width, plan.height), (101, 50));
    }

    #[test]
    fn test_plan_tiny_output_at_least_one_pixel() {
        let request = TransformRequest::convert(jpeg(90))
            .with_resize(ResizeRequest::width_only(1));
        let plan = plan_transform(1000, 10, &request).unwrap();
        assert_eq!((plan.width, plan.height), (1, 1));
    }

    #[test]
    fn test_plan_oversized_output_rejected() {
        // 50000 wide on a 4:3 image is 50000x37500
        let request = TransformRequest::convert(jpeg(90))
            .with_resize(ResizeRequest::width_only(50_000));
        assert!(matches!(
            plan_transform(800, 600, &request),
            Err(TransformError::OutputTooLarge {
                width: 50_000,
                height: 37_500,
                ..
            })
        ));

        let request = TransformRequest::convert(jpeg(90))
            .with_resize(ResizeRequest::exact(u32::MAX, u32::MAX));
        assert!(matches!(
            plan_transform(4, 4, &request),
            Err(TransformError::OutputTooLarge { .. })
        ));

        // The limit itself is allowed
        let request = TransformRequest::convert(jpeg(90))
            .with_resize(ResizeRequest::exact(16_384, 16_384));
        assert!(plan_transform(4, 4, &request).is_ok());
    }

    #[test]
    fn test_transform_oversized_never_draws() {
        let codec = RecordingCodec::default();
        let request = TransformRequest::convert(jpeg(90))
            .with_resize(ResizeRequest::exact(u32::MAX, u32::MAX));
        let result = transform(&codec, ImageSurface::filled(4, 4, [0, 0, 0, 255]), &request, 100);

        assert!(matches!(result, Err(TransformError::OutputTooLarge { .. })));
        assert!(codec.draws.borrow().is_empty());
    }

    #[test]
    fn test_plan_zero_crop_rejected() {
        let request = TransformRequest::convert(jpeg(90))
            .with_crop(CropRect::new(10.0, 10.0, 0.0, 0.0));
        assert!(matches!(
            plan_transform(100, 100, &request),
            Err(TransformError::InvalidCrop { .. })
        ));
    }

    #[test]
    fn test_plan_zero_image_rejected() {
        assert!(matches!(
            plan_transform(0, 100, &TransformRequest::default()),
            Err(TransformError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_single_draw_with_crop_region() {
        let codec = RecordingCodec::default();
        let request = TransformRequest::convert(jpeg(90))
            .with_crop(CropRect::new(10.0, 20.0, 60.0, 40.0))
            .with_resize(ResizeRequest::exact(30, 30));
        let surface = ImageSurface::filled(100, 100, [0, 0, 0, 255]);

        let result = transform(&codec, surface, &request, 1000).unwrap();

        let draws = codec.draws.borrow();
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0], (CropRect::new(10.0, 20.0, 60.0, 40.0), 30, 30));
        assert_eq!((result.width, result.height), (30, 30));
        assert_eq!(result.byte_size, 30);
        assert_eq!(result.format, OutputFormat::Jpeg);
        assert!((result.compression_ratio - 0.97).abs() < 1e-12);
    }

    #[test]
    fn test_encode_failure_is_terminal() {
        let codec = RecordingCodec {
            fail_encode: true,
            ..Default::default()
        };
        let surface = ImageSurface::filled(10, 10, [0, 0, 0, 255]);
        let request = TransformRequest::convert(ConversionSettings::new(OutputFormat::Avif, 50));
        assert!(matches!(
            transform(&codec, surface, &request, 100),
            Err(TransformError::Encode(EncodeError::UnsupportedFormat(_)))
        ));
    }

    #[test]
    fn test_optimize_decode_failure() {
        let codec = RecordingCodec::default();
        assert!(matches!(
            optimize(&codec, &[], &TransformRequest::default()),
            Err(TransformError::Decode(DecodeError::InvalidFormat))
        ));
    }

    #[test]
    fn test_optimize_uses_input_length() {
        let codec = RecordingCodec::default();
        // Decodes to 40x40, encodes to 40 bytes, input is 80 bytes
        let bytes = vec![40u8; 80];
        let result = optimize(&codec, &bytes, &TransformRequest::default()).unwrap();
        assert_eq!(result.compression_ratio, 0.5);
    }

    #[test]
    fn test_larger_output_ratio_is_zero() {
        let codec = RecordingCodec::default();
        let surface = ImageSurface::filled(50, 50, [0, 0, 0, 255]);
        let result = transform(&codec, surface, &TransformRequest::default(), 10).unwrap();
        assert_eq!(result.compression_ratio, 0.0);
    }

    #[test]
    fn test_with_image_codec() {
        let codec = ImageCodec::new();
        let surface = ImageSurface::filled(64, 48, [200, 10, 10, 255]);
        let request = TransformRequest::convert(ConversionSettings::new(OutputFormat::Png, 80))
            .with_resize(ResizeRequest::fit(32, 32));

        let result = transform(&codec, surface, &request, 1_000_000).unwrap();
        assert_eq!((result.width, result.height), (32, 24));
        assert_eq!(&result.encoded_bytes[1..4], b"PNG");
        assert!(result.compression_ratio > 0.9);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
