// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image decoder — turns encoded JPEG/PNG bytes into an interleaved 8-bit
// raster. The format is sniffed from the data, never taken from a filename.

use std::io::Cursor;

use grayscope_core::error::{GrayscopeError, Result};
use grayscope_core::{MAX_PIXELS, PipelineConfig, RasterImage, SourceFormat};
use image::{DynamicImage, ImageError, ImageFormat, ImageReader, Limits};
use tracing::{debug, instrument};

/// Decodes in-memory image bytes under the limits of a [`PipelineConfig`].
#[derive(Debug, Clone, Default)]
pub struct ImageDecoder {
    config: PipelineConfig,
}

impl ImageDecoder {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Decode `data` into a raster. See [`ImageDecoder::decode_with_format`].
    pub fn decode(&self, data: &[u8]) -> Result<RasterImage> {
        self.decode_with_format(data).map(|(raster, _)| raster)
    }

    /// Decode `data`, also reporting which encoding was detected.
    ///
    /// Channel layout is kept as stored in the file (gray, gray + alpha, RGB,
    /// RGBA); higher bit depths are reduced to 8 bits per sample.
    #[instrument(skip(self, data), fields(data_len = data.len()))]
    pub fn decode_with_format(&self, data: &[u8]) -> Result<(RasterImage, SourceFormat)> {
        if data.is_empty() {
            return Err(GrayscopeError::EmptyInput);
        }
        if data.len() > self.config.max_input_bytes {
            return Err(GrayscopeError::InputTooLarge {
                size: data.len(),
                limit: self.config.max_input_bytes,
            });
        }

        let format = image::guess_format(data).map_err(|_| GrayscopeError::UnrecognizedFormat)?;
        let source_format = SourceFormat::from(format);

        // Header-only read so oversized images are refused before allocation.
        let (width, height) = ImageReader::with_format(Cursor::new(data), format)
            .into_dimensions()
            .map_err(|err| decode_error(err, &source_format))?;
        if width > self.config.max_image_width
            || height > self.config.max_image_height
            || width as u64 * height as u64 > MAX_PIXELS
        {
            return Err(GrayscopeError::DimensionsTooLarge {
                width,
                height,
                max_width: self.config.max_image_width,
                max_height: self.config.max_image_height,
            });
        }

        let mut reader = ImageReader::with_format(Cursor::new(data), format);
        let mut limits = Limits::default();
        limits.max_image_width = Some(self.config.max_image_width);
        limits.max_image_height = Some(self.config.max_image_height);
        reader.limits(limits);

        let image = reader
            .decode()
            .map_err(|err| decode_error(err, &source_format))?;
        let raster = into_raster(image)?;

        debug!(
            format = %source_format,
            width = raster.width(),
            height = raster.height(),
            channels = raster.channels(),
            "Image decoded from bytes"
        );
        Ok((raster, source_format))
    }
}

/// Decode `data` with the default limits.
pub fn decode(data: &[u8]) -> Result<RasterImage> {
    ImageDecoder::default().decode(data)
}

/// Map an `image` crate failure onto the decode error variants.
fn decode_error(err: ImageError, format: &SourceFormat) -> GrayscopeError {
    match err {
        ImageError::Unsupported(_) => GrayscopeError::UnsupportedFormat(format.to_string()),
        other => GrayscopeError::Decode {
            format: format.to_string(),
            reason: other.to_string(),
        },
    }
}

/// Flatten a `DynamicImage` into 8-bit interleaved samples, keeping its
/// channel layout.
fn into_raster(image: DynamicImage) -> Result<RasterImage> {
    let (width, height) = (image.width(), image.height());
    let channels = image.color().channel_count();
    let data = match channels {
        1 => image.into_luma8().into_raw(),
        2 => image.into_luma_alpha8().into_raw(),
        3 => image.into_rgb8().into_raw(),
        4 => image.into_rgba8().into_raw(),
        other => return Err(GrayscopeError::InvalidChannelCount(other)),
    };
    RasterImage::new(width, height, channels, data)
}

/// Whether `data` starts with a signature of one of the supported encodings.
pub fn is_supported_format(data: &[u8]) -> bool {
    matches!(
        image::guess_format(data),
        Ok(ImageFormat::Png) | Ok(ImageFormat::Jpeg)
    )
}
