// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: decoded rasters, grayscale buffers, histograms, and the
// tone filter selector.

use std::fmt;
use std::str::FromStr;

use image::{GrayImage, ImageFormat};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{GrayscopeError, Result};

/// Number of distinct 8-bit intensity values (and histogram bins).
pub const INTENSITY_LEVELS: usize = 256;

/// Check that `len` matches `width * height * channels` and that neither
/// dimension is zero.
fn check_layout(width: u32, height: u32, channels: u8, len: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(GrayscopeError::InvalidRaster(format!(
            "dimensions must be positive, got {width}x{height}"
        )));
    }
    let expected = width as usize * height as usize * channels as usize;
    if len != expected {
        return Err(GrayscopeError::InvalidRaster(format!(
            "{width}x{height}x{channels} needs {expected} samples, got {len}"
        )));
    }
    Ok(())
}

// -- RasterImage --------------------------------------------------------------

/// A decoded image as interleaved 8-bit samples, row-major.
///
/// Channel layouts follow the decoder: 1 = gray, 2 = gray + alpha, 3 = RGB,
/// 4 = RGBA. Only 1, 3 and 4 can be converted to grayscale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl RasterImage {
    /// Wrap a sample buffer, checking that its length matches the shape.
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self> {
        if !(1..=4).contains(&channels) {
            return Err(GrayscopeError::InvalidChannelCount(channels));
        }
        check_layout(width, height, channels, data.len())?;
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Samples per pixel.
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Number of pixels (not samples).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the last channel is alpha (gray + alpha or RGBA).
    pub fn has_alpha(&self) -> bool {
        matches!(self.channels, 2 | 4)
    }

    /// Borrow the interleaved samples.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over pixels as channel slices, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.channels as usize)
    }
}

// -- GrayscaleImage -----------------------------------------------------------

/// A single-channel 8-bit luminance image.
///
/// Immutable once built: filters produce a new `GrayscaleImage` rather than
/// editing one in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayscaleImage {
    inner: GrayImage,
}

impl GrayscaleImage {
    /// Wrap a luminance buffer, checking that its length is `width * height`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        check_layout(width, height, 1, data.len())?;
        let inner = GrayImage::from_raw(width, height, data).ok_or_else(|| {
            GrayscopeError::InvalidRaster(format!("buffer too small for {width}x{height}"))
        })?;
        Ok(Self { inner })
    }

    /// Adopt an `image::GrayImage`. Empty images are rejected.
    pub fn from_gray_image(inner: GrayImage) -> Result<Self> {
        check_layout(inner.width(), inner.height(), 1, inner.as_raw().len())?;
        Ok(Self { inner })
    }

    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    pub fn pixel_count(&self) -> usize {
        self.inner.as_raw().len()
    }

    /// Sample at `(x, y)`, or `None` outside the image.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        self.inner.get_pixel_checked(x, y).map(|p| p.0[0])
    }

    /// Borrow the row-major samples.
    pub fn as_raw(&self) -> &[u8] {
        self.inner.as_raw()
    }

    /// Borrow as an `image::GrayImage` for interop with `image`/`imageproc`.
    pub fn as_gray_image(&self) -> &GrayImage {
        &self.inner
    }

    /// Build a same-shaped image by mapping every sample through `f`.
    pub fn map_samples(&self, mut f: impl FnMut(u8) -> u8) -> Self {
        let mut inner = self.inner.clone();
        for sample in inner.iter_mut() {
            *sample = f(*sample);
        }
        Self { inner }
    }
}

// -- Histogram ----------------------------------------------------------------

/// Frequency of each 8-bit intensity value across an image.
///
/// `counts()[i]` is the number of samples equal to `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; INTENSITY_LEVELS],
}

impl Histogram {
    pub fn from_counts(counts: [u64; INTENSITY_LEVELS]) -> Self {
        Self { counts }
    }

    pub fn counts(&self) -> &[u64; INTENSITY_LEVELS] {
        &self.counts
    }

    pub fn count(&self, value: u8) -> u64 {
        self.counts[value as usize]
    }

    /// Sum of all bins (the pixel count of the source image).
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest single bin, used to scale the y-axis of a plot.
    pub fn peak(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Mean intensity, or `None` for an empty histogram.
    pub fn mean(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let weighted: u64 = self
            .counts
            .iter()
            .enumerate()
            .map(|(value, &count)| value as u64 * count)
            .sum();
        Some(weighted as f64 / total as f64)
    }

    /// Running sum: entry `i` counts the samples with value `<= i`.
    pub fn cumulative(&self) -> [u64; INTENSITY_LEVELS] {
        let mut out = [0u64; INTENSITY_LEVELS];
        let mut running = 0u64;
        for (slot, &count) in out.iter_mut().zip(self.counts.iter()) {
            running += count;
            *slot = running;
        }
        out
    }

    /// Smallest intensity with a non-zero count.
    pub fn min_value(&self) -> Option<u8> {
        self.counts.iter().position(|&c| c > 0).map(|i| i as u8)
    }

    /// Largest intensity with a non-zero count.
    pub fn max_value(&self) -> Option<u8> {
        self.counts.iter().rposition(|&c| c > 0).map(|i| i as u8)
    }
}

impl Serialize for Histogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Histogram", 6)?;
        state.serialize_field("counts", &self.counts[..])?;
        state.serialize_field("total", &self.total())?;
        state.serialize_field("peak", &self.peak())?;
        state.serialize_field("mean", &self.mean())?;
        state.serialize_field("min", &self.min_value())?;
        state.serialize_field("max", &self.max_value())?;
        state.end()
    }
}

// -- Filters ------------------------------------------------------------------

/// Which tone filter to apply after grayscale conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Skip filtering.
    #[default]
    None,
    /// Histogram equalization.
    Equalize,
    /// Contrast stretch around the mean with a fixed 1.5 gain.
    Enhance,
}

impl FilterKind {
    pub const ALL: [FilterKind; 3] = [FilterKind::None, FilterKind::Equalize, FilterKind::Enhance];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::None => "none",
            FilterKind::Equalize => "equalize",
            FilterKind::Enhance => "enhance",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, FilterKind::None)
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(FilterKind::None),
            "equalize" | "equalise" => Ok(FilterKind::Equalize),
            "enhance" => Ok(FilterKind::Enhance),
            other => Err(format!(
                "unknown filter '{other}' (expected none, equalize or enhance)"
            )),
        }
    }
}

/// Output of a tone filter: a fresh grayscale buffer and the filter that made it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredImage {
    pub kind: FilterKind,
    pub image: GrayscaleImage,
}

// -- Source format ------------------------------------------------------------

/// Encoding detected from the input bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceFormat {
    Png,
    Jpeg,
    /// Any other format the decoder recognized.
    Other(String),
}

impl From<ImageFormat> for SourceFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png => SourceFormat::Png,
            ImageFormat::Jpeg => SourceFormat::Jpeg,
            other => SourceFormat::Other(format!("{other:?}")),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Png => f.write_str("PNG"),
            SourceFormat::Jpeg => f.write_str("JPEG"),
            SourceFormat::Other(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raster_rejects_length_mismatch() {
        let err = RasterImage::new(2, 2, 3, vec![0; 11]).unwrap_err();
        assert!(matches!(err, GrayscopeError::InvalidRaster(_)));
    }

    #[test]
    fn raster_rejects_zero_dimensions() {
        assert!(RasterImage::new(0, 4, 1, vec![]).is_err());
        assert!(GrayscaleImage::new(4, 0, vec![]).is_err());
    }

    #[test]
    fn raster_rejects_five_channels() {
        let err = RasterImage::new(1, 1, 5, vec![0; 5]).unwrap_err();
        assert!(matches!(err, GrayscopeError::InvalidChannelCount(5)));
    }

    #[test]
    fn raster_pixels_are_grouped_by_channel() {
        let raster = RasterImage::new(2, 1, 4, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let pixels: Vec<&[u8]> = raster.pixels().collect();
        assert_eq!(pixels, vec![&[1u8, 2, 3, 4][..], &[5u8, 6, 7, 8][..]]);
        assert!(raster.has_alpha());
        assert_eq!(raster.pixel_count(), 2);
    }

    #[test]
    fn grayscale_get_is_row_major() {
        let img = GrayscaleImage::new(2, 2, vec![10, 20, 30, 40]).unwrap();
        assert_eq!(img.get(1, 0), Some(20));
        assert_eq!(img.get(0, 1), Some(30));
        assert_eq!(img.get(2, 0), None);
    }

    #[test]
    fn map_samples_leaves_source_untouched() {
        let img = GrayscaleImage::new(3, 1, vec![1, 2, 3]).unwrap();
        let doubled = img.map_samples(|v| v * 2);
        assert_eq!(doubled.as_raw(), &[2, 4, 6]);
        assert_eq!(img.as_raw(), &[1, 2, 3]);
    }

    #[test]
    fn histogram_summary_values() {
        let mut counts = [0u64; INTENSITY_LEVELS];
        counts[0] = 2;
        counts[255] = 2;
        let hist = Histogram::from_counts(counts);

        assert_eq!(hist.total(), 4);
        assert_eq!(hist.peak(), 2);
        assert_eq!(hist.min_value(), Some(0));
        assert_eq!(hist.max_value(), Some(255));
        assert_eq!(hist.mean(), Some(127.5));
        assert_eq!(hist.cumulative()[0], 2);
        assert_eq!(hist.cumulative()[254], 2);
        assert_eq!(hist.cumulative()[255], 4);
    }

    #[test]
    fn empty_histogram_has_no_mean() {
        let hist = Histogram::from_counts([0; INTENSITY_LEVELS]);
        assert_eq!(hist.mean(), None);
        assert_eq!(hist.min_value(), None);
    }

    #[test]
    fn histogram_serializes_all_bins() {
        let mut counts = [0u64; INTENSITY_LEVELS];
        counts[7] = 3;
        let json = serde_json::to_value(Histogram::from_counts(counts)).unwrap();
        assert_eq!(json["counts"].as_array().unwrap().len(), 256);
        assert_eq!(json["counts"][7], 3);
        assert_eq!(json["total"], 3);
    }

    #[test]
    fn filter_kind_parses_and_displays() {
        for kind in FilterKind::ALL {
            assert_eq!(kind.to_string().parse::<FilterKind>().unwrap(), kind);
        }
        assert_eq!("Equalize".parse::<FilterKind>().unwrap(), FilterKind::Equalize);
        assert!("sharpen".parse::<FilterKind>().is_err());
        assert_eq!(FilterKind::default(), FilterKind::None);
    }

    #[test]
    fn filter_kind_serde_is_lowercase() {
        let json = serde_json::to_string(&FilterKind::Enhance).unwrap();
        assert_eq!(json, "\"enhance\"");
    }
}
