//! Image pipeline - decode, downscale, filter and encode uploads
//!
//! The convolution filters use the classic Pillow kernels: weights are summed
//! per colour channel, divided by `scale`, shifted by `offset` and clamped.
//! Alpha is carried over untouched.

use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};

use crate::domain::{errors::DomainError, value_objects::FilterKind};

/// Bounding box every stored image is shrunk to fit
pub const THUMBNAIL_BOUNDS: (u32, u32) = (500, 500);

/// Square convolution kernel with Pillow-style scale and offset
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    pub size: u32,
    pub weights: &'static [i32],
    pub scale: i32,
    pub offset: i32,
}

#[rustfmt::skip]
const BLUR: Kernel = Kernel {
    size: 5,
    weights: &[
        1, 1, 1, 1, 1,
        1, 0, 0, 0, 1,
        1, 0, 0, 0, 1,
        1, 0, 0, 0, 1,
        1, 1, 1, 1, 1,
    ],
    scale: 16,
    offset: 0,
};

#[rustfmt::skip]
const CONTOUR: Kernel = Kernel {
    size: 3,
    weights: &[
        -1, -1, -1,
        -1,  8, -1,
        -1, -1, -1,
    ],
    scale: 1,
    offset: 255,
};

#[rustfmt::skip]
const DETAIL: Kernel = Kernel {
    size: 3,
    weights: &[
         0, -1,  0,
        -1, 10, -1,
         0, -1,  0,
    ],
    scale: 6,
    offset: 0,
};

#[rustfmt::skip]
const EDGE_ENHANCE: Kernel = Kernel {
    size: 3,
    weights: &[
        -1, -1, -1,
        -1, 10, -1,
        -1, -1, -1,
    ],
    scale: 2,
    offset: 0,
};

#[rustfmt::skip]
const EMBOSS: Kernel = Kernel {
    size: 3,
    weights: &[
        -1, 0, 0,
         0, 1, 0,
         0, 0, 0,
    ],
    scale: 1,
    offset: 128,
};

#[rustfmt::skip]
const SHARPEN: Kernel = Kernel {
    size: 3,
    weights: &[
        -2, -2, -2,
        -2, 32, -2,
        -2, -2, -2,
    ],
    scale: 16,
    offset: 0,
};

#[rustfmt::skip]
const SMOOTH: Kernel = Kernel {
    size: 3,
    weights: &[
        1, 1, 1,
        1, 5, 1,
        1, 1, 1,
    ],
    scale: 13,
    offset: 0,
};

impl FilterKind {
    /// Convolution kernel behind this filter, `None` for colour conversions
    pub fn kernel(&self) -> Option<&'static Kernel> {
        match self {
            FilterKind::Blur => Some(&BLUR),
            FilterKind::Contour => Some(&CONTOUR),
            FilterKind::Detail => Some(&DETAIL),
            FilterKind::EdgeEnhance => Some(&EDGE_ENHANCE),
            FilterKind::Emboss => Some(&EMBOSS),
            FilterKind::Sharpen => Some(&SHARPEN),
            FilterKind::Smooth => Some(&SMOOTH),
            FilterKind::Greyscale => None,
        }
    }
}

/// An upload that decoded successfully
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub image: DynamicImage,
    /// Format the upload was sniffed as
    pub source_format: ImageFormat,
}

impl DecodedImage {
    /// Format the filtered result is written in. PNG and JPEG are kept,
    /// everything else is re-encoded as PNG.
    pub fn output_format(&self) -> ImageFormat {
        match self.source_format {
            ImageFormat::Jpeg => ImageFormat::Jpeg,
            _ => ImageFormat::Png,
        }
    }

    /// File extension matching [`Self::output_format`]
    pub fn extension(&self) -> &'static str {
        extension_for(self.output_format())
    }
}

/// Encoded result of the pipeline
#[derive(Debug, Clone)]
pub struct ProcessedImage {
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

/// Sniff and decode uploaded bytes
pub fn decode_upload(bytes: &[u8]) -> Result<DecodedImage, DomainError> {
    if bytes.is_empty() {
        return Err(DomainError::Validation("Uploaded file is empty".to_string()));
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DomainError::UnsupportedImage(e.to_string()))?;

    let source_format = reader.format().ok_or_else(|| {
        DomainError::UnsupportedImage("File is not a recognised image format".to_string())
    })?;

    let image = reader.decode().map_err(|e| {
        DomainError::UnsupportedImage(format!("Could not decode {source_format:?} image: {e}"))
    })?;

    Ok(DecodedImage {
        image,
        source_format,
    })
}

/// Shrink to [`THUMBNAIL_BOUNDS`], apply the filter and encode
pub fn render_filtered(
    decoded: &DecodedImage,
    filter: FilterKind,
) -> Result<ProcessedImage, DomainError> {
    let (max_w, max_h) = THUMBNAIL_BOUNDS;
    let (width, height) = fit_within(decoded.image.width(), decoded.image.height(), max_w, max_h);

    let resized = if (width, height) == (decoded.image.width(), decoded.image.height()) {
        decoded.image.clone()
    } else {
        decoded.image.resize_exact(width, height, FilterType::Lanczos3)
    };

    let filtered = apply_filter(&resized, filter);
    let format = decoded.output_format();
    let bytes = encode(&filtered, format)?;

    Ok(ProcessedImage {
        bytes,
        format,
        width: filtered.width(),
        height: filtered.height(),
    })
}

/// Dimensions that fit `width`×`height` inside `max_w`×`max_h` with the
/// aspect ratio kept. Never upscales; each side stays at least 1 pixel.
pub fn fit_within(width: u32, height: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    if width <= max_w && height <= max_h {
        return (width, height);
    }

    let ratio = f64::min(max_w as f64 / width as f64, max_h as f64 / height as f64);
    let fit = |side: u32, max: u32| ((side as f64 * ratio).round() as u32).clamp(1, max.max(1));

    (fit(width, max_w), fit(height, max_h))
}

/// Apply a filter to an image
pub fn apply_filter(image: &DynamicImage, filter: FilterKind) -> DynamicImage {
    match filter.kernel() {
        Some(kernel) => DynamicImage::ImageRgba8(convolve(&image.to_rgba8(), kernel)),
        None => image.grayscale(),
    }
}

/// Convolve the colour channels. Samples past the border replicate the
/// nearest edge pixel.
pub fn convolve(src: &RgbaImage, kernel: &Kernel) -> RgbaImage {
    let (width, height) = src.dimensions();
    let radius = (kernel.size / 2) as i64;
    let max_x = width as i64 - 1;
    let max_y = height as i64 - 1;
    let scale = kernel.scale as f32;
    let offset = kernel.offset as f32;

    let mut out = RgbaImage::new(width, height);
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let mut acc = [0i32; 3];

        for ky in 0..kernel.size {
            for kx in 0..kernel.size {
                let weight = kernel.weights[(ky * kernel.size + kx) as usize];
                if weight == 0 {
                    continue;
                }
                let sx = (x as i64 + kx as i64 - radius).clamp(0, max_x) as u32;
                let sy = (y as i64 + ky as i64 - radius).clamp(0, max_y) as u32;
                let sample = src.get_pixel(sx, sy);
                for (c, total) in acc.iter_mut().enumerate() {
                    *total += weight * sample[c] as i32;
                }
            }
        }

        let channel = |total: i32| (total as f32 / scale + offset).round().clamp(0.0, 255.0) as u8;
        let alpha = src.get_pixel(x, y)[3];
        *pixel = image::Rgba([channel(acc[0]), channel(acc[1]), channel(acc[2]), alpha]);
    }

    out
}

fn encode(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, DomainError> {
    // JPEG has no alpha channel
    let converted;
    let image = if format == ImageFormat::Jpeg && image.color().has_alpha() {
        converted = if image.color().has_color() {
            DynamicImage::ImageRgb8(image.to_rgb8())
        } else {
            DynamicImage::ImageLuma8(image.to_luma8())
        };
        &converted
    } else {
        image
    };

    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, format)
        .map_err(|e| DomainError::Storage(format!("Failed to encode {format:?} image: {e}")))?;

    Ok(buffer.into_inner())
}

fn extension_for(format: ImageFormat) -> &'static str {
    format.extensions_str().first().copied().unwrap_or("img")
}
