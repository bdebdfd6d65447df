//! Images, resampling, and the resize cache.
//!
//! An [`Image`] is a shared RGBA pixel buffer with a process-unique
//! [`ImageId`]. Drawing an image at a size other than its natural one goes
//! through a [`ResizeCache`], which resamples once per (image, size) and
//! hands back the cached copy afterwards. Entries live as long as the cache.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use ::image::RgbaImage;
use ::image::imageops::{self, FilterType};

use crate::errors::ResampleError;
use crate::log::debug;
use crate::types::Size;

static NEXT_IMAGE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of an [`Image`]; clones share it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(u64);

impl ImageId {
    fn next() -> Self {
        ImageId(NEXT_IMAGE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Shared RGBA pixels with a stable identity
#[derive(Clone, Debug)]
pub struct Image {
    id: ImageId,
    pixels: Arc<RgbaImage>,
}

impl Image {
    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            id: ImageId::next(),
            pixels: Arc::new(pixels),
        }
    }

    /// A transparent image of the given pixel dimensions
    pub fn blank(width: u32, height: u32) -> Self {
        Self::new(RgbaImage::new(width, height))
    }

    pub fn id(&self) -> ImageId {
        self.id
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Natural size in pixels
    pub fn size(&self) -> Size {
        let (w, h) = self.pixels.dimensions();
        Size::new(w as f64, h as f64)
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Image resampling service
pub trait Resample {
    /// Produce a copy of `image` resampled to `size`
    fn resample(&self, image: &Image, size: Size) -> Result<Image, ResampleError>;
}

/// Pixel dimensions for a requested size, rounding to the nearest pixel
fn target_dimensions(size: Size) -> Result<(u32, u32), ResampleError> {
    let w = size.w.round();
    let h = size.h.round();
    if !(w.is_finite() && h.is_finite()) || w > u32::MAX as f64 || h > u32::MAX as f64 {
        return Err(ResampleError::TooLarge { width: size.w, height: size.h });
    }
    // NaN has been ruled out, so this also catches negative sizes
    if w < 1.0 || h < 1.0 {
        return Err(ResampleError::ZeroSize { width: size.w, height: size.h });
    }
    Ok((w as u32, h as u32))
}

/// Resampler backed by `image::imageops::resize`
#[derive(Clone, Copy, Debug)]
pub struct Resampler {
    pub filter: FilterType,
}

impl Default for Resampler {
    fn default() -> Self {
        Self { filter: FilterType::Lanczos3 }
    }
}

impl Resample for Resampler {
    fn resample(&self, image: &Image, size: Size) -> Result<Image, ResampleError> {
        let (w, h) = target_dimensions(size)?;
        Ok(Image::new(imageops::resize(image.pixels(), w, h, self.filter)))
    }
}

/// Cache key: the requested size, compared bit for bit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct SizeKey(u64, u64);

impl From<Size> for SizeKey {
    fn from(size: Size) -> Self {
        SizeKey(size.w.to_bits(), size.h.to_bits())
    }
}

/// Memoized resamples keyed by (image identity, requested size).
///
/// There is no eviction. Two separate caches do not share work, so the same
/// resample may happen once per cache.
#[derive(Debug, Default)]
pub struct ResizeCache {
    entries: HashMap<(ImageId, SizeKey), Image>,
}

impl ResizeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// `image` at `size`, resampling only on the first request.
    ///
    /// An image already at its natural size is returned as is and never
    /// touches the cache.
    pub fn get_or_resample(
        &mut self,
        image: &Image,
        size: Size,
        resampler: &dyn Resample,
    ) -> Result<Image, ResampleError> {
        if image.size() == size {
            return Ok(image.clone());
        }

        let key = (image.id(), SizeKey::from(size));
        if let Some(hit) = self.entries.get(&key) {
            return Ok(hit.clone());
        }

        debug!(image = image.id().raw(), %size, "resize cache miss");
        let resized = resampler.resample(image, size)?;
        self.entries.insert(key, resized.clone());
        Ok(resized)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached resample of `image`
    pub fn forget(&mut self, image: &Image) {
        self.entries.retain(|(id, _), _| *id != image.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Counts calls and returns a blank image of the requested size
    #[derive(Default)]
    struct CountingResampler {
        calls: Cell<usize>,
    }

    impl Resample for CountingResampler {
        fn resample(&self, _image: &Image, size: Size) -> Result<Image, ResampleError> {
            self.calls.set(self.calls.get() + 1);
            let (w, h) = target_dimensions(size)?;
            Ok(Image::blank(w, h))
        }
    }

    #[test]
    fn image_ids_are_unique_and_shared_by_clones() {
        let a = Image::blank(2, 2);
        let b = Image::blank(2, 2);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
        assert_eq!(a.size(), Size::new(2.0, 2.0));
    }

    #[test]
    fn cache_resamples_once_per_size() {
        let resampler = CountingResampler::default();
        let mut cache = ResizeCache::new();
        let image = Image::blank(8, 8);

        let first = cache.get_or_resample(&image, Size::new(4.0, 4.0), &resampler).unwrap();
        let second = cache.get_or_resample(&image, Size::new(4.0, 4.0), &resampler).unwrap();
        assert_eq!(resampler.calls.get(), 1);
        assert_eq!(first, second);
        assert_eq!(first.size(), Size::new(4.0, 4.0));

        cache.get_or_resample(&image, Size::new(2.0, 2.0), &resampler).unwrap();
        assert_eq!(resampler.calls.get(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn cache_is_keyed_per_image() {
        let resampler = CountingResampler::default();
        let mut cache = ResizeCache::new();
        let a = Image::blank(8, 8);
        let b = Image::blank(8, 8);

        cache.get_or_resample(&a, Size::new(4.0, 4.0), &resampler).unwrap();
        cache.get_or_resample(&b, Size::new(4.0, 4.0), &resampler).unwrap();
        assert_eq!(resampler.calls.get(), 2);

        cache.forget(&a);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn natural_size_skips_resampling() {
        let resampler = CountingResampler::default();
        let mut cache = ResizeCache::new();
        let image = Image::blank(8, 6);

        let same = cache.get_or_resample(&image, Size::new(8.0, 6.0), &resampler).unwrap();
        assert_eq!(same, image);
        assert_eq!(resampler.calls.get(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn failed_resample_is_not_cached() {
        let resampler = CountingResampler::default();
        let mut cache = ResizeCache::new();
        let image = Image::blank(8, 8);

        let err = cache
            .get_or_resample(&image, Size::new(0.0, 4.0), &resampler)
            .unwrap_err();
        assert_eq!(err, ResampleError::ZeroSize { width: 0.0, height: 4.0 });
        assert!(cache.is_empty());
    }

    #[test]
    fn target_dimensions_rejects_huge_and_nan() {
        assert!(matches!(
            target_dimensions(Size::new(f64::NAN, 1.0)),
            Err(ResampleError::TooLarge { .. })
        ));
        assert!(matches!(
            target_dimensions(Size::new(1e12, 1.0)),
            Err(ResampleError::TooLarge { .. })
        ));
        assert_eq!(target_dimensions(Size::new(3.4, 2.6)), Ok((3, 3)));
    }

    #[test]
    fn resampler_produces_requested_dimensions() {
        let image = Image::blank(10, 10);
        let out = Resampler::default().resample(&image, Size::new(5.0, 3.0)).unwrap();
        assert_eq!(out.pixels().dimensions(), (5, 3));
        assert_ne!(out.id(), image.id());
    }
}
