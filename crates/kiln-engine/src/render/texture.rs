use std::path::Path;

use anyhow::{Context, Result};

/// Texels are uploaded and sampled unconverted, matching the linear swapchain.
const TEXTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Decoded RGBA8 image, independent of any GPU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    /// Tightly packed rows in file order; row 0 is sampled at v = 0.
    pub rgba: Vec<u8>,
}

impl TextureData {
    /// 1x1 opaque white; sampling it leaves vertex colors unchanged.
    pub fn white() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![255; 4],
        }
    }

    /// Decodes an encoded image (PNG, JPEG, BMP) from memory.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes).context("failed to decode image")?;
        Self::from_image(image)
    }

    /// Reads and decodes an image file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        Self::from_image(image)
    }

    /// Fails if either side exceeds `max_dimension`, the device's 2D texture limit.
    pub fn ensure_fits(&self, max_dimension: u32) -> Result<()> {
        anyhow::ensure!(
            self.width <= max_dimension && self.height <= max_dimension,
            "image is {}x{}, larger than the {max_dimension} texel limit",
            self.width,
            self.height
        );
        Ok(())
    }

    /// Like [`open`](Self::open), but logs the failure and falls back to [`white`](Self::white).
    ///
    /// An image larger than `max_dimension` on either side counts as a failure.
    pub fn open_or_white(path: impl AsRef<Path>, max_dimension: u32) -> Self {
        let loaded = Self::open(path).and_then(|data| {
            data.ensure_fits(max_dimension)?;
            Ok(data)
        });
        match loaded {
            Ok(data) => data,
            Err(e) => {
                log::error!("Failed to load texture: {e:#}");
                Self::white()
            }
        }
    }

    fn from_image(image: image::DynamicImage) -> Result<Self> {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        anyhow::ensure!(width > 0 && height > 0, "image has zero size");
        Ok(Self {
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }
}

/// Sampled 2D texture with its view and sampler.
///
/// Addressing repeats in both directions; filtering is linear.
pub struct Texture {
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    width: u32,
    height: u32,
}

impl Texture {
    pub fn from_data(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        data: &TextureData,
    ) -> Self {
        let size = wgpu::Extent3d {
            width: data.width,
            height: data.height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            // Single level; the GL version built mipmaps and sampled them
            // LINEAR_MIPMAP_NEAREST.
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: TEXTURE_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &data.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * data.width),
                rows_per_image: Some(data.height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        log::debug!("created texture '{label}' ({}x{})", data.width, data.height);

        Self {
            view,
            sampler,
            width: data.width,
            height: data.height,
        }
    }

    /// Loads `path`, falling back to a white texture if it cannot be read or the device
    /// cannot hold it.
    pub fn from_path(device: &wgpu::Device, queue: &wgpu::Queue, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let data = TextureData::open_or_white(path, device.limits().max_texture_dimension_2d);
        Self::from_data(device, queue, &path.display().to_string(), &data)
    }

    pub fn white(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        Self::from_data(device, queue, "kiln white texture", &TextureData::white())
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    #[inline]
    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_png(image: image::RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(image)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn decodes_png_to_rgba() {
        let mut img = image::RgbaImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, image::Rgba([0, 0, 255, 128]));

        let data = TextureData::decode(&encode_png(img)).unwrap();
        assert_eq!((data.width, data.height), (2, 1));
        assert_eq!(data.rgba, vec![255, 0, 0, 255, 0, 0, 255, 128]);
    }

    #[test]
    fn rgb_images_gain_opaque_alpha() {
        let img = image::RgbImage::from_pixel(1, 1, image::Rgb([10, 20, 30]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let data = TextureData::decode(&bytes).unwrap();
        assert_eq!(data.rgba, vec![10, 20, 30, 255]);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(TextureData::decode(b"definitely not an image").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_white() {
        let data = TextureData::open_or_white("this/path/does/not/exist.png", 2048);
        assert_eq!(data, TextureData::white());
    }

    #[test]
    fn file_rows_keep_their_order() {
        let mut img = image::RgbaImage::new(1, 2);
        img.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        img.put_pixel(0, 1, image::Rgba([0, 255, 0, 255]));

        let data = TextureData::decode(&encode_png(img)).unwrap();
        assert_eq!(&data.rgba[..4], &[255, 0, 0, 255]);
        assert_eq!(&data.rgba[4..], &[0, 255, 0, 255]);
    }

    // ── size limit ──

    #[test]
    fn image_within_limit_fits() {
        let data = TextureData::decode(&encode_png(image::RgbaImage::new(8, 8))).unwrap();
        assert!(data.ensure_fits(8).is_ok());
    }

    #[test]
    fn image_wider_than_limit_is_rejected() {
        let data = TextureData::decode(&encode_png(image::RgbaImage::new(16, 1))).unwrap();
        let err = data.ensure_fits(8).unwrap_err();
        assert!(format!("{err:#}").contains("16x1"));
    }

    #[test]
    fn image_taller_than_limit_is_rejected() {
        let data = TextureData::decode(&encode_png(image::RgbaImage::new(1, 9))).unwrap();
        assert!(data.ensure_fits(8).is_err());
    }

    #[test]
    fn oversize_file_falls_back_to_white() {
        let path = std::env::temp_dir().join(format!("kiln-oversize-{}.png", std::process::id()));
        std::fs::write(&path, encode_png(image::RgbaImage::new(16, 4))).unwrap();

        let data = TextureData::open_or_white(&path, 8);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(data, TextureData::white());
    }

    #[test]
    fn fitting_file_loads_normally() {
        let path = std::env::temp_dir().join(format!("kiln-fitting-{}.png", std::process::id()));
        std::fs::write(&path, encode_png(image::RgbaImage::new(4, 2))).unwrap();

        let data = TextureData::open_or_white(&path, 8);
        std::fs::remove_file(&path).unwrap();
        assert_eq!((data.width, data.height), (4, 2));
    }

    #[test]
    fn open_reports_path_in_error() {
        let err = TextureData::open("nowhere/texture.png").unwrap_err();
        assert!(format!("{err:#}").contains("nowhere/texture.png"));
    }
}
