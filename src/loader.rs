use anyhow::{anyhow, Context, Result};
use image::RgbaImage;
use std::path::Path;

/// Decodes the map image from disk.
pub struct ImageLoader;

/// Immutable RGBA8 pixels of the viewed map.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub file_path: String,
    pub image: RgbaImage,
}

impl SourceImage {
    #[cfg(test)]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let image = RgbaImage::from_raw(width, height, pixels).ok_or_else(|| {
            anyhow!("Pixel buffer does not hold {}x{} RGBA8 pixels", width, height)
        })?;
        Ok(Self {
            file_path: String::new(),
            image,
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }
}

impl ImageLoader {
    /// Load any raster format the `image` crate can decode, converted to RGBA8.
    pub fn load_image<P: AsRef<Path>>(file_path: P) -> Result<SourceImage> {
        let path = file_path.as_ref();
        let path_str = path.to_string_lossy().to_string();

        let image = image::open(path)
            .with_context(|| format!("Failed to load texture from {}", path_str))?
            .to_rgba8();

        if image.width() == 0 || image.height() == 0 {
            return Err(anyhow!("Texture {} has no pixels", path_str));
        }

        log::info!(
            "Loaded texture {}: {}x{}",
            path_str,
            image.width(),
            image.height()
        );

        Ok(SourceImage {
            file_path: path_str,
            image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_checks_length() {
        assert!(SourceImage::from_rgba(2, 2, vec![0; 16]).is_ok());
        assert!(SourceImage::from_rgba(2, 2, vec![0; 15]).is_err());

        let source = SourceImage::from_rgba(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
        assert_eq!((source.width(), source.height()), (2, 1));
        assert_eq!(source.image.get_pixel(1, 0), &image::Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = ImageLoader::load_image("does/not/exist.png");
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("does/not/exist.png"));
    }
}
