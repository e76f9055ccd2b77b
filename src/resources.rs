//! Owner of the named GPU textures.
//!
//! Textures live exactly as long as the manager that loaded them. Nothing is
//! shared process-wide; dropping the manager releases every texture once.

use crate::{gpu::GpuContext, loader::ImageLoader, texture::Texture};
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::Path;

#[derive(Default)]
pub struct ResourceManager {
    textures: HashMap<String, Texture>,
}

impl ResourceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes `path`, uploads it and stores it under `name`, replacing any
    /// texture already registered there. A replaced texture is only dropped,
    /// so bind groups built from it stay valid until they go away.
    pub fn add_texture<P: AsRef<Path>>(
        &mut self,
        gpu: &GpuContext,
        name: &str,
        path: P,
    ) -> Result<&Texture> {
        let image = ImageLoader::load_image(path)?;
        let texture = Texture::from_image(gpu, &image, name);
        log::debug!("Registered '{}' from {}", name, image.file_path);
        if self.textures.insert(name.to_string(), texture).is_some() {
            log::debug!("Replaced texture '{}'", name);
        }
        self.texture(name)
    }

    pub fn texture(&self, name: &str) -> Result<&Texture> {
        self.textures
            .get(name)
            .ok_or_else(|| anyhow!("No texture registered as '{}'", name))
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl Drop for ResourceManager {
    fn drop(&mut self) {
        for (name, texture) in self.textures.drain() {
            log::debug!("Releasing texture '{}'", name);
            texture.texture.destroy();
        }
    }
}
