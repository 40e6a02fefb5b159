//! Projected image textures.

use std::io::{Read, Seek, SeekFrom};

use glam::DVec3;
use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The encoded bytes of a texture image.
///
/// The payload owns its bytes; decoding can therefore be repeated without
/// re-reading the source. When constructed from a stream, the stream is
/// read exactly once and its position restored (see [`ImagePayload::from_reader`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    bytes: Vec<u8>,
}

impl ImagePayload {
    /// Creates a payload from already-loaded encoded image bytes.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Reads an encoded image from a seekable stream.
    ///
    /// The stream is consumed from its current position to the end, then
    /// seeked back to where it started so the same source can be read
    /// again by other consumers.
    pub fn from_reader<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let start = reader.stream_position()?;
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        reader.seek(SeekFrom::Start(start))?;
        Ok(Self { bytes })
    }

    /// Returns the raw encoded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Decodes the payload into an RGB image, dropping any alpha channel.
    pub fn decode(&self) -> Result<RgbImage> {
        Ok(image::load_from_memory(&self.bytes)?.into_rgb8())
    }
}

/// An image texture projected onto an element along a plane.
///
/// The plane is anchored at `origin` and spanned by `axis_u` and `axis_v`;
/// texture coordinates map `[origin, origin + axis_u]` to `s` in `[0, 1]`
/// and `[origin, origin + axis_v]` to `t` in `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageTexture {
    /// Optional texture name; unnamed textures get a generated key on the mesh.
    pub name: Option<String>,
    /// Anchor point of the texture plane.
    pub origin: DVec3,
    /// In-plane axis mapped to the `s` coordinate.
    pub axis_u: DVec3,
    /// In-plane axis mapped to the `t` coordinate.
    pub axis_v: DVec3,
    /// The encoded image.
    pub image: ImagePayload,
}

impl ImageTexture {
    /// Creates a texture on the plane spanned by `axis_u` and `axis_v`.
    #[must_use]
    pub fn new(origin: DVec3, axis_u: DVec3, axis_v: DVec3, image: ImagePayload) -> Self {
        Self {
            name: None,
            origin,
            axis_u,
            axis_v,
            image,
        }
    }

    /// Sets the texture name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
