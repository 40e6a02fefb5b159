//! Planar texture mapping.

use glam::{DVec2, DVec3};
use image::RgbImage;
use omfvtk_core::{Element, ImageTexture, Result};
use omfvtk_mesh::{DataSet, TextureMap};

/// Projects node positions orthogonally onto a texture plane.
///
/// The plane is anchored at the texture origin and spanned by its two
/// in-plane axes; coordinates are normalized so that walking the full
/// axis maps to `[0, 1]`. Nodes outside the plane's footprint simply land
/// outside that range.
#[must_use]
pub fn texture_coordinates(points: &[DVec3], texture: &ImageTexture) -> Vec<DVec2> {
    let inv_u = 1.0 / texture.axis_u.length_squared();
    let inv_v = 1.0 / texture.axis_v.length_squared();
    points
        .iter()
        .map(|&p| {
            let rel = p - texture.origin;
            DVec2::new(
                rel.dot(texture.axis_u) * inv_u,
                rel.dot(texture.axis_v) * inv_v,
            )
        })
        .collect()
}

/// Binds texture-coordinate arrays (and decoded images) for all of an
/// element's textures.
///
/// Each texture binds under its own name, or `"<element_name>-texture-<index>"`
/// when unnamed. All coordinates are computed from the same base node
/// positions, so multiple textures are independent of one another.
pub fn attach_texture_coordinates(
    output: &mut DataSet,
    textures: &[ImageTexture],
    element_name: &str,
) -> Result<()> {
    if textures.is_empty() {
        return Ok(());
    }
    let coords: Vec<Vec<DVec2>> = {
        let points = output.node_positions();
        textures
            .iter()
            .map(|tex| texture_coordinates(&points, tex))
            .collect()
    };
    for (index, (texture, coords)) in textures.iter().zip(coords).enumerate() {
        let name = texture_key(texture, element_name, index);
        let image = texture.image.decode()?;
        let maps = output.texture_maps_mut();
        if let Some(existing) = maps.iter_mut().find(|m| m.name == name) {
            existing.coords = coords;
            existing.image = image;
        } else {
            maps.push(TextureMap {
                name,
                coords,
                image,
            });
        }
    }
    Ok(())
}

/// Decodes all of an element's textures in order.
pub fn decode_textures(element: &Element) -> Result<Vec<RgbImage>> {
    element
        .textures
        .iter()
        .map(|tex| tex.image.decode())
        .collect()
}

fn texture_key(texture: &ImageTexture, element_name: &str, index: usize) -> String {
    match texture.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("{element_name}-texture-{index}"),
    }
}
