//! The element dispatcher and project conversion entry points.

use std::collections::BTreeMap;

use glam::DVec3;
use image::RgbImage;
use omfvtk_core::{Element, Geometry, OmfVtkError, Project, Result};
use omfvtk_mesh::{DataSet, MultiBlock};

use crate::attach::attach_data;
use crate::lineset::line_set_to_vtk;
use crate::pointset::point_set_to_vtk;
use crate::surface::{surface_geom_to_vtk, surface_grid_geom_to_vtk};
use crate::texture::{attach_texture_coordinates, decode_textures};
use crate::volume::{attach_volume_data, volume_grid_geom_to_vtk};

/// Converts a single element to its mesh, binding the element's data
/// arrays and textures.
///
/// `origin` is the global offset added to every node. Unknown geometry
/// kinds fail with [`OmfVtkError::UnsupportedKind`].
pub fn wrap(element: &Element, origin: DVec3) -> Result<DataSet> {
    log::debug!(
        "wrapping element '{}' ({})",
        element.name,
        element.geometry.kind()
    );
    let mut output: DataSet = match &element.geometry {
        Geometry::PointSet(geom) => {
            let mut ds: DataSet = point_set_to_vtk(geom, origin).into();
            attach_data(&mut ds, &element.data)?;
            ds
        }
        Geometry::LineSet(geom) => {
            let mut ds: DataSet = line_set_to_vtk(geom, origin).into();
            attach_data(&mut ds, &element.data)?;
            ds
        }
        Geometry::Surface(geom) => {
            let mut ds: DataSet = surface_geom_to_vtk(geom, origin).into();
            attach_data(&mut ds, &element.data)?;
            ds
        }
        Geometry::SurfaceGrid(geom) => {
            let mut ds: DataSet = surface_grid_geom_to_vtk(geom, origin)?.into();
            attach_data(&mut ds, &element.data)?;
            ds
        }
        Geometry::VolumeGrid(geom) => {
            let mut ds = volume_grid_geom_to_vtk(geom, origin)?;
            attach_volume_data(&mut ds, geom, &element.data)?;
            ds
        }
        other => {
            return Err(OmfVtkError::UnsupportedKind(other.kind().to_string()));
        }
    };
    attach_texture_coordinates(&mut output, &element.textures, &element.name)?;
    Ok(output)
}

/// Converts an ordered sequence of elements into a [`MultiBlock`].
///
/// Block order and names follow the input; duplicate names are kept.
/// Conversion aborts on the first failure, reporting the failing element
/// by name.
pub fn wrap_elements(elements: &[Element], origin: DVec3) -> Result<MultiBlock> {
    let mut blocks = MultiBlock::new();
    for element in elements {
        let mesh = wrap(element, origin).map_err(|e| e.for_element(element.name.as_str()))?;
        blocks.push(element.name.as_str(), mesh);
    }
    Ok(blocks)
}

/// Converts a whole project into a [`MultiBlock`] keyed by element name.
///
/// The project origin is threaded through every element conversion.
pub fn project_to_vtk(project: &Project) -> Result<MultiBlock> {
    log::info!(
        "converting project '{}' ({} elements)",
        project.name,
        project.elements.len()
    );
    wrap_elements(&project.elements, project.origin)
}

/// Converts a whole project, additionally returning the decoded texture
/// images of every textured element, keyed by element name.
pub fn project_to_vtk_with_textures(
    project: &Project,
) -> Result<(MultiBlock, BTreeMap<String, Vec<RgbImage>>)> {
    let blocks = project_to_vtk(project)?;
    let mut textures = BTreeMap::new();
    for element in &project.elements {
        if element.textures.is_empty() {
            continue;
        }
        let images =
            decode_textures(element).map_err(|e| e.for_element(element.name.as_str()))?;
        textures.insert(element.name.clone(), images);
    }
    Ok((blocks, textures))
}
