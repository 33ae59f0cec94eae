//! Scene management
//!
//! A [`Scene`] bundles the node hierarchy with the environment it is drawn
//! in (background and lighting). The [`bootstrap`] module builds the scene,
//! camera and attached surface once at startup.

pub mod bootstrap;
pub mod scene_graph;

pub use bootstrap::{Stage, SceneBootstrapper};
pub use scene_graph::{SceneGraph, Node, NodeId, NodeKind, MeshNode, matrix_scale};

use crate::foundation::math::Mat4;
use crate::render::{Color, Geometry, LightingEnvironment, Material, ShadowFlags};

/// Scale below which a mesh is treated as collapsed and skipped when drawing
const COLLAPSED_SCALE: f32 = 1e-4;

/// Everything the render surface needs to draw a frame
#[derive(Debug)]
pub struct Scene {
    /// Node hierarchy
    pub graph: SceneGraph,
    /// Clear color
    pub background: Color,
    /// Lights
    pub lighting: LightingEnvironment,
}

/// A mesh resolved to world space, ready for submission
#[derive(Debug, Clone)]
pub struct DrawItem {
    /// Source node
    pub node: NodeId,
    /// Debug name of the source node
    pub name: String,
    /// Model matrix
    pub world: Mat4,
    /// Geometry to draw
    pub geometry: Geometry,
    /// Material snapshot at draw time
    pub material: Material,
    /// Shadow participation
    pub shadows: ShadowFlags,
}

impl DrawItem {
    /// False once any world scale axis has collapsed to zero
    pub fn is_visible(&self) -> bool {
        matrix_scale(&self.world).iter().all(|axis| *axis > COLLAPSED_SCALE)
    }
}

impl Scene {
    /// Create an empty scene
    pub fn new(background: Color) -> Self {
        Self {
            graph: SceneGraph::new(),
            background,
            lighting: LightingEnvironment::new(),
        }
    }

    /// Resolve every mesh in the graph to a draw item, in traversal order
    pub fn draw_list(&self) -> Vec<DrawItem> {
        let mut items = Vec::new();
        self.graph.traverse(|id, node, world| {
            if let NodeKind::Mesh(mesh) = &node.kind {
                items.push(DrawItem {
                    node: id,
                    name: node.name.clone(),
                    world: *world,
                    geometry: mesh.geometry.clone(),
                    material: mesh.material.clone(),
                    shadows: mesh.shadows,
                });
            }
        });
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Transform, Vec3};

    #[test]
    fn test_draw_list_skips_groups_and_flags_collapsed_meshes() {
        let mut scene = Scene::new(Color::WHITE);
        let root = scene.graph.root();
        let group = scene.graph.add_group(root, "group", Transform::identity());
        let mesh = MeshNode {
            geometry: Geometry::cuboid(1.0, 1.0, 1.0),
            material: Material::standard(Color::BLACK),
            shadows: ShadowFlags::empty(),
        };
        scene.graph.add_mesh(group, "shown", Transform::identity(), mesh.clone());
        let hidden = Transform { scale: Vec3::zeros(), ..Transform::identity() };
        scene.graph.add_mesh(group, "hidden", hidden, mesh);

        let items = scene.draw_list();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_visible());
        assert!(!items[1].is_visible());
    }
}
