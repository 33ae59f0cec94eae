//! Chair assembly
//!
//! Builds the product's mesh hierarchy under one root group. Geometry,
//! placement and accessory colors are fixed; only the starting base color
//! comes from the caller.

use crate::foundation::math::{constants, Transform, Vec3};
use crate::render::{Color, FaceSide, Geometry, Material, ShadowFlags};
use crate::scene::{MeshNode, NodeId, SceneGraph};

const LOGO_COLOR: u32 = 0xf1_c4_0f;
const CUSHION_COLOR: u32 = 0x34_98_db;
const CUSHION_ROUGHNESS: f32 = 0.8;

const LEG_POSITIONS: [[f32; 3]; 4] = [
    [1.2, -1.0, 1.2],
    [-1.2, -1.0, 1.2],
    [1.2, -1.0, -1.2],
    [-1.2, -1.0, -1.2],
];

/// An optional attachment that can be animated in and out
#[derive(Debug, Clone, PartialEq)]
pub struct Accessory {
    /// Mesh node
    pub node: NodeId,
    /// Position when shown
    pub resting_position: Vec3,
    /// Position when hidden
    pub hidden_position: Vec3,
}

impl Accessory {
    /// Target position for a visibility state
    pub fn position_for(&self, visible: bool) -> Vec3 {
        if visible { self.resting_position } else { self.hidden_position }
    }

    /// Target scale for a visibility state
    pub fn scale_for(visible: bool) -> Vec3 {
        if visible { Vec3::new(1.0, 1.0, 1.0) } else { Vec3::zeros() }
    }
}

/// Handles to the assembled product's nodes
#[derive(Debug, Clone)]
pub struct Product {
    /// Group every part is parented to
    pub root: NodeId,
    /// Seat base
    pub base: NodeId,
    /// Four support legs
    pub legs: [NodeId; 4],
    /// Back panel
    pub back: NodeId,
    /// Seat
    pub seat: NodeId,
    /// Logo behind the back panel
    pub logo: Accessory,
    /// Cushion on the seat
    pub cushion: Accessory,
}

impl Product {
    /// Parts that take the base color
    pub fn structural_parts(&self) -> impl Iterator<Item = NodeId> + '_ {
        [self.base].into_iter().chain(self.legs).chain([self.back, self.seat])
    }
}

/// Builds the chair into a scene graph
#[derive(Debug, Clone, Copy)]
pub struct ProductAssembler {
    base_color: Color,
}

impl ProductAssembler {
    /// Create an assembler that paints structural parts `base_color`
    pub fn new(base_color: Color) -> Self {
        Self { base_color }
    }

    fn structural(&self, geometry: Geometry) -> MeshNode {
        MeshNode {
            geometry,
            material: Material::standard(self.base_color),
            shadows: ShadowFlags::CAST | ShadowFlags::RECEIVE,
        }
    }

    /// Add the chair under `parent` and return its handles
    pub fn assemble(&self, graph: &mut SceneGraph, parent: NodeId) -> Product {
        let root = graph.add_group(parent, "chair", Transform::identity());

        let base = graph.add_mesh(
            root,
            "base",
            Transform::from_position(Vec3::new(0.0, 0.1, 0.0)),
            self.structural(Geometry::cuboid(3.0, 0.2, 3.0)),
        );

        let leg_geometry = Geometry::Cylinder {
            radius_top: 0.1,
            radius_bottom: 0.1,
            height: 2.0,
            radial_segments: 16,
        };
        let legs = LEG_POSITIONS.map(|position| {
            graph.add_mesh(
                root,
                "leg",
                Transform::from_position(Vec3::from(position)),
                self.structural(leg_geometry.clone()),
            )
        });

        let back = graph.add_mesh(
            root,
            "back",
            Transform::from_position(Vec3::new(0.0, 2.2, -1.2)),
            self.structural(Geometry::cuboid(2.5, 4.0, 0.2)),
        );

        let seat = graph.add_mesh(
            root,
            "seat",
            Transform::from_position(Vec3::new(0.0, 1.0, 0.0)),
            self.structural(Geometry::cuboid(2.8, 0.2, 2.8)),
        );

        let logo = Self::add_logo(graph, root);
        let cushion = Self::add_cushion(graph, root);

        let product = Product { root, base, legs, back, seat, logo, cushion };
        log::info!("Assembled chair with {} structural parts and 2 accessories", product.structural_parts().count());
        product
    }

    fn add_logo(graph: &mut SceneGraph, root: NodeId) -> Accessory {
        let resting_position = Vec3::new(0.0, 2.5, -1.1);
        let node = graph.add_mesh(
            root,
            "logo",
            Transform::from_position(resting_position).with_euler(constants::HALF_PI, 0.0, 0.0),
            MeshNode {
                geometry: Geometry::Ring { inner_radius: 0.3, outer_radius: 0.5, theta_segments: 6 },
                material: Material::standard(Color::from_hex(LOGO_COLOR)).with_side(FaceSide::Double),
                shadows: ShadowFlags::CAST,
            },
        );
        Accessory {
            node,
            resting_position,
            hidden_position: Vec3::new(0.0, 2.5, -1.5),
        }
    }

    fn add_cushion(graph: &mut SceneGraph, root: NodeId) -> Accessory {
        let resting_position = Vec3::new(0.0, 1.2, 0.0);
        let node = graph.add_mesh(
            root,
            "cushion",
            Transform::from_position(resting_position),
            MeshNode {
                geometry: Geometry::cuboid(2.5, 0.4, 2.5),
                material: Material::standard(Color::from_hex(CUSHION_COLOR)).with_roughness(CUSHION_ROUGHNESS),
                shadows: ShadowFlags::CAST | ShadowFlags::RECEIVE,
            },
        );
        Accessory {
            node,
            resting_position,
            hidden_position: Vec3::new(0.0, 0.8, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point3;
    use approx::assert_relative_eq;

    fn assemble() -> (SceneGraph, Product) {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let product = ProductAssembler::new(Color::from_hex(0x2c_3e_50)).assemble(&mut graph, root);
        (graph, product)
    }

    #[test]
    fn test_all_parts_share_the_product_root() {
        let (graph, product) = assemble();
        let children = graph.node(product.root).unwrap().children();
        assert_eq!(children.len(), 9);
        for part in product.structural_parts().chain([product.logo.node, product.cushion.node]) {
            assert_eq!(graph.node(part).unwrap().parent(), Some(product.root));
        }
    }

    #[test]
    fn test_structural_parts_start_with_base_color() {
        let (graph, product) = assemble();
        assert_eq!(product.structural_parts().count(), 7);
        for part in product.structural_parts() {
            assert_eq!(graph.material(part).unwrap().color.to_string(), "#2c3e50");
        }
        assert_eq!(graph.material(product.logo.node).unwrap().color.to_string(), "#f1c40f");
        assert_eq!(graph.material(product.cushion.node).unwrap().color.to_string(), "#3498db");
    }

    #[test]
    fn test_accessories_start_visible_at_rest() {
        let (graph, product) = assemble();
        for accessory in [&product.logo, &product.cushion] {
            let transform = graph.transform(accessory.node).unwrap();
            assert_relative_eq!(transform.position, accessory.resting_position);
            assert_relative_eq!(transform.scale, Accessory::scale_for(true));
        }
    }

    #[test]
    fn test_legs_hang_below_the_base() {
        let (graph, product) = assemble();
        for leg in product.legs {
            let origin = graph.world_matrix(leg).unwrap().transform_point(&Point3::origin());
            assert_relative_eq!(origin.y, -1.0);
        }
    }

    #[test]
    fn test_logo_material_is_double_sided() {
        let (graph, product) = assemble();
        assert_eq!(graph.material(product.logo.node).unwrap().side, FaceSide::Double);
        assert_relative_eq!(graph.material(product.cushion.node).unwrap().roughness, 0.8);
    }
}
