//! Hierarchical scene graph
//!
//! Nodes live in a slot map and reference each other by [`NodeId`]. Every
//! node has a local [`Transform`]; world transforms are resolved by walking
//! the parent chain, so moving a group moves everything beneath it.

use slotmap::{new_key_type, SlotMap};

use crate::foundation::math::{Mat4, Transform, Vec3};
use crate::render::{Geometry, Material, ShadowFlags};

new_key_type! {
    /// Stable handle to a node in a [`SceneGraph`]
    pub struct NodeId;
}

/// Mesh payload of a node
#[derive(Debug, Clone)]
pub struct MeshNode {
    /// Parametric geometry
    pub geometry: Geometry,
    /// Owned material; never shared between nodes
    pub material: Material,
    /// Shadow participation
    pub shadows: ShadowFlags,
}

/// What a node contributes to the rendered image
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Pure transform node used to move children as a unit
    Group,
    /// Drawable mesh
    Mesh(MeshNode),
}

/// A node in the scene graph
#[derive(Debug, Clone)]
pub struct Node {
    /// Debug name
    pub name: String,
    /// Transform relative to the parent
    pub transform: Transform,
    /// Node payload
    pub kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    /// Parent node, `None` for the graph root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child nodes in insertion order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Mesh payload if this node is drawable
    pub fn mesh(&self) -> Option<&MeshNode> {
        match &self.kind {
            NodeKind::Mesh(mesh) => Some(mesh),
            NodeKind::Group => None,
        }
    }
}

/// Tree of groups and meshes rooted at a single scene root
#[derive(Debug)]
pub struct SceneGraph {
    nodes: SlotMap<NodeId, Node>,
    root: NodeId,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    /// Create a graph containing only the root group
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node {
            name: "scene".to_string(),
            transform: Transform::identity(),
            kind: NodeKind::Group,
            parent: None,
            children: Vec::new(),
        });
        Self { nodes, root }
    }

    /// The scene root
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes including the root
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; the root is never removed
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add an empty group under `parent`
    ///
    /// Falls back to the root if `parent` is not part of this graph.
    pub fn add_group(&mut self, parent: NodeId, name: impl Into<String>, transform: Transform) -> NodeId {
        self.insert(parent, name.into(), transform, NodeKind::Group)
    }

    /// Add a mesh under `parent`
    ///
    /// Falls back to the root if `parent` is not part of this graph.
    pub fn add_mesh(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        transform: Transform,
        mesh: MeshNode,
    ) -> NodeId {
        self.insert(parent, name.into(), transform, NodeKind::Mesh(mesh))
    }

    fn insert(&mut self, parent: NodeId, name: String, transform: Transform, kind: NodeKind) -> NodeId {
        let parent = if self.nodes.contains_key(parent) { parent } else { self.root };
        let id = self.nodes.insert(Node {
            name,
            transform,
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(id);
        }
        id
    }

    /// Look up a node
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Local transform of a node
    pub fn transform(&self, id: NodeId) -> Option<&Transform> {
        self.nodes.get(id).map(|node| &node.transform)
    }

    /// Mutable local transform of a node
    pub fn transform_mut(&mut self, id: NodeId) -> Option<&mut Transform> {
        self.nodes.get_mut(id).map(|node| &mut node.transform)
    }

    /// Material of a mesh node
    pub fn material(&self, id: NodeId) -> Option<&Material> {
        self.nodes.get(id).and_then(Node::mesh).map(|mesh| &mesh.material)
    }

    /// Mutable material of a mesh node
    pub fn material_mut(&mut self, id: NodeId) -> Option<&mut Material> {
        match &mut self.nodes.get_mut(id)?.kind {
            NodeKind::Mesh(mesh) => Some(&mut mesh.material),
            NodeKind::Group => None,
        }
    }

    /// World transform of a node, composed from the root down
    pub fn world_matrix(&self, id: NodeId) -> Option<Mat4> {
        let mut node = self.nodes.get(id)?;
        let mut matrix = node.transform.to_matrix();
        while let Some(parent) = node.parent {
            node = self.nodes.get(parent)?;
            matrix = node.transform.to_matrix() * matrix;
        }
        Some(matrix)
    }

    /// Visit every node depth first with its world matrix
    pub fn traverse(&self, mut visit: impl FnMut(NodeId, &Node, &Mat4)) {
        let mut stack = vec![(self.root, Mat4::identity())];
        while let Some((id, parent_world)) = stack.pop() {
            let Some(node) = self.nodes.get(id) else { continue };
            let world = parent_world * node.transform.to_matrix();
            visit(id, node, &world);
            // Reverse so children are visited in insertion order
            stack.extend(node.children.iter().rev().map(|child| (*child, world)));
        }
    }
}

/// Scale factors encoded in the upper 3x3 of a world matrix
pub fn matrix_scale(matrix: &Mat4) -> Vec3 {
    Vec3::new(
        matrix.fixed_view::<3, 1>(0, 0).norm(),
        matrix.fixed_view::<3, 1>(0, 1).norm(),
        matrix.fixed_view::<3, 1>(0, 2).norm(),
    )
}
