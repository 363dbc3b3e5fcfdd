//! Composite geometry: a union of surfaces and nested groups.

use lumen_math::{Aabb, Ray};

use super::{GeoPoint, Geometry, Intersectable};

/// A member of a composite: either a single surface or a nested group.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryNode {
    Single(Geometry),
    Group(Geometries),
}

impl From<Geometry> for GeometryNode {
    fn from(g: Geometry) -> Self {
        GeometryNode::Single(g)
    }
}

impl From<Geometries> for GeometryNode {
    fn from(g: Geometries) -> Self {
        GeometryNode::Group(g)
    }
}

impl Intersectable for GeometryNode {
    fn find_intersections<'a>(&'a self, ray: &Ray, max_distance: f64) -> Vec<GeoPoint<'a>> {
        match self {
            GeometryNode::Single(g) => g.find_intersections(ray, max_distance),
            GeometryNode::Group(g) => g.find_intersections(ray, max_distance),
        }
    }

    fn bounding_box(&self) -> Option<Aabb> {
        match self {
            GeometryNode::Single(g) => g.bounding_box(),
            GeometryNode::Group(g) => g.bounding_box(),
        }
    }
}

/// The union of member geometries.
///
/// Intersecting a composite intersects every member and keeps every
/// result. The group's bounding box is the union of its members' boxes,
/// or `None` once any member is unbounded (planes, tubes).
#[derive(Debug, Clone, PartialEq)]
pub struct Geometries {
    members: Vec<GeometryNode>,
    bbox: Option<Aabb>,
}

impl Geometries {
    /// Create a new empty composite.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            bbox: Some(Aabb::EMPTY),
        }
    }

    /// Add a surface or a nested group.
    pub fn add(&mut self, member: impl Into<GeometryNode>) {
        let member = member.into();
        self.bbox = match (self.bbox, member.bounding_box()) {
            (Some(a), Some(b)) => Some(Aabb::surrounding(&a, &b)),
            _ => None,
        };
        self.members.push(member);
    }

    /// Get the number of direct members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the composite is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[GeometryNode] {
        &self.members
    }

    /// Every leaf surface, descending into nested groups.
    pub fn surfaces(&self) -> Vec<&Geometry> {
        let mut out = Vec::with_capacity(self.members.len());
        for member in &self.members {
            match member {
                GeometryNode::Single(g) => out.push(g),
                GeometryNode::Group(g) => out.extend(g.surfaces()),
            }
        }
        out
    }
}

impl Default for Geometries {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Geometry> for Geometries {
    fn from_iter<I: IntoIterator<Item = Geometry>>(iter: I) -> Self {
        let mut geometries = Geometries::new();
        for g in iter {
            geometries.add(g);
        }
        geometries
    }
}

impl Intersectable for Geometries {
    fn find_intersections<'a>(&'a self, ray: &Ray, max_distance: f64) -> Vec<GeoPoint<'a>> {
        if let Some(bbox) = self.bbox {
            if !bbox.hit(ray, max_distance) {
                return Vec::new();
            }
        }

        self.members
            .iter()
            .flat_map(|m| m.find_intersections(ray, max_distance))
            .collect()
    }

    fn bounding_box(&self) -> Option<Aabb> {
        self.bbox
    }
}
