use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::StageSettings;
use crate::error::StageError;
use crate::geometry::{BBox, Point};
use crate::shape::{Bounded, Shape, ShapeId};
use crate::spatial::{SpatialEntry, SpatialIndex};

/// A display list of shapes, painted in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub settings: StageSettings,
    children: Vec<Shape>,
}

impl Stage {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            settings: StageSettings::default(),
            children: Vec::new(),
        }
    }

    pub fn with_settings(mut self, settings: StageSettings) -> Self {
        self.settings = settings;
        self
    }

    // ── Display list ─────────────────────────────────────────────────

    pub fn add_child(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id;
        self.children.push(shape);
        id
    }

    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.children.iter().find(|s| s.id == *id)
    }

    pub fn get_mut(&mut self, id: &ShapeId) -> Option<&mut Shape> {
        self.children.iter_mut().find(|s| s.id == *id)
    }

    pub fn remove(&mut self, id: &ShapeId) -> Option<Shape> {
        let index = self.index_of(id)?;
        Some(self.children.remove(index))
    }

    /// Hand the child to `draw` and put the result back at the same depth.
    pub fn compose_onto<F>(&mut self, id: &ShapeId, draw: F) -> Result<&Shape, StageError>
    where
        F: FnOnce(Shape) -> Shape,
    {
        let index = self.index_of(id).ok_or(StageError::ShapeNotFound(*id))?;
        let shape = std::mem::take(&mut self.children[index]);
        self.children[index] = draw(shape);
        Ok(&self.children[index])
    }

    pub fn children(&self) -> &[Shape] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn index_of(&self, id: &ShapeId) -> Option<usize> {
        self.children.iter().position(|s| s.id == *id)
    }

    // ── Geometry queries ─────────────────────────────────────────────

    /// Union of every child's cached bounds.
    pub fn bounds(&self) -> Option<BBox> {
        self.children
            .iter()
            .filter_map(|s| s.get_bounds())
            .reduce(|acc, bb| acc.union(&bb))
    }

    /// Snapshot of the children's bounds for repeated region queries.
    pub fn spatial_index(&self) -> SpatialIndex {
        let entries = self
            .children
            .iter()
            .enumerate()
            .filter_map(|(depth, s)| {
                s.get_bounds().map(|bbox| SpatialEntry {
                    shape_id: s.id,
                    depth,
                    bbox,
                })
            })
            .collect();
        SpatialIndex::build(entries)
    }

    /// Ids of shapes whose bounds contain `point`, topmost first.
    pub fn shapes_under_point(&self, point: Point) -> Vec<ShapeId> {
        self.children
            .iter()
            .rev()
            .filter(|s| s.get_bounds().is_some_and(|b| b.contains_point(&point)))
            .map(|s| s.id)
            .collect()
    }

    // ── Serialization ────────────────────────────────────────────────

    pub fn to_json(&self) -> Result<String, StageError> {
        let json = serde_json::to_string_pretty(self)?;
        log::info!("Saved stage '{}' with {} shapes", self.name, self.len());
        Ok(json)
    }

    pub fn from_json(json: &str) -> Result<Self, StageError> {
        let stage: Stage = serde_json::from_str(json)?;
        log::info!("Loaded stage '{}' with {} shapes", stage.name, stage.len());
        Ok(stage)
    }
}
