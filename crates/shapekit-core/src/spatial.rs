use rstar::{RTree, RTreeObject, AABB};

use crate::geometry::BBox;
use crate::shape::ShapeId;

/// An entry in the R-tree spatial index, referencing a shape by id and paint order.
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    pub shape_id: ShapeId,
    /// Position in the stage's display list (higher paints later).
    pub depth: usize,
    /// Cached bounds of the shape.
    pub bbox: BBox,
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bbox.min.x, self.bbox.min.y],
            [self.bbox.max.x, self.bbox.max.y],
        )
    }
}

/// Read-only snapshot of shape bounds for repeated region queries.
///
/// Build it once per frame; it does not follow later edits
/// to the stage.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
}

impl SpatialIndex {
    /// Bulk-load the index from shape bounds.
    pub fn build(entries: Vec<SpatialEntry>) -> Self {
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Shapes whose bounds intersect `region`, in no particular order.
    pub fn query_region(&self, region: &BBox) -> Vec<&SpatialEntry> {
        let envelope = AABB::from_corners(
            [region.min.x, region.min.y],
            [region.max.x, region.max.y],
        );
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .collect()
    }

    /// Number of entries in the index.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Whether the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use uuid::Uuid;

    fn entries() -> (ShapeId, ShapeId, SpatialIndex) {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let index = SpatialIndex::build(vec![
            SpatialEntry {
                shape_id: a,
                depth: 0,
                bbox: BBox::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0)),
            },
            SpatialEntry {
                shape_id: b,
                depth: 1,
                bbox: BBox::new(Point::new(5.0, 5.0), Point::new(30.0, 30.0)),
            },
        ]);
        (a, b, index)
    }

    #[test]
    fn test_region_query() {
        let (a, b, index) = entries();
        assert_eq!(index.len(), 2);

        let region = BBox::new(Point::new(20.0, 20.0), Point::new(40.0, 40.0));
        let results = index.query_region(&region);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].shape_id, b);

        let region = BBox::new(Point::new(-5.0, -5.0), Point::new(6.0, 6.0));
        let mut ids: Vec<ShapeId> = index.query_region(&region).iter().map(|e| e.shape_id).collect();
        ids.sort();
        let mut expected = vec![a, b];
        expected.sort();
        assert_eq!(ids, expected);

        // Touching edges count as intersecting.
        let region = BBox::new(Point::new(30.0, 30.0), Point::new(31.0, 31.0));
        assert_eq!(index.query_region(&region).len(), 1);
        let region = BBox::new(Point::new(-3.0, -3.0), Point::new(-1.0, -1.0));
        assert!(index.query_region(&region).is_empty());
    }

    #[test]
    fn test_empty_index() {
        let index = SpatialIndex::build(Vec::new());
        assert!(index.is_empty());
        assert!(index
            .query_region(&BBox::new(Point::ORIGIN, Point::new(1.0, 1.0)))
            .is_empty());
    }
}
