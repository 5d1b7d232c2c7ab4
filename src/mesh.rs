use core::ops::Range;
use serde::{Deserialize, Serialize};
use crate::hydro::error::Error;
use crate::hydro::geometry::Direction;
use crate::index_space::{range3d, IndexSpace};




/**
 * A uniform Cartesian mesh of nodes, padded with a margin of guard nodes
 * along each axis. Node `num_guard` sits on the lower domain boundary and
 * node `num_guard + size` on the upper one. The area and size tuples are
 * ordered `(x, y, z)`.
 */
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub area: (Range<f64>, Range<f64>, Range<f64>),
    pub size: (i64, i64, i64),
    pub num_guard: i64,
}




// ============================================================================
impl Mesh {

    /**
     * Create a mesh, checking that every axis has at least one cell, that
     * every extent is finite with its upper bound above its lower bound,
     * and that the guard margin is not negative.
     */
    pub fn new(area: (Range<f64>, Range<f64>, Range<f64>), size: (i64, i64, i64), num_guard: i64) -> Result<Self, Error> {
        let mesh = Self { area, size, num_guard };

        for direction in Direction::ALL.iter().cloned() {
            let (extent, n) = mesh.axis(direction);

            if n < 1 {
                return Err(Error::InvalidMesh(format!("{:?} axis needs at least one cell, got {}", direction, n)));
            }
            if !(extent.start.is_finite() && extent.end.is_finite() && extent.end > extent.start) {
                return Err(Error::InvalidMesh(format!("{:?} extent {:?} is empty or not finite", direction, extent)));
            }
        }
        if num_guard < 0 {
            return Err(Error::InvalidMesh(format!("guard margin must not be negative, got {}", num_guard)));
        }
        Ok(mesh)
    }

    fn axis(&self, direction: Direction) -> (&Range<f64>, i64) {
        match direction {
            Direction::X => (&self.area.0, self.size.0),
            Direction::Y => (&self.area.1, self.size.1),
            Direction::Z => (&self.area.2, self.size.2),
        }
    }

    pub fn cell_spacing(&self, direction: Direction) -> f64 {
        let (extent, size) = self.axis(direction);
        (extent.end - extent.start) / size as f64
    }

    /**
     * Return the index of the node nearest to the given coordinate along
     * `direction`, counting guard nodes.
     */
    pub fn node_index(&self, coordinate: f64, direction: Direction) -> i64 {
        let (extent, _) = self.axis(direction);
        let dx = self.cell_spacing(direction);
        ((coordinate - extent.start) / dx + 0.5).floor() as i64 + self.num_guard
    }

    /**
     * Return the coordinate of the node at `index` along `direction`. Guard
     * nodes lie outside the domain.
     */
    pub fn node_coordinate(&self, index: i64, direction: Direction) -> f64 {
        let (extent, _) = self.axis(direction);
        extent.start + (index - self.num_guard) as f64 * self.cell_spacing(direction)
    }

    /**
     * Clamp an index along `direction` into the range of `space` on that
     * axis.
     */
    pub fn clamp_to(&self, index: i64, direction: Direction, space: &IndexSpace) -> i64 {
        let range = space.range(direction);
        index.max(range.start).min(range.end - 1)
    }

    /**
     * Return the index space of the nodes inside the domain, boundaries
     * included.
     */
    pub fn index_space(&self) -> IndexSpace {
        let ng = self.num_guard;
        let (nx, ny, nz) = self.size;
        range3d(ng..ng + nz + 1, ng..ng + ny + 1, ng..ng + nx + 1)
    }

    /**
     * Return the index space of all nodes, guard nodes included.
     */
    pub fn extended_index_space(&self) -> IndexSpace {
        self.index_space().extend_all(self.num_guard)
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use approx::assert_relative_eq;
    use super::*;

    fn mesh() -> Mesh {
        Mesh::new((0.0..1.0, -1.0..1.0, 0.0..0.5), (10, 20, 5), 2).unwrap()
    }

    #[test]
    fn cell_spacing_is_uniform_per_axis() {
        let mesh = mesh();
        for direction in Direction::ALL.iter().cloned() {
            assert_relative_eq!(mesh.cell_spacing(direction), 0.1, max_relative = 1e-14);
        }
    }

    #[test]
    fn node_index_and_coordinate_agree() {
        let mesh = mesh();
        assert_eq!(mesh.node_index(0.0, Direction::X), 2);
        assert_eq!(mesh.node_index(1.0, Direction::X), 12);
        assert_eq!(mesh.node_index(-1.0, Direction::Y), 2);
        assert_eq!(mesh.node_index(0.34, Direction::X), 5);
        assert_eq!(mesh.node_index(0.36, Direction::X), 6);

        for direction in Direction::ALL.iter().cloned() {
            let range = mesh.extended_index_space().range(direction).clone();
            for n in range {
                assert_eq!(mesh.node_index(mesh.node_coordinate(n, direction), direction), n);
            }
        }
        assert_relative_eq!(mesh.node_coordinate(0, Direction::Z), -0.2, max_relative = 1e-14);
    }

    #[test]
    fn clamping_keeps_indexes_inside_the_space() {
        let mesh = mesh();
        let space = mesh.index_space();
        assert_eq!(mesh.clamp_to(-4, Direction::X, &space), 2);
        assert_eq!(mesh.clamp_to(7, Direction::X, &space), 7);
        assert_eq!(mesh.clamp_to(40, Direction::Y, &space), 22);
        assert_eq!(mesh.clamp_to(40, Direction::Z, &space), 7);
    }

    #[test]
    fn index_spaces_cover_interior_and_guard_nodes() {
        let mesh = mesh();
        assert_eq!(mesh.index_space().dim(), (6, 21, 11));
        assert_eq!(mesh.extended_index_space().dim(), (10, 25, 15));
    }

    #[test]
    fn degenerate_meshes_are_rejected() {
        let area = || (0.0..1.0, 0.0..1.0, 0.0..1.0);
        assert!(matches!(Mesh::new(area(), (0, 4, 4), 1), Err(Error::InvalidMesh(_))));
        assert!(matches!(Mesh::new(area(), (-3, 4, 4), 1), Err(Error::InvalidMesh(_))));
        assert!(matches!(Mesh::new(area(), (4, 4, 0), 1), Err(Error::InvalidMesh(_))));
        assert!(matches!(Mesh::new(area(), (4, 4, 4), -1), Err(Error::InvalidMesh(_))));
        assert!(matches!(Mesh::new((0.0..1.0, 1.0..1.0, 0.0..1.0), (4, 4, 4), 1), Err(Error::InvalidMesh(_))));
        assert!(matches!(Mesh::new((0.0..f64::INFINITY, 0.0..1.0, 0.0..1.0), (4, 4, 4), 1), Err(Error::InvalidMesh(_))));
        assert!(Mesh::new(area(), (1, 1, 1), 0).is_ok());
    }
}
