use core::ops::Range;
use crate::hydro::geometry::Direction;




/**
 * A 3D node index, ordered `(k, j, i)`: `k` runs along z, `j` along y, and
 * `i` along x. The final index increases fastest in memory.
 */
pub type Index3d = (i64, i64, i64);




/**
 * Interface for services that flatten a 3D node index into a linear offset
 * in a node-major buffer. The offset counts nodes, not scalars: callers
 * multiply by the number of fields stored per node. Implementations must be
 * injective over the indexes they consider valid.
 */
pub trait IndexMap {
    fn offset(&self, index: Index3d) -> usize;
}




/**
 * Represents a rectangular region in a discrete 3D index space
 */
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IndexSpace {
    dk: Range<i64>,
    dj: Range<i64>,
    di: Range<i64>,
}




/**
 * Describes a rectangular index space. The index type is signed 64-bit integer.
 */
impl IndexSpace {


    pub fn new(dk: Range<i64>, dj: Range<i64>, di: Range<i64>) -> Self {

        assert!(
            dk.start <= dk.end && dj.start <= dj.end && di.start <= di.end,
            "index space has negative volume");

        Self { dk, dj, di }
    }


    /**
     * Return the number of indexes on each axis, as `(nk, nj, ni)`.
     */
    pub fn dim(&self) -> (usize, usize, usize) {
        ((self.dk.end - self.dk.start) as usize,
         (self.dj.end - self.dj.start) as usize,
         (self.di.end - self.di.start) as usize)
    }


    /**
     * Return the number of elements in this index space.
     */
    pub fn len(&self) -> usize {
        let (l, m, n) = self.dim();
        l * m * n
    }


    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }


    /**
     * Return the minimum index (inclusive).
     */
    pub fn start(&self) -> Index3d {
        (self.dk.start, self.dj.start, self.di.start)
    }


    /**
     * Return the maximum index (exclusive).
     */
    pub fn end(&self) -> Index3d {
        (self.dk.end, self.dj.end, self.di.end)
    }


    /**
     * Return the index range covered along the axis of the given direction.
     */
    pub fn range(&self, direction: Direction) -> &Range<i64> {
        match direction {
            Direction::X => &self.di,
            Direction::Y => &self.dj,
            Direction::Z => &self.dk,
        }
    }


    /**
     * Determine whether this index space contains the given index.
     */
    pub fn contains(&self, index: Index3d) -> bool {
        self.dk.contains(&index.0) && self.dj.contains(&index.1) && self.di.contains(&index.2)
    }


    /**
     * Determine whether another index space is a subset of this one.
     */
    pub fn contains_space(&self, other: &Self) -> bool {
        other.dk.start >= self.dk.start && other.dk.end <= self.dk.end &&
        other.dj.start >= self.dj.start && other.dj.end <= self.dj.end &&
        other.di.start >= self.di.start && other.di.end <= self.di.end
    }


    /**
     * Expand this index space by the given number of elements on each axis.
     */
    pub fn extend_all(&self, delta: i64) -> Self {
        Self::new(
            self.dk.start - delta .. self.dk.end + delta,
            self.dj.start - delta .. self.dj.end + delta,
            self.di.start - delta .. self.di.end + delta)
    }


    /**
     * Trim this index space by the given number of elements on each axis.
     */
    pub fn trim_all(&self, delta: i64) -> Self {
        self.extend_all(-delta)
    }


    /**
     * Trim just the upper elements of this index space by a certain amount on
     * the axis of the given direction. The result is the set of nodes whose
     * upper neighbor (`delta` = 1) is still inside the original space.
     */
    pub fn trim_upper(&self, delta: i64, direction: Direction) -> Self {
        let (dk, dj, di) = (self.dk.clone(), self.dj.clone(), self.di.clone());
        match direction {
            Direction::X => Self::new(dk, dj, di.start .. di.end - delta),
            Direction::Y => Self::new(dk, dj.start .. dj.end - delta, di),
            Direction::Z => Self::new(dk.start .. dk.end - delta, dj, di),
        }
    }


    /**
     * Return the linear offset for the given index, in a row-major memory
     * buffer aligned with the start of this index space.
     */
    pub fn row_major_offset(&self, index: Index3d) -> usize {
        let k = (index.0 - self.dk.start) as usize;
        let j = (index.1 - self.dj.start) as usize;
        let i = (index.2 - self.di.start) as usize;
        let (_, m, n) = self.dim();
        (k * m + j) * n + i
    }


    /**
     * Return an iterator which traverses the index space in row-major order
     * (C-like; the final index increases fastest).
     */
    pub fn iter(&self) -> impl Iterator<Item = Index3d> + '_ {
        self.dk.clone().flat_map(move |k| {
            self.dj.clone().flat_map(move |j| self.di.clone().map(move |i| (k, j, i)))
        })
    }
}




// ============================================================================
impl IndexMap for IndexSpace {
    fn offset(&self, index: Index3d) -> usize {
        self.row_major_offset(index)
    }
}

impl From<(Range<i64>, Range<i64>, Range<i64>)> for IndexSpace {
    fn from(range: (Range<i64>, Range<i64>, Range<i64>)) -> Self {
        Self::new(range.0, range.1, range.2)
    }
}

impl From<IndexSpace> for (Range<i64>, Range<i64>, Range<i64>) {
    fn from(space: IndexSpace) -> Self {
        (space.dk, space.dj, space.di)
    }
}




/**
 * Less imposing factory function to construct an IndexSpace object.
 */
pub fn range3d(dk: Range<i64>, dj: Range<i64>, di: Range<i64>) -> IndexSpace {
    IndexSpace::new(dk, dj, di)
}
