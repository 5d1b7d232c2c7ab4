use crate::index_space::Index3d;




/**
 * A 3D vector
 */
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector3d(f64, f64, f64);

// ============================================================================
impl Vector3d {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3d(x, y, z)
    }

    pub fn component(&self, direction: Direction) -> f64 {
        match direction {
            Direction::X => self.0,
            Direction::Y => self.1,
            Direction::Z => self.2,
        }
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.0 * other.0 + self.1 * other.1 + self.2 * other.2
    }

    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    /**
     * Exchange the component along the given direction with the x component.
     * Swapping with `Direction::X` is the identity.
     */
    pub fn swap_with_x(&self, direction: Direction) -> Self {
        match direction {
            Direction::X => *self,
            Direction::Y => Vector3d(self.1, self.0, self.2),
            Direction::Z => Vector3d(self.2, self.1, self.0),
        }
    }
}




/**
 * Enum to hold a unit vector in 3D space, identifying the axis along which a
 * flux or eigenstructure is evaluated.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    X,
    Y,
    Z,
}

// ============================================================================
impl Direction {

    pub const ALL: [Direction; 3] = [Direction::X, Direction::Y, Direction::Z];

    pub fn along(&self, other: Direction) -> f64 {
        if *self == other { 1.0 } else { 0.0 }
    }

    /**
     * Return the slot of the momentum (or velocity) component along this
     * direction, in a conserved state vector `[ρ, ρu, ρv, ρw, ρE]`.
     */
    pub fn momentum_slot(&self) -> usize {
        match self {
            Direction::X => 1,
            Direction::Y => 2,
            Direction::Z => 3,
        }
    }

    /**
     * Return the index offset `(dk, dj, di)` of the upper neighbor node along
     * this direction.
     */
    pub fn unit_offset(&self) -> Index3d {
        match self {
            Direction::X => (0, 0, 1),
            Direction::Y => (0, 1, 0),
            Direction::Z => (1, 0, 0),
        }
    }

    pub fn neighbor(&self, index: Index3d) -> Index3d {
        let (dk, dj, di) = self.unit_offset();
        (index.0 + dk, index.1 + dj, index.2 + di)
    }
}
