use std::ops::{Add, Sub};
use super::geometry::{Direction, Vector3d};
use crate::index_space::{Index3d, IndexMap};
use crate::model::Model;
use crate::num_vec::Vector;




/** Number of conserved fields stored per node: `[ρ, ρu, ρv, ρw, ρE]`. */
pub const NUM_CONSERVED: usize = 5;

/** A 5-component vector in the space of conserved variables. */
pub type StateVector = Vector<f64, NUM_CONSERVED>;




// ============================================================================
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Conserved(f64, f64, f64, f64, f64);

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Primitive(f64, f64, f64, f64, f64);




// ============================================================================
impl Conserved {

    pub fn new(d: f64, s1: f64, s2: f64, s3: f64, e: f64) -> Self {
        Self(d, s1, s2, s3, e)
    }

    pub fn from_slice(cons: &[f64]) -> Self {
        Self(cons[0], cons[1], cons[2], cons[3], cons[4])
    }

    /**
     * Read the conserved state of the node starting at the given scalar
     * offset in a flattened buffer.
     */
    pub fn at(u: &[f64], offset: usize) -> Self {
        Self::from_slice(&u[offset..offset + NUM_CONSERVED])
    }

    pub fn write_to_slice(&self, cons: &mut [f64]) {
        cons[0] = self.0;
        cons[1] = self.1;
        cons[2] = self.2;
        cons[3] = self.3;
        cons[4] = self.4;
    }

    pub fn as_array(&self) -> [f64; NUM_CONSERVED] {
        [self.0, self.1, self.2, self.3, self.4]
    }

    pub fn mass_density(&self) -> f64 {
        self.0
    }

    pub fn momentum_1(&self) -> f64 {
        self.1
    }

    pub fn momentum_2(&self) -> f64 {
        self.2
    }

    pub fn momentum_3(&self) -> f64 {
        self.3
    }

    pub fn energy_density(&self) -> f64 {
        self.4
    }

    pub fn momentum_vector(&self) -> Vector3d {
        Vector3d::new(self.momentum_1(), self.momentum_2(), self.momentum_3())
    }

    pub fn momentum(&self, direction: Direction) -> f64 {
        match direction {
            Direction::X => self.momentum_1(),
            Direction::Y => self.momentum_2(),
            Direction::Z => self.momentum_3(),
        }
    }

    pub fn momentum_squared(&self) -> f64 {
        self.1 * self.1 + self.2 * self.2 + self.3 * self.3
    }

    /**
     * Return the internal energy density, ρE - |ρv|² / 2ρ.
     */
    pub fn internal_energy_density(&self) -> f64 {
        self.energy_density() - 0.5 * self.momentum_squared() / self.mass_density()
    }

    pub fn gas_pressure(&self, model: &Model) -> f64 {
        self.internal_energy_density() * (model.gamma() - 1.0)
    }

    pub fn temperature(&self, model: &Model) -> f64 {
        self.internal_energy_density() / (self.mass_density() * model.specific_heat_volume())
    }

    /**
     * Return the specific total enthalpy, (ρE + p) / ρ, written as γE/ρ -
     * (γ - 1)|v|²/2.
     */
    pub fn total_enthalpy(&self, model: &Model) -> f64 {
        let gamma = model.gamma();
        let d = self.mass_density();
        let vsq = self.momentum_squared() / (d * d);
        (self.energy_density() / d) * gamma - 0.5 * vsq * (gamma - 1.0)
    }

    /**
     * Convert to primitive variables. There is no admissibility check here:
     * a non-positive density or negative pressure comes back as a
     * non-finite or negative value. See `to_primitive_checked` for the
     * validating variant.
     */
    pub fn to_primitive(&self, model: &Model) -> Primitive {
        let d = self.mass_density();
        let pg = self.internal_energy_density() * (model.gamma() - 1.0);
        Primitive(d, self.1 / d, self.2 / d, self.3 / d, pg)
    }

    /**
     * Evaluate the physical (unsplit) Euler flux along the given direction.
     */
    pub fn flux_vector(&self, direction: Direction, model: &Model) -> Conserved {
        let d = self.mass_density();
        let vn = self.momentum(direction) / d;
        let pg = self.gas_pressure(model);

        Conserved(
            self.0 * vn,
            self.1 * vn + pg * direction.along(Direction::X),
            self.2 * vn + pg * direction.along(Direction::Y),
            self.3 * vn + pg * direction.along(Direction::Z),
            (self.4 + pg) * vn)
    }
}




// ============================================================================
impl Primitive {

    pub fn new(d: f64, v1: f64, v2: f64, v3: f64, p: f64) -> Self {
        Self(d, v1, v2, v3, p)
    }

    pub fn write_to_slice(&self, prim: &mut [f64]) {
        prim[0] = self.0;
        prim[1] = self.1;
        prim[2] = self.2;
        prim[3] = self.3;
        prim[4] = self.4;
    }

    pub fn as_array(&self) -> [f64; 5] {
        [self.0, self.1, self.2, self.3, self.4]
    }

    pub fn mass_density(&self) -> f64 {
        self.0
    }

    pub fn velocity_1(&self) -> f64 {
        self.1
    }

    pub fn velocity_2(&self) -> f64 {
        self.2
    }

    pub fn velocity_3(&self) -> f64 {
        self.3
    }

    pub fn gas_pressure(&self) -> f64 {
        self.4
    }

    pub fn velocity_vector(&self) -> Vector3d {
        Vector3d::new(self.1, self.2, self.3)
    }

    pub fn velocity_squared(&self) -> f64 {
        self.1 * self.1 + self.2 * self.2 + self.3 * self.3
    }

    pub fn sound_speed_squared(&self, model: &Model) -> f64 {
        model.gamma() * self.gas_pressure() / self.mass_density()
    }

    /**
     * Return the temperature from the ideal gas law, p / (ρ R).
     */
    pub fn temperature(&self, model: &Model) -> f64 {
        self.gas_pressure() / (self.mass_density() * model.gas_constant())
    }

    pub fn to_conserved(&self, model: &Model) -> Conserved {
        let d   = self.mass_density();
        let p   = self.gas_pressure();
        let vsq = self.velocity_squared();

        Conserved(
            d,
            d * self.velocity_1(),
            d * self.velocity_2(),
            d * self.velocity_3(),
            d * vsq * 0.5 + p / (model.gamma() - 1.0)
        )
    }
}




// ============================================================================
impl Add<Conserved> for Conserved {
    type Output = Conserved;
    fn add(self, u: Self) -> Conserved {
        Conserved(self.0 + u.0, self.1 + u.1, self.2 + u.2, self.3 + u.3, self.4 + u.4)
    }
}

impl Sub<Conserved> for Conserved {
    type Output = Self;
    fn sub(self, u: Self) -> Self {
        Self(self.0 - u.0, self.1 - u.1, self.2 - u.2, self.3 - u.3, self.4 - u.4)
    }
}

impl From<Conserved> for StateVector {
    fn from(u: Conserved) -> Self {
        Vector::new(u.as_array())
    }
}

impl From<StateVector> for Conserved {
    fn from(u: StateVector) -> Self {
        Conserved(u[0], u[1], u[2], u[3], u[4])
    }
}




/**
 * Return the scalar offset of a node's conserved state in a flattened
 * buffer laid out by the given index map.
 */
pub fn state_offset<S: IndexMap>(index: Index3d, space: &S) -> usize {
    space.offset(index) * NUM_CONSERVED
}

/**
 * Recover the primitive state of the node at scalar offset `offset` in the
 * conserved buffer `u`.
 */
pub fn primitive_by_conservative(u: &[f64], offset: usize, model: &Model) -> Primitive {
    Conserved::at(u, offset).to_primitive(model)
}

/**
 * Write the conserved state equivalent to `prim` into `u`, at scalar offset
 * `offset`.
 */
pub fn conservative_by_primitive(prim: &Primitive, model: &Model, u: &mut [f64], offset: usize) {
    prim.to_conserved(model).write_to_slice(&mut u[offset..offset + NUM_CONSERVED])
}

pub fn compute_pressure(u: &[f64], offset: usize, model: &Model) -> f64 {
    Conserved::at(u, offset).gas_pressure(model)
}

pub fn compute_temperature(u: &[f64], offset: usize, model: &Model) -> f64 {
    Conserved::at(u, offset).temperature(model)
}

/**
 * Evaluate the physical Euler flux along `direction` at the node `index`.
 */
pub fn convective_flux<S: IndexMap>(
    direction: Direction,
    index: Index3d,
    u: &[f64],
    space: &S,
    model: &Model) -> Conserved
{
    Conserved::at(u, state_offset(index, space)).flux_vector(direction, model)
}
