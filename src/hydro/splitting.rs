use super::euler::{state_offset, Conserved, StateVector};
use super::geometry::Direction;
use crate::index_space::{Index3d, IndexMap};
use crate::model::Model;
use crate::num_vec::Vector;




/**
 * The node state in the form consumed by the split-flux assembly: the
 * scaled density ρ/2γ, the velocity, the specific enthalpy h = c²/(γ - 1),
 * and the sound speed c.
 */
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplittingState {
    scaled_density: f64,
    velocity: [f64; 3],
    enthalpy: f64,
    sound_speed: f64,
}




/**
 * Positive and negative parts of the convective flux at a node. Their sum
 * is the physical flux.
 */
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitFlux {
    pub plus: Conserved,
    pub minus: Conserved,
}




// ============================================================================
impl SplittingState {

    pub fn from_conserved(u: &Conserved, model: &Model) -> Self {
        let gamma = model.gamma();
        let prim = u.to_primitive(model);
        let c = prim.sound_speed_squared(model).sqrt();

        Self {
            scaled_density: prim.mass_density() / (2.0 * gamma),
            velocity: [prim.velocity_1(), prim.velocity_2(), prim.velocity_3()],
            enthalpy: c * c / (gamma - 1.0),
            sound_speed: c,
        }
    }

    pub fn normal_velocity(&self, direction: Direction) -> f64 {
        self.velocity[direction.momentum_slot() - 1]
    }

    pub fn sound_speed(&self) -> f64 {
        self.sound_speed
    }

    pub fn eigenvalues(&self, direction: Direction) -> StateVector {
        let vn = self.normal_velocity(direction);
        let c = self.sound_speed;
        Vector::new([vn - c, vn, vn, vn, vn + c])
    }

    /**
     * Assemble the flux carried by the given set of wave speeds. The result
     * is linear in the wave speeds, so assembling from `λ⁺` and `λ⁻` and
     * adding gives the flux assembled from `λ`, which is the physical flux.
     */
    pub fn assemble_flux(&self, lambda: &StateVector, direction: Direction, model: &Model) -> Conserved {
        let rho = self.scaled_density;
        let [u, v, w] = self.velocity;
        let h = self.enthalpy;
        let c = self.sound_speed;
        let n = direction.momentum_slot();
        let vn = self.normal_velocity(direction);
        let acoustic_sum = lambda[0] + lambda[4];
        let acoustic_difference = lambda[4] - lambda[0];

        let f0 = rho * (lambda[0] + 2.0 * (model.gamma() - 1.0) * lambda[n] + lambda[4]);
        let normal = rho * c * acoustic_difference;

        Conserved::new(
            f0,
            f0 * u + normal * direction.along(Direction::X),
            f0 * v + normal * direction.along(Direction::Y),
            f0 * w + normal * direction.along(Direction::Z),
            f0 * 0.5 * (u * u + v * v + w * w) + rho * (h * acoustic_sum + vn * c * acoustic_difference))
    }
}




/**
 * Split each eigenvalue into its non-negative part `(λ + |λ|) / 2` and its
 * non-positive part `(λ - |λ|) / 2`.
 */
pub fn split_eigenvalues(lambda: &StateVector) -> (StateVector, StateVector) {
    (lambda.map(|l| 0.5 * (l + l.abs())), lambda.map(|l| 0.5 * (l - l.abs())))
}




// ============================================================================
impl SplitFlux {

    /**
     * Split the convective flux of the conserved state `u` along
     * `direction`.
     */
    pub fn of(u: &Conserved, direction: Direction, model: &Model) -> Self {
        let state = SplittingState::from_conserved(u, model);
        let (plus, minus) = split_eigenvalues(&state.eigenvalues(direction));

        Self {
            plus: state.assemble_flux(&plus, direction, model),
            minus: state.assemble_flux(&minus, direction, model),
        }
    }

    pub fn total(&self) -> Conserved {
        self.plus + self.minus
    }
}




/**
 * Split the convective flux along `direction` at the node `index`.
 */
pub fn flux_vector_splitting<S: IndexMap>(
    direction: Direction,
    index: Index3d,
    u: &[f64],
    space: &S,
    model: &Model) -> SplitFlux
{
    SplitFlux::of(&Conserved::at(u, state_offset(index, space)), direction, model)
}
