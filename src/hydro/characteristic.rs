use super::eigen::{eigenvalues_and_left_eigenvectors, EigenMatrix};
use super::euler::{state_offset, Conserved, StateVector};
use super::geometry::Direction;
use crate::index_space::{Index3d, IndexMap};
use crate::model::Model;




/**
 * Wave speeds and wave amplitudes of the jump across one face. The
 * amplitudes `α = L ΔU` are the coordinates of the conserved-state jump in
 * the right eigenvector basis.
 */
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Characteristics {
    pub eigenvalues: StateVector,
    pub amplitudes: StateVector,
}




/**
 * Project a conserved-state jump onto the characteristic fields.
 */
pub fn decompose(left: &EigenMatrix, jump: StateVector) -> StateVector {
    *left * jump
}

/**
 * Synthesize a conserved-state jump from characteristic amplitudes; the
 * inverse of `decompose` when `right` pairs with the left eigenvectors.
 */
pub fn recompose(right: &EigenMatrix, amplitudes: StateVector) -> StateVector {
    *right * amplitudes
}

/**
 * Return the conserved-state jump `U(neighbor) - U(index)` across the face
 * between node `index` and its upper neighbor along `direction`.
 */
pub fn state_jump<S: IndexMap>(direction: Direction, index: Index3d, u: &[f64], space: &S) -> StateVector {
    let a = Conserved::at(u, state_offset(index, space));
    let b = Conserved::at(u, state_offset(direction.neighbor(index), space));
    (b - a).into()
}

/**
 * Compute the eigenvalues at the face between node `index` and its upper
 * neighbor along `direction`, along with the amplitudes of the state jump
 * across that face. Identical neighbor states give amplitudes of exactly
 * zero.
 */
pub fn eigenvalues_and_decomposition_coefficients<S: IndexMap>(
    direction: Direction,
    index: Index3d,
    u: &[f64],
    space: &S,
    model: &Model) -> Characteristics
{
    let jump = state_jump(direction, index, u, space);
    let (eigenvalues, left) = eigenvalues_and_left_eigenvectors(direction, index, u, space, model);

    Characteristics {
        eigenvalues,
        amplitudes: decompose(&left, jump),
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use approx::assert_abs_diff_eq;
    use super::*;
    use crate::hydro::eigen::{eigenvalues_and_left_eigenvectors, right_eigenvectors_at};
    use crate::hydro::euler::{conservative_by_primitive, Primitive, NUM_CONSERVED};
    use crate::index_space::{range3d, IndexSpace};

    fn model() -> Model {
        Model::ideal_gas(1.4, 1.0).unwrap()
    }

    fn two_node_line(direction: Direction, a: Primitive, b: Primitive, model: &Model) -> (IndexSpace, Vec<f64>) {
        let (dk, dj, di) = direction.unit_offset();
        let space = range3d(0..1 + dk, 0..1 + dj, 0..1 + di);
        let mut u = vec![0.0; space.len() * NUM_CONSERVED];
        conservative_by_primitive(&a, model, &mut u, state_offset((0, 0, 0), &space));
        conservative_by_primitive(&b, model, &mut u, state_offset(direction.unit_offset(), &space));
        (space, u)
    }

    #[test]
    fn identical_states_have_zero_amplitudes() {
        let model = model();
        let p = Primitive::new(1.3, 0.4, -0.2, 0.9, 2.0);
        for direction in Direction::ALL.iter().cloned() {
            let (space, u) = two_node_line(direction, p, p, &model);
            let c = eigenvalues_and_decomposition_coefficients(direction, (0, 0, 0), &u, &space, &model);
            assert_eq!(c.amplitudes, StateVector::zeros());
        }
    }

    #[test]
    fn quiescent_gas_has_acoustic_eigenvalues() {
        let model = model();
        let p = Primitive::new(1.0, 0.0, 0.0, 0.0, 1.0);
        let c = 1.4f64.sqrt();
        for direction in Direction::ALL.iter().cloned() {
            let (space, u) = two_node_line(direction, p, p, &model);
            let ch = eigenvalues_and_decomposition_coefficients(direction, (0, 0, 0), &u, &space, &model);
            assert_abs_diff_eq!(ch.eigenvalues[0], -c, epsilon = 1e-14);
            assert_abs_diff_eq!(ch.eigenvalues[4], c, epsilon = 1e-14);
            assert_eq!(ch.eigenvalues[2], 0.0);
        }
    }

    #[test]
    fn velocity_jump_decomposes_and_recombines() {
        let model = model();
        let a = Primitive::new(1.0, 1.0, 0.0, 0.0, 1.0);
        let b = Primitive::new(1.0, 2.0, 0.0, 0.0, 1.0);
        let direction = Direction::X;
        let (space, u) = two_node_line(direction, a, b, &model);
        let index = (0, 0, 0);

        let ch = eigenvalues_and_decomposition_coefficients(direction, index, &u, &space, &model);
        let jump = state_jump(direction, index, &u, &space);
        let (_, left) = eigenvalues_and_left_eigenvectors(direction, index, &u, &space, &model);
        let right = right_eigenvectors_at(direction, index, &u, &space, &model);

        assert!(ch.amplitudes.max_abs() > 0.0);
        assert_eq!(decompose(&left, jump), ch.amplitudes);
        assert!((recompose(&right, ch.amplitudes) - jump).max_abs() < 1e-12);

        // A pure velocity jump with no pressure jump drives the two acoustic
        // waves with equal and opposite strength; the shear waves are silent.
        assert_abs_diff_eq!(ch.amplitudes[0], -ch.amplitudes[4], epsilon = 1e-12);
        assert_abs_diff_eq!(ch.amplitudes[2], 0.0, epsilon = 1e-14);
        assert_abs_diff_eq!(ch.amplitudes[3], 0.0, epsilon = 1e-14);
    }

    #[test]
    fn arbitrary_jumps_recombine_in_every_direction() {
        let model = model();
        let a = Primitive::new(1.2, 0.3, -0.4, 0.7, 1.1);
        let b = Primitive::new(0.8, -0.2, 0.5, 0.1, 0.6);
        for direction in Direction::ALL.iter().cloned() {
            let (space, u) = two_node_line(direction, a, b, &model);
            let ch = eigenvalues_and_decomposition_coefficients(direction, (0, 0, 0), &u, &space, &model);
            let right = right_eigenvectors_at(direction, (0, 0, 0), &u, &space, &model);
            let jump = state_jump(direction, (0, 0, 0), &u, &space);
            assert!((recompose(&right, ch.amplitudes) - jump).max_abs() < 1e-12);
        }
    }
}
