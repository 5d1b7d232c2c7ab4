//! Eigenstructure of the Euler flux Jacobian along each coordinate axis,
//! evaluated at a Roe-averaged face state.
//!
//! Eigenvalues are ordered `{vn - c, vn, vn, vn, vn + c}`: the left-running
//! acoustic wave, three linearly degenerate waves, and the right-running
//! acoustic wave. Among the degenerate waves, the one sitting in the slot of
//! the normal momentum component is the entropy wave and the other two are
//! shear waves carrying the tangential velocity components. With `q =
//! |v|²/2`, `b = (γ - 1) / 2c²` and `d = 1 / 2c`, the left eigenvector rows
//! and right eigenvector columns below satisfy `R L = I`.
//!
//! The three axis variants are the same structure with the normal and
//! tangential roles permuted; `Direction` selects one with a `match`.

use super::euler::{state_offset, StateVector, NUM_CONSERVED};
use super::geometry::Direction;
use super::roe::{compute_roe_average, RoeAverage};
use crate::index_space::{Index3d, IndexMap};
use crate::model::Model;
use crate::num_vec::{Matrix, Vector};




/** A 5x5 matrix whose rows (left) or columns (right) are eigenvectors. */
pub type EigenMatrix = Matrix<NUM_CONSERVED>;




/**
 * Return the eigenvalues of the flux Jacobian along `direction`.
 */
pub fn eigenvalues(roe: &RoeAverage, direction: Direction) -> StateVector {
    let vn = roe.normal_velocity(direction);
    let c = roe.sound_speed();
    Vector::new([vn - c, vn, vn, vn, vn + c])
}




/**
 * Return the matrix whose rows are the left eigenvectors of the flux
 * Jacobian along `direction`, ordered like the eigenvalues.
 */
pub fn left_eigenvectors(roe: &RoeAverage, direction: Direction, model: &Model) -> EigenMatrix {
    let v = roe.velocity();
    let u = v.component(Direction::X);
    let w = v.component(Direction::Z);
    let v = v.component(Direction::Y);
    let c = roe.sound_speed();
    let q = roe.kinetic_energy();
    let b = (model.gamma() - 1.0) / (2.0 * c * c);
    let d = 1.0 / (2.0 * c);

    match direction {
        Direction::X => Matrix::from_rows([
            [b * q + d * u,      -b * u - d,         -b * v,             -b * w,             b],
            [-2.0 * b * q + 1.0,  2.0 * b * u,        2.0 * b * v,        2.0 * b * w,      -2.0 * b],
            [-2.0 * b * q * v,    2.0 * b * v * u,    2.0 * b * v * v + 1.0, 2.0 * b * w * v, -2.0 * b * v],
            [-2.0 * b * q * w,    2.0 * b * w * u,    2.0 * b * w * v,    2.0 * b * w * w + 1.0, -2.0 * b * w],
            [b * q - d * u,      -b * u + d,         -b * v,             -b * w,             b],
        ]),
        Direction::Y => Matrix::from_rows([
            [b * q + d * v,      -b * u,             -b * v - d,         -b * w,             b],
            [-2.0 * b * q * u,    2.0 * b * u * u + 1.0, 2.0 * b * v * u, 2.0 * b * w * u,  -2.0 * b * u],
            [-2.0 * b * q + 1.0,  2.0 * b * u,        2.0 * b * v,        2.0 * b * w,      -2.0 * b],
            [-2.0 * b * q * w,    2.0 * b * w * u,    2.0 * b * w * v,    2.0 * b * w * w + 1.0, -2.0 * b * w],
            [b * q - d * v,      -b * u,             -b * v + d,         -b * w,             b],
        ]),
        Direction::Z => Matrix::from_rows([
            [b * q + d * w,      -b * u,             -b * v,             -b * w - d,         b],
            [-2.0 * b * q * u,    2.0 * b * u * u + 1.0, 2.0 * b * v * u, 2.0 * b * w * u,  -2.0 * b * u],
            [-2.0 * b * q * v,    2.0 * b * v * u,    2.0 * b * v * v + 1.0, 2.0 * b * w * v, -2.0 * b * v],
            [-2.0 * b * q + 1.0,  2.0 * b * u,        2.0 * b * v,        2.0 * b * w,      -2.0 * b],
            [b * q - d * w,      -b * u,             -b * v,             -b * w + d,         b],
        ]),
    }
}




/**
 * Return the matrix whose columns are the right eigenvectors of the flux
 * Jacobian along `direction`, ordered like the eigenvalues.
 */
pub fn right_eigenvectors(roe: &RoeAverage, direction: Direction) -> EigenMatrix {
    let v = roe.velocity();
    let u = v.component(Direction::X);
    let w = v.component(Direction::Z);
    let v = v.component(Direction::Y);
    let ht = roe.total_enthalpy();
    let c = roe.sound_speed();
    let q = roe.kinetic_energy();

    match direction {
        Direction::X => Matrix::from_rows([
            [1.0,         1.0,       0.0, 0.0, 1.0],
            [u - c,       u,         0.0, 0.0, u + c],
            [v,           0.0,       1.0, 0.0, v],
            [w,           0.0,       0.0, 1.0, w],
            [ht - u * c,  u * u - q, v,   w,   ht + u * c],
        ]),
        Direction::Y => Matrix::from_rows([
            [1.0,         0.0, 1.0,       0.0, 1.0],
            [u,           1.0, 0.0,       0.0, u],
            [v - c,       0.0, v,         0.0, v + c],
            [w,           0.0, 0.0,       1.0, w],
            [ht - v * c,  u,   v * v - q, w,   ht + v * c],
        ]),
        Direction::Z => Matrix::from_rows([
            [1.0,         0.0, 0.0, 1.0,       1.0],
            [u,           1.0, 0.0, 0.0,       u],
            [v,           0.0, 1.0, 0.0,       v],
            [w - c,       0.0, 0.0, w,         w + c],
            [ht - w * c,  u,   v,   w * w - q, ht + w * c],
        ]),
    }
}




/**
 * Compute the Roe average at the face between node `index` and its upper
 * neighbor along `direction`.
 */
pub fn face_average<S: IndexMap>(
    direction: Direction,
    index: Index3d,
    u: &[f64],
    space: &S,
    model: &Model) -> RoeAverage
{
    let l = state_offset(index, space);
    let r = state_offset(direction.neighbor(index), space);
    compute_roe_average(u, l, r, model)
}




/**
 * Return the eigenvalues and left eigenvectors of the flux Jacobian along
 * `direction`, evaluated at the face between node `index` and its upper
 * neighbor.
 */
pub fn eigenvalues_and_left_eigenvectors<S: IndexMap>(
    direction: Direction,
    index: Index3d,
    u: &[f64],
    space: &S,
    model: &Model) -> (StateVector, EigenMatrix)
{
    let roe = face_average(direction, index, u, space, model);
    (eigenvalues(&roe, direction), left_eigenvectors(&roe, direction, model))
}




/**
 * Return the right eigenvectors of the flux Jacobian along `direction`,
 * evaluated at the face between node `index` and its upper neighbor.
 */
pub fn right_eigenvectors_at<S: IndexMap>(
    direction: Direction,
    index: Index3d,
    u: &[f64],
    space: &S,
    model: &Model) -> EigenMatrix
{
    right_eigenvectors(&face_average(direction, index, u, space, model), direction)
}
