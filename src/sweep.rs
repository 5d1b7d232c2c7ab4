//! Grid-wide evaluation of the node and face kernels. Each sweep collects
//! the nodes of a region and evaluates a kernel on all of them in parallel
//! with rayon; every worker writes its own disjoint chunk of the output
//! patches, and the conserved-variable patch is only borrowed.

use log::debug;
use rayon::prelude::*;
use crate::hydro::characteristic::eigenvalues_and_decomposition_coefficients;
use crate::hydro::euler::{convective_flux, NUM_CONSERVED};
use crate::hydro::geometry::Direction;
use crate::hydro::splitting::flux_vector_splitting;
use crate::index_space::{Index3d, IndexSpace};
use crate::model::Model;
use crate::patch::Patch;




fn validate_state(state: &Patch, region: &IndexSpace) {
    if state.num_fields() != NUM_CONSERVED {
        panic!("state patch has {} fields, expected {}", state.num_fields(), NUM_CONSERVED);
    }
    if !state.index_space().contains_space(region) {
        panic!("sweep region {:?} is not inside the state patch {:?}", region, state.index_space());
    }
}

fn nodes(region: &IndexSpace) -> Vec<Index3d> {
    region.iter().collect()
}




/**
 * Split the convective flux along `direction` at every node of `region`.
 * Returns the patches of positive and negative fluxes, each covering
 * `region`.
 */
pub fn split_flux_sweep(state: &Patch, region: &IndexSpace, direction: Direction, model: &Model) -> (Patch, Patch) {
    validate_state(state, region);

    let space = state.index_space();
    let u = state.data();
    let indexes = nodes(region);
    let mut plus = Patch::zeros(NUM_CONSERVED, region.clone());
    let mut minus = Patch::zeros(NUM_CONSERVED, region.clone());

    plus.data_mut()
        .par_chunks_mut(NUM_CONSERVED)
        .zip(minus.data_mut().par_chunks_mut(NUM_CONSERVED))
        .zip(indexes.par_iter())
        .for_each(|((fp, fm), index)| {
            let split = flux_vector_splitting(direction, *index, u, &space, model);
            split.plus.write_to_slice(fp);
            split.minus.write_to_slice(fm);
        });

    debug!("split flux along {:?} at {} nodes", direction, indexes.len());
    (plus, minus)
}




/**
 * Evaluate the physical convective flux along `direction` at every node of
 * `region`.
 */
pub fn convective_flux_sweep(state: &Patch, region: &IndexSpace, direction: Direction, model: &Model) -> Patch {
    validate_state(state, region);

    let space = state.index_space();
    let u = state.data();
    let indexes = nodes(region);
    let mut flux = Patch::zeros(NUM_CONSERVED, region.clone());

    flux.data_mut()
        .par_chunks_mut(NUM_CONSERVED)
        .zip(indexes.par_iter())
        .for_each(|(f, index)| {
            convective_flux(direction, *index, u, &space, model).write_to_slice(f)
        });

    debug!("convective flux along {:?} at {} nodes", direction, indexes.len());
    flux
}




/**
 * Decompose the state jump across the face between each node of `region`
 * and its upper neighbor along `direction`. Returns the patches of face
 * eigenvalues and characteristic amplitudes, each covering `region`. The
 * upper neighbor of every node in `region` must be inside the state patch.
 */
pub fn characteristic_sweep(state: &Patch, region: &IndexSpace, direction: Direction, model: &Model) -> (Patch, Patch) {
    validate_state(state, region);

    let space = state.index_space();

    if !space.trim_upper(1, direction).contains_space(region) {
        panic!("faces of sweep region {:?} along {:?} reach outside the state patch", region, direction);
    }

    let u = state.data();
    let indexes = nodes(region);
    let mut eigenvalues = Patch::zeros(NUM_CONSERVED, region.clone());
    let mut amplitudes = Patch::zeros(NUM_CONSERVED, region.clone());

    eigenvalues.data_mut()
        .par_chunks_mut(NUM_CONSERVED)
        .zip(amplitudes.data_mut().par_chunks_mut(NUM_CONSERVED))
        .zip(indexes.par_iter())
        .for_each(|((l, a), index)| {
            let ch = eigenvalues_and_decomposition_coefficients(direction, *index, u, &space, model);
            l.copy_from_slice(&ch.eigenvalues.as_array());
            a.copy_from_slice(&ch.amplitudes.as_array());
        });

    let max_wavespeed = eigenvalues.data().iter().fold(0.0, |a: f64, b| a.max(b.abs()));
    debug!("characteristics along {:?} at {} faces, max wavespeed {:.6e}", direction, indexes.len(), max_wavespeed);
    (eigenvalues, amplitudes)
}




// ============================================================================
#[cfg(test)]
mod test {

    use approx::assert_abs_diff_eq;
    use super::*;
    use crate::hydro::euler::Primitive;
    use crate::index_space::range3d;

    fn model() -> Model {
        Model::ideal_gas(1.4, 1.0).unwrap()
    }

    fn state(model: &Model) -> Patch {
        Patch::from_slice_function(range3d(0..3, 0..4, 0..5), NUM_CONSERVED, |(k, j, i), u| {
            let p = Primitive::new(
                1.0 + 0.1 * i as f64,
                0.2 * j as f64,
                -0.1 * k as f64,
                0.3,
                1.0 + 0.05 * (i + j + k) as f64);
            p.to_conserved(model).write_to_slice(u)
        })
    }

    #[test]
    fn split_flux_sweep_matches_the_node_kernel() {
        let model = model();
        let state = state(&model);
        let space = state.index_space();
        let region = space.trim_all(1);

        for direction in Direction::ALL.iter().cloned() {
            let (plus, minus) = split_flux_sweep(&state, &region, direction, &model);
            assert_eq!(plus.index_space(), region);

            for index in region.iter() {
                let split = flux_vector_splitting(direction, index, state.data(), &space, &model);
                assert_eq!(plus.get_slice(index), &split.plus.as_array());
                assert_eq!(minus.get_slice(index), &split.minus.as_array());
            }
        }
    }

    #[test]
    fn convective_flux_sweep_equals_the_sum_of_split_fluxes() {
        let model = model();
        let state = state(&model);
        let region = state.index_space();
        let flux = convective_flux_sweep(&state, &region, Direction::Y, &model);
        let (plus, minus) = split_flux_sweep(&state, &region, Direction::Y, &model);

        for ((f, p), m) in flux.data().iter().zip(plus.data()).zip(minus.data()) {
            assert_abs_diff_eq!(*f, p + m, epsilon = 1e-12 * (1.0 + f.abs()));
        }
    }

    #[test]
    fn characteristic_sweep_matches_the_face_kernel() {
        let model = model();
        let state = state(&model);
        let space = state.index_space();

        for direction in Direction::ALL.iter().cloned() {
            let region = space.trim_upper(1, direction);
            let (eigenvalues, amplitudes) = characteristic_sweep(&state, &region, direction, &model);

            for index in region.iter() {
                let ch = eigenvalues_and_decomposition_coefficients(direction, index, state.data(), &space, &model);
                assert_eq!(eigenvalues.get_slice(index), &ch.eigenvalues.as_array());
                assert_eq!(amplitudes.get_slice(index), &ch.amplitudes.as_array());
            }
        }
    }

    #[test]
    fn uniform_state_has_no_characteristic_amplitudes() {
        let model = model();
        let p = Primitive::new(1.0, 0.5, 0.0, 0.0, 1.0);
        let state = Patch::from_slice_function(range3d(0..2, 0..2, 0..2), NUM_CONSERVED, |_, u| {
            p.to_conserved(&model).write_to_slice(u)
        });
        let region = state.index_space().trim_upper(1, Direction::Z);
        let (_, amplitudes) = characteristic_sweep(&state, &region, Direction::Z, &model);
        assert!(amplitudes.data().iter().all(|a| *a == 0.0));
    }

    #[test]
    #[should_panic]
    fn characteristic_sweep_rejects_faces_outside_the_patch() {
        let model = model();
        let state = state(&model);
        let region = state.index_space();
        characteristic_sweep(&state, &region, Direction::X, &model);
    }
}
