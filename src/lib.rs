//! Eigenflux is the characteristic-decomposition and flux kernel of a
//! finite-volume solver for the 3D compressible Euler equations. For a node
//! of a structured grid and an axis direction it converts between conserved
//! and primitive states, forms Roe averages across faces, evaluates the
//! eigenvalues and left and right eigenvectors of the flux Jacobian,
//! projects state jumps onto the characteristic fields, and produces split
//! and unsplit convective fluxes. Grid-wide parallel sweeps of these kernels
//! are provided over rectangular patches of conserved data.

pub mod hydro;
pub mod index_space;
pub mod mesh;
pub mod model;
pub mod num_vec;
pub mod patch;
pub mod sweep;
