//! Kernels for the 3D Euler equations of an ideal gas: conversion between
//! conserved and primitive variables, Roe averaging, the characteristic
//! eigenstructure along each axis, characteristic projection of state
//! jumps, flux vector splitting, and the raw convective flux.
//!
//! Every kernel is a pure function of a borrowed conserved-variable buffer
//! and a borrowed `Model`; none of them allocate or keep state.

pub mod admissible;
pub mod characteristic;
pub mod eigen;
pub mod error;
pub mod euler;
pub mod geometry;
pub mod roe;
pub mod splitting;
