use std::error::Error;
use clap::Parser;
use log::{info, Level};
use eigenflux::hydro::admissible::{check_patch, check_roe_radicand};
use eigenflux::hydro::euler::{
    compute_pressure,
    compute_temperature,
    primitive_by_conservative,
    state_offset,
    Conserved,
    Primitive,
    NUM_CONSERVED,
};
use eigenflux::hydro::geometry::Direction;
use eigenflux::hydro::roe::compute_roe_average;
use eigenflux::mesh::Mesh;
use eigenflux::model::Model;
use eigenflux::patch::Patch;
use eigenflux::sweep::{characteristic_sweep, convective_flux_sweep, split_flux_sweep};




#[derive(Debug, Parser)]
#[clap(version = "0.1", author = "J. Zrake <jzrake@clemson.edu>")]
struct Opts {
    #[clap(short = 'g', long, default_value = "1.4")]
    gamma: f64,

    #[clap(short = 'r', long, default_value = "1.0")]
    gas_constant: f64,

    #[clap(short = 'm', long, help = "CBOR file holding the gas model; overrides -g and -r")]
    model: Option<String>,

    #[clap(short = 'n', long, default_value = "64")]
    resolution: i64,

    #[clap(short = 'p', long, default_value = "0.25")]
    probe: f64,

    #[clap(short = 'o', long, default_value = "shock_tube.cbor")]
    output: String,

    #[clap(short = 'v', long)]
    verbose: bool,
}




#[derive(serde::Serialize)]


/**
 * Diagnostics of the sweeps along one axis
 */
struct DirectionSummary {
    direction: Direction,
    max_wavespeed: f64,
    max_amplitude: f64,
    split_flux_defect: f64,
}




#[derive(serde::Serialize)]


/**
 * The primitive state and the face average at chosen nodes
 */
struct ProbeSummary {
    index: (i64, i64, i64),
    primitive: [f64; 5],
    pressure: f64,
    temperature: f64,
    diaphragm_roe_sound_speed: f64,
    diaphragm_roe_enthalpy: f64,
}




#[derive(serde::Serialize)]
struct Summary {
    model: Model,
    mesh: Mesh,
    directions: Vec<DirectionSummary>,
    probe: ProbeSummary,
    conserved: Patch,
    primitive: Patch,
}




fn max_abs(data: &[f64]) -> f64 {
    data.iter().fold(0.0, |a: f64, b| a.max(b.abs()))
}




// ============================================================================
fn main() -> Result<(), Box<dyn Error>> {
    let opts = Opts::parse();

    simple_logger::init_with_level(if opts.verbose { Level::Debug } else { Level::Info })?;
    info!("{:?}", opts);

    let model = match &opts.model {
        Some(path) => Model::from_reader(std::io::BufReader::new(std::fs::File::open(path)?))?,
        None => Model::ideal_gas(opts.gamma, opts.gas_constant)?,
    };

    if opts.resolution < 1 {
        return Err(format!("resolution must be at least 1, got {}", opts.resolution).into());
    }
    let width = 4.0 / opts.resolution as f64;
    let mesh = Mesh::new((0.0..1.0, 0.0..width, 0.0..width), (opts.resolution, 4, 4), 1)?;

    let interior = mesh.index_space();
    let diaphragm = mesh.node_index(0.5, Direction::X);
    let left = Primitive::new(1.0, 0.0, 0.0, 0.0, 1.0);
    let right = Primitive::new(0.125, 0.0, 0.0, 0.0, 0.1);

    let state = Patch::from_slice_function(mesh.extended_index_space(), NUM_CONSERVED, |(_, _, i), u| {
        if i < diaphragm {
            left.to_conserved(&model).write_to_slice(u)
        } else {
            right.to_conserved(&model).write_to_slice(u)
        }
    });
    check_patch(&state, &model)?;

    let space = state.index_space();
    let u = state.data();
    let mut directions = Vec::new();

    for direction in Direction::ALL.iter().cloned() {
        let (plus, minus) = split_flux_sweep(&state, &interior, direction, &model);
        let flux = convective_flux_sweep(&state, &interior, direction, &model);
        let (eigenvalues, amplitudes) = characteristic_sweep(&state, &interior, direction, &model);

        let defect: Vec<f64> = flux.data()
            .iter()
            .zip(plus.data().iter().zip(minus.data()))
            .map(|(f, (p, m))| f - p - m)
            .collect();

        let summary = DirectionSummary {
            direction,
            max_wavespeed: max_abs(eigenvalues.data()),
            max_amplitude: max_abs(amplitudes.data()),
            split_flux_defect: max_abs(&defect),
        };
        info!("{:?}: max wavespeed {:.4} max amplitude {:.4} split flux defect {:.3e}",
            direction,
            summary.max_wavespeed,
            summary.max_amplitude,
            summary.split_flux_defect);
        directions.push(summary);
    }

    let (k0, j0, _) = interior.start();
    let probe = mesh.clamp_to(mesh.node_index(opts.probe, Direction::X), Direction::X, &interior);
    let index = (k0, j0, probe);
    let offset = state_offset(index, &space);

    let roe = compute_roe_average(
        u,
        state_offset((k0, j0, diaphragm - 1), &space),
        state_offset((k0, j0, diaphragm), &space),
        &model);
    check_roe_radicand(&roe, &model)?;

    let probe = ProbeSummary {
        index,
        primitive: primitive_by_conservative(u, offset, &model).as_array(),
        pressure: compute_pressure(u, offset, &model),
        temperature: compute_temperature(u, offset, &model),
        diaphragm_roe_sound_speed: roe.sound_speed(),
        diaphragm_roe_enthalpy: roe.total_enthalpy(),
    };
    info!("probe at {:?}: p={:.4} T={:.4}", probe.index, probe.pressure, probe.temperature);

    let primitive = state.map(NUM_CONSERVED, |u, p| {
        Conserved::from_slice(u).to_primitive(&model).write_to_slice(p)
    });

    let summary = Summary {
        model,
        mesh,
        directions,
        probe,
        conserved: state,
        primitive,
    };

    let file = std::fs::File::create(&opts.output)?;
    let mut buffer = std::io::BufWriter::new(file);
    ciborium::ser::into_writer(&summary, &mut buffer).map_err(|e| e.to_string())?;
    info!("wrote {}", opts.output);

    Ok(())
}
