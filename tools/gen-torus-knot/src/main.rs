//! gen-torus-knot - torus-knot calibration model generator
//!
//! Emits the parametric (p,q) torus-knot test mesh as an OBJ file for the
//! visual calibration workflow. Configuration is explicit on the command
//! line; there are no interactive prompts, and identical flags always
//! produce byte-identical output.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use knot_mesh::{generate, write_obj, KnotConfig};

#[derive(Parser)]
#[command(name = "gen-torus-knot")]
#[command(about = "Generate a (p,q) torus-knot OBJ calibration model")]
#[command(version)]
struct Cli {
    /// Windings around the torus axis of symmetry
    #[arg(short, default_value_t = 3)]
    p: u32,

    /// Windings around the torus tube
    #[arg(short, default_value_t = 2)]
    q: u32,

    /// Segments along the knot path
    #[arg(long, default_value_t = 128)]
    path_segments: u32,

    /// Segments around the tube cross-section
    #[arg(long, default_value_t = 32)]
    tube_segments: u32,

    /// Distance from the torus center to the path circle
    #[arg(long, default_value_t = 1.0)]
    torus_radius: f64,

    /// Radius of the swept cross-section
    #[arg(long, default_value_t = 0.3)]
    tube_radius: f64,

    /// Output OBJ path
    #[arg(short, long, default_value = "torus-knot.obj")]
    output: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let config = KnotConfig {
        p: cli.p,
        q: cli.q,
        torus_radius: cli.torus_radius,
        tube_radius: cli.tube_radius,
        path_segments: cli.path_segments,
        tube_segments: cli.tube_segments,
    };

    let mesh = generate(&config)?;

    println!("  Generating: {}", cli.output.display());
    write_obj(&mesh, &cli.output, &config)
        .with_context(|| format!("Failed to write OBJ: {:?}", cli.output))?;

    println!(
        "    -> {} ({} verts, {} faces)",
        cli.output.display(),
        mesh.vertex_count(),
        mesh.face_count()
    );

    Ok(())
}
