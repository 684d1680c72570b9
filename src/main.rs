use viewmath::{
    camera::Camera,
    math::{Deg, Euler, Vector3},
};

use anyhow::{ensure, Context};
use clap::Parser;

/// Prints the world space ray covered by a screen pixel.
///
/// Run with RUST_LOG=debug to see logging output.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Screen width in pixels
    #[arg(long, default_value_t = 800.)]
    width: f64,

    /// Screen height in pixels
    #[arg(long, default_value_t = 600.)]
    height: f64,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 60.)]
    fov: f64,

    /// Distance to the near clipping plane
    #[arg(long, default_value_t = 0.1)]
    near: f64,

    /// Distance to the far clipping plane
    #[arg(long, default_value_t = 100.)]
    far: f64,

    /// Camera position as X,Y,Z
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    position: Option<Vec<f64>>,

    /// Camera rotation about the x, y and z axis in degrees as X,Y,Z
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    rotation: Option<Vec<f64>>,

    /// Horizontal pixel coordinate, growing to the right
    #[arg(allow_negative_numbers = true)]
    screen_x: f64,

    /// Vertical pixel coordinate, growing downwards
    #[arg(allow_negative_numbers = true)]
    screen_y: f64,
}

fn to_triple(values: Option<Vec<f64>>, what: &str) -> Result<Option<[f64; 3]>, anyhow::Error> {
    values
        .map(|values| <[f64; 3]>::try_from(values))
        .transpose()
        .map_err(|values| anyhow::anyhow!("expected 3 values, got {}", values.len()))
        .with_context(|| format!("Failed to parse {what}"))
}

fn run(args: Args) -> Result<(), anyhow::Error> {
    ensure!(args.width > 0. && args.height > 0., "screen size must be positive");
    ensure!(args.near < args.far, "near plane must be in front of the far plane");

    let mut cam = Camera::new(args.width, args.height, Deg(args.fov), args.near, args.far);
    if let Some(position) = to_triple(args.position, "position")? {
        cam.position = Vector3::from(position);
    }
    if let Some([x, y, z]) = to_triple(args.rotation, "rotation")? {
        cam.rot_axis = Euler::new(Deg(x), Deg(y), Deg(z));
    }
    cam.setup_model_view();
    log::debug!("Projection:\n{}", cam.projection);
    log::debug!("Model view:\n{}", cam.model_view);

    let ray = cam.unproject_line(args.screen_x, args.screen_y);
    println!("near: {}", ray.start);
    println!("far:  {}", ray.end);
    println!("direction: {}", ray.direction());
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Args::parse()) {
        log::error!("Error while unprojecting: {err}");
        log::error!("{err:#?}");
        std::process::exit(1);
    }
}
