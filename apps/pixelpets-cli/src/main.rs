use clap::{Parser, Subcommand};
use glam::Vec3;
use pixelpets_common::{ShapeKind, ViewerConfig};
use pixelpets_input::CameraAction;
use pixelpets_mesh::{Mesh, build_shape, create_ground};
use pixelpets_render::{FrameView, HeadlessBackend, OrbitCamera, Projection, Scene};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pixelpets-cli", about = "Inspect pixelpets meshes and frames")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Scene configuration (.yaml, .yml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Box, vertex and triangle counts plus bounds for every shape
    Shapes {
        /// Creature scale
        #[arg(short, long, default_value = "1.0")]
        scale: f32,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Apply one camera action repeatedly and print the orbit state
    Orbit {
        /// rotate-left, rotate-right, rotate-up, rotate-down, zoom-in or zoom-out
        #[arg(short, long, value_parser = parse_action)]
        action: CameraAction,
        /// Number of frames to apply the action for
        #[arg(short = 'n', long, default_value = "10")]
        steps: u32,
        /// Frame time in seconds
        #[arg(long, default_value = "0.1")]
        dt: f32,
    },
    /// Build the configured scene, draw one frame headless and list the draws
    Frame,
}

fn parse_action(name: &str) -> Result<CameraAction, String> {
    CameraAction::from_name(name).ok_or_else(|| {
        let known: Vec<_> = CameraAction::ALL.iter().map(|a| a.name()).collect();
        format!("unknown action {name:?}, expected one of: {}", known.join(", "))
    })
}

#[derive(Debug, Serialize)]
struct ShapeStats {
    name: String,
    boxes: usize,
    vertices: usize,
    triangles: usize,
    min: [f32; 3],
    max: [f32; 3],
}

impl ShapeStats {
    fn of(name: impl Into<String>, mesh: &Mesh) -> Self {
        let (min, max) = mesh.bounds().unwrap_or((Vec3::ZERO, Vec3::ZERO));
        Self {
            name: name.into(),
            boxes: mesh.box_count(),
            vertices: mesh.len(),
            triangles: mesh.triangle_count(),
            min: min.to_array(),
            max: max.to_array(),
        }
    }
}

fn shape_stats(config: &ViewerConfig, scale: f32) -> Vec<ShapeStats> {
    let scene = &config.scene;
    let ground = create_ground(scene.ground_width, scene.ground_depth, scene.ground_color);
    let mut stats = vec![ShapeStats::of("ground", &ground)];
    stats.extend(
        ShapeKind::ALL
            .into_iter()
            .map(|kind| ShapeStats::of(kind.name(), &build_shape(kind, Vec3::ZERO, scale))),
    );
    stats
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = ViewerConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Info => {
            println!("pixelpets-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", pixelpets_render::crate_info());
            println!(
                "shapes: {}",
                ShapeKind::ALL.map(ShapeKind::name).join(", ")
            );
            println!(
                "actions: {}",
                CameraAction::ALL.map(CameraAction::name).join(", ")
            );
        }
        Commands::Shapes { scale, json } => {
            anyhow::ensure!(scale > 0.0, "scale must be positive, got {scale}");
            let stats = shape_stats(&config, scale);
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!(
                    "{:<8} {:>6} {:>9} {:>10}  bounds",
                    "shape", "boxes", "vertices", "triangles"
                );
                for s in &stats {
                    println!(
                        "{:<8} {:>6} {:>9} {:>10}  ({:.2}, {:.2}, {:.2})..({:.2}, {:.2}, {:.2})",
                        s.name,
                        s.boxes,
                        s.vertices,
                        s.triangles,
                        s.min[0],
                        s.min[1],
                        s.min[2],
                        s.max[0],
                        s.max[1],
                        s.max[2]
                    );
                }
            }
        }
        Commands::Orbit { action, steps, dt } => {
            let mut camera = OrbitCamera::from_config(&config.camera);
            println!("Orbit: action={} steps={steps} dt={dt}", action.name());
            for _ in 0..steps {
                camera.apply(action, dt);
            }
            let eye = camera.position();
            println!(
                "radius={:.3} yaw={:.2} pitch={:.2} eye=({:.3}, {:.3}, {:.3})",
                camera.radius(),
                camera.yaw(),
                camera.pitch(),
                eye.x,
                eye.y,
                eye.z
            );
        }
        Commands::Frame => {
            let mut backend = HeadlessBackend::new();
            let mut scene = Scene::from_config(&config.scene);
            scene.finalize(&mut backend);
            scene.draw(&mut backend);

            let camera = OrbitCamera::from_config(&config.camera);
            let projection =
                Projection::from_config(&config.camera, config.window.width, config.window.height);
            print!("{}", backend.report(&FrameView::new(&camera, &projection)));
        }
    }

    Ok(())
}
