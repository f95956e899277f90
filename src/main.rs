use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use structopt::StructOpt;

use whitted::{RenderEngine, Scene};

#[derive(Debug, StructOpt)]
#[structopt(name = "whitted", about = "Renders a JSON scene by recursive ray tracing.")]
struct Opt {
    /// Scene description.
    #[structopt(parse(from_os_str), default_value = "scene.json")]
    scene: PathBuf,

    /// Output image; `.ppm` is written as ASCII PPM, other extensions go through `image`.
    #[structopt(parse(from_os_str), default_value = "render.png")]
    output: PathBuf,

    /// Jittered samples per pixel, 0 disables anti-aliasing.
    #[structopt(short, long, default_value = "0")]
    samples: u32,

    /// Overrides the scene's recursion depth.
    #[structopt(long)]
    max_depth: Option<u32>,

    #[structopt(long, default_value = "0.001")]
    epsilon: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = Opt::from_args();

    let mut scene = Scene::load(&opt.scene).with_context(|| format!("failed to load {}", opt.scene.display()))?;
    if let Some(max_depth) = opt.max_depth {
        scene.max_depth = max_depth;
    }

    let image = RenderEngine::new(opt.epsilon).render(&scene, opt.samples);

    let is_ppm = opt
        .output
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("ppm"));
    if is_ppm {
        let file = File::create(&opt.output)?;
        image.write_ppm(BufWriter::new(file))?;
    } else {
        image.save(&opt.output)?;
    }

    log::info!("wrote {}", opt.output.display());

    Ok(())
}
