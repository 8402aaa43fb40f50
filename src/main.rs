use log::{error, info};
use shadegen::ShadeGenerator;
use shadegen::config::Config;
use shadegen::export::export_shades;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let generator = ShadeGenerator::new(config.steps)?;
    info!(
        "Generating {}-step scales for {} palette colors into {}/",
        generator.steps(),
        config.palette.len(),
        config.output_dir
    );

    for (name, base_color) in &config.palette {
        match generator.generate(base_color) {
            Ok(scale) => {
                let path = Path::new(&config.output_dir).join(format!("{}Shades.json", name));
                export_shades(&scale, &path)?;
                info!("Wrote {} shades of {} to {}", scale.len(), base_color, path.display());
            }
            Err(e) => {
                error!("Skipping {}: {}", name, e);
            }
        }
    }
    Ok(())
}
