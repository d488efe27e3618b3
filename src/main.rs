use anyhow::Result;
use clap::Parser;

use image_tags::{config, context::BuildContext, output, tagset, ui};

#[derive(clap::Parser)]
#[command(
    name = "image-tags",
    about = "Derive container image version, channel, and publish tags from CI context"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Base image name (overrides configuration)")]
    image: Option<String>,

    #[arg(short, long, help = "The suffix of the tag")]
    suffix: Option<String>,

    #[arg(long, help = "Version recorded in tracked package metadata")]
    package_version: Option<String>,

    #[arg(long, help = "Whether the tracked package metadata changed in this run")]
    package_version_changed: bool,

    #[arg(short, long, help = "Write outputs here instead of $GITHUB_OUTPUT")]
    output: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("image-tags {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    // Resolve the base image name: flag wins over config
    let image = match args.image.or(config.image) {
        Some(image) => image,
        None => {
            ui::display_error("No image name given (use --image or set it in imagetags.toml)");
            std::process::exit(1);
        }
    };

    // Snapshot the CI environment
    let ctx = match BuildContext::from_env(
        args.package_version,
        args.package_version_changed,
        args.suffix,
    ) {
        Ok(ctx) => ctx,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let target = tagset::PublishTarget {
        registry: config.registry,
        image,
        release_branch: config.release_branch,
    };

    let set = tagset::build(&ctx, &target);
    ui::display_tag_summary(&set);

    // Deliver the result to the CI output file
    let sink = match output::resolve_sink(args.output.as_deref()) {
        Ok(path) => path,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if let Err(e) = output::write_outputs(&sink, &set) {
        ui::display_error(&format!(
            "Failed to write outputs to '{}': {}",
            sink.display(),
            e
        ));
        std::process::exit(1);
    }

    ui::display_success(&format!(
        "Wrote {} tag(s) to {}",
        set.tags.len(),
        sink.display()
    ));

    Ok(())
}
