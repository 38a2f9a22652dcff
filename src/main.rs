use clap::{Parser, Subcommand};
use posterflow::{PipelineError, PosterData, PosterRenderer, RenderConfig, WorkflowState};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with renderer settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Write the poster JSON here instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out a workflow state file
    Render {
        /// Workflow state JSON (design_brief, asset_list, final_poster, ...)
        state: PathBuf,
    },
    /// Build a poster from a title, an optional subtitle and an optional image
    Quick {
        #[arg(long)]
        title: String,
        #[arg(long)]
        subtitle: Option<String>,
        /// Image URL
        #[arg(long)]
        image: Option<String>,
    },
}

fn main() -> Result<(), PipelineError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "posterflow=info");
        }
    }
    env_logger::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RenderConfig::from_file(path)?,
        None => RenderConfig::default(),
    };
    let renderer = PosterRenderer::new().with_config(config);

    let poster = match &args.command {
        Command::Render { state } => renderer.render_workflow(&WorkflowState::from_file(state)?)?,
        Command::Quick {
            title,
            subtitle,
            image,
        } => renderer.simple_poster(title, subtitle.as_deref(), image.as_deref())?,
    };

    write_poster(&poster, args.output.as_deref())
}

fn write_poster(poster: &PosterData, output: Option<&Path>) -> Result<(), PipelineError> {
    let json = serde_json::to_string_pretty(poster)?;
    match output {
        Some(path) => {
            fs::write(path, json)?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
