use anyhow::Context;
use clap::{ArgAction, Parser};
use sketchpad::Config;
use sketchpad::document::{self, ImageClipboard, NoClipboard, WaylandClipboard};
use sketchpad::input::SketchSession;
use sketchpad::script::Script;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version, about = "Drag-to-shape raster sketching (headless shell)")]
struct Cli {
    /// Image to open (".png" is appended when the path does not exist)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Gesture script to replay, or "-" to read it from stdin
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write the final image here
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Write the zoomed view of the final image here
    #[arg(long, value_name = "PATH")]
    preview: Option<PathBuf>,

    /// Config file to use instead of ~/.config/sketchpad/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Do not look for an image on the clipboard
    #[arg(long, action = ArgAction::SetTrue)]
    no_clipboard: bool,
}

fn read_script(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read script from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut clipboard: Box<dyn ImageClipboard> = if cli.no_clipboard {
        Box::new(NoClipboard)
    } else {
        Box::new(WaylandClipboard)
    };
    let (mut document, image) =
        document::open_initial(cli.path.as_deref(), clipboard.as_mut(), config.blank_canvas())
            .context("Failed to open initial image")?;

    let style = config.style_for(image.width(), image.height());
    let mut session = SketchSession::new(image, style, config.tool_box())?;
    log::info!("{}", document.title());

    if let Some(script_path) = &cli.script {
        let text = read_script(script_path)?;
        let script = Script::parse(&text)?;
        let mut prompt = config.save_prompt();
        script.run(&mut session, &mut document, &mut prompt)?;
    }

    if let Some(output) = &cli.output {
        let path = document::with_png_extension(output);
        document::save_png(session.image(), &path)?;
        println!("Wrote {}", path.display());
    }

    if let Some(preview) = &cli.preview {
        let path = document::with_png_extension(preview);
        document::save_png(&session.display()?, &path)?;
        println!("Wrote preview {}", path.display());
    }

    let image = session.image();
    println!(
        "{} ({}x{}, zoom {})",
        document.title(),
        image.width(),
        image.height(),
        session.style.zoom
    );

    Ok(())
}
