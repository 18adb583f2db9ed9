use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::Read;
use std::path::PathBuf;

use med_vision::camera::{Camera, FileCamera, MockCamera};
use med_vision::render::render_report;
use med_vision::report::format_text;
use med_vision::screen::{CycleOutcome, HealthScreen};
use med_vision::session::Session;
use med_vision::upload::{check_health, UploadConfig};

/// Med Vision - camera capture, image analysis upload, and report rendering
#[derive(Parser, Debug)]
#[command(
    name = "med-vision",
    about = "Capture a photo, upload it for analysis, and render the structured report",
    after_help = "ENVIRONMENT VARIABLES:\n\
        MED_VISION_ENDPOINT           Analysis API endpoint URL\n\
        MED_VISION_CONNECT_TIMEOUT    Connection timeout in seconds\n\
        MED_VISION_MAX_TIME           Whole-request timeout in seconds\n\
        MED_VISION_SESSION_DIR        Base directory for capture sessions\n\
        MED_VISION_MOCK_SIZE          Mock camera photo size (WxH)"
)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Capture a photo, upload it, and render the analysis report
    Analyze {
        /// Path to an image file to use as the photo source
        #[arg(short, long, conflicts_with = "mock")]
        image: Option<PathBuf>,

        /// Use the mock camera instead of an image file
        #[arg(long)]
        mock: bool,

        /// Analysis endpoint URL
        #[arg(
            long,
            env = "MED_VISION_ENDPOINT",
            default_value = "https://medalyzer-backend.onrender.com/api/v1/analyze-image"
        )]
        endpoint: String,

        /// Output directory for captured photos (default: auto-generated session dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep captured photos after completion
        #[arg(long, short = 'k')]
        keep: bool,

        /// Output the raw report as JSON instead of rendered text
        #[arg(long)]
        json: bool,
    },

    /// Classify and render a single free-text field (debugging aid)
    Format {
        /// Path to a text file (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output the classified block as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether the analysis endpoint is reachable
    Check {
        /// Analysis endpoint URL
        #[arg(
            long,
            env = "MED_VISION_ENDPOINT",
            default_value = "https://medalyzer-backend.onrender.com/api/v1/analyze-image"
        )]
        endpoint: String,

        /// Connection timeout in seconds
        #[arg(long, default_value = "5")]
        timeout: u64,
    },
}

/// Build the camera for the analyze command.
///
/// Only the mock camera writes photos, so only it gets a session directory;
/// a file-backed camera reads its image in place and needs none.
fn build_camera(
    image: Option<PathBuf>,
    mock: bool,
    output: Option<&PathBuf>,
    keep: bool,
) -> Result<(Box<dyn Camera>, Option<Session>), Box<dyn Error>> {
    if mock {
        let session = match output {
            Some(dir) => Session::in_dir(dir),
            None => Session::with_name("analyze").keep(keep),
        };
        session.init()?;
        let camera: Box<dyn Camera> = Box::new(MockCamera::new(&session.dir));
        Ok((camera, Some(session)))
    } else if let Some(path) = image {
        Ok((Box::new(FileCamera::new(path)), None))
    } else {
        Err("Provide --image <path> or --mock".into())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Commands::Analyze {
            image,
            mock,
            endpoint,
            output,
            keep,
            json,
        } => {
            let (camera, session) = build_camera(image, mock, output.as_ref(), keep)?;

            let mut screen = HealthScreen::new(UploadConfig::new(endpoint));
            screen.attach_camera(camera);

            match screen.capture_and_analyze() {
                CycleOutcome::Analyzed => {
                    let report = screen.report().ok_or("missing report after analysis")?;
                    if json {
                        println!("{}", serde_json::to_string_pretty(report)?);
                    } else {
                        print!("{}", render_report(report));
                    }
                }
                outcome => {
                    let notice = outcome
                        .notice()
                        .unwrap_or_else(|| "Analysis failed.".to_string());
                    eprintln!("{}", notice);
                    drop(session);
                    std::process::exit(1);
                }
            }

            // Keep session alive if needed (prevent Drop cleanup)
            if let Some(session) = session {
                if keep || output.is_some() {
                    std::mem::forget(session);
                }
            }
        }

        Commands::Format { file, json } => {
            let text = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            match format_text(Some(&text)) {
                Some(block) => {
                    if json {
                        let (kind, items) = match &block {
                            med_vision::FormattedBlock::Bullets(items) => ("bullets", items),
                            med_vision::FormattedBlock::Numbered(items) => ("numbered", items),
                            med_vision::FormattedBlock::Paragraphs(items) => ("paragraphs", items),
                        };
                        let value = serde_json::json!({ "kind": kind, "items": items });
                        println!("{}", serde_json::to_string_pretty(&value)?);
                    } else {
                        print!("{}", med_vision::render::render_block(&block));
                    }
                }
                None => println!("(empty input, no block)"),
            }
        }

        Commands::Check { endpoint, timeout } => {
            if check_health(&endpoint, timeout)? {
                println!("Endpoint responding: {}", endpoint);
            } else {
                eprintln!("Endpoint not responding: {}", endpoint);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
