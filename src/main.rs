use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use video_gallery::{
    group_by_date, Config, GalleryClient, Screen, Video, DEFAULT_SERVER, UPLOAD_SUCCESSFUL,
};

const VIDEOS_FOLDER: &str = "videos";

#[derive(Parser, Debug)]
#[command(version, about = "Upload videos and browse the gallery by date")]
struct Cli {
    /// Base URL of the upload server
    #[arg(long, env = "VIDEO_GALLERY_URL", default_value = DEFAULT_SERVER)]
    server: String,

    /// Timeout in seconds for listing and health checks
    #[arg(long, env = "VIDEO_GALLERY_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    /// More output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List uploaded videos, grouped by upload day
    List {
        /// One name per line, in server order
        #[arg(long)]
        flat: bool,
    },
    /// Upload a video file
    Upload { path: PathBuf },
    /// Save a video locally
    Download {
        name: String,
        #[arg(short, long, default_value = VIDEOS_FOLDER)]
        out: PathBuf,
    },
    /// Print the playback URL of a video
    Url { name: String },
    /// Check that the server is up
    Health,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "video_gallery=info",
        _ => "video_gallery=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_videos(videos: &[Video], flat: bool) {
    if videos.is_empty() {
        println!("No videos found.");
        return;
    }
    if flat {
        for video in videos {
            println!("{}", video.name);
        }
        return;
    }

    for group in group_by_date(videos, &Local::now()) {
        println!("{}", group.label);
        for video in &group.videos {
            match video.last_modified {
                Some(ts) => println!(
                    "  {:<40} {}",
                    video.name,
                    ts.with_timezone(&Local).format("%H:%M")
                ),
                None => println!("  {}", video.name),
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::new(&cli.server).with_timeout(Duration::from_secs(cli.timeout));
    let client = GalleryClient::new(&config)
        .with_context(|| format!("cannot use server {}", cli.server))?;

    match cli.command {
        Command::List { flat } => {
            let videos = client
                .list_videos()
                .with_context(|| format!("listing videos on {}", client.base_url()))?;
            print_videos(&videos, flat);
        }
        Command::Upload { path } => {
            let mut screen = Screen::new(client);
            screen.select(&path);
            if screen.selected.is_none() {
                bail!("cannot upload {}: {}", path.display(), screen.message);
            }
            screen.upload();
            println!("{}", screen.message);
            if screen.message != UPLOAD_SUCCESSFUL {
                bail!("upload of {} failed", path.display());
            }
            print_videos(&screen.videos, false);
        }
        Command::Download { name, out } => {
            let path = client
                .download(&name, &out)
                .with_context(|| format!("downloading {}", name))?;
            println!("{}", path.display());
        }
        Command::Url { name } => {
            let mut screen = Screen::new(client);
            screen.play(&name);
            match &screen.playing {
                Some(url) => println!("{}", url),
                None => bail!("no playback url for {}: {}", name, screen.message),
            }
        }
        Command::Health => {
            client
                .health()
                .with_context(|| format!("{} is not healthy", client.base_url()))?;
            println!("OK");
        }
    }

    Ok(())
}
