use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gallery-labels")]
#[command(about = "Display labels and content types for image gallery files", long_about = None)]
pub struct Cli {
    /// Show upload times in UTC regardless of GALLERY_TIME_ZONE
    #[arg(long, global = true)]
    pub utc: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the content type an upload of each path would get
    Mime {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print labels for every image in a gallery query result
    Describe {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        file_id: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print labels for a local file as they would look after upload
    Inspect {
        path: PathBuf,
    },
}

pub mod commands;
