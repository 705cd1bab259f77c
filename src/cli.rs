use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels accepted on the command line
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser)]
#[command(name = "tracer")]
#[command(about = "Render a scene of spheres to a PNG")]
pub struct Args {
    /// TOML file with canvas, camera and scene; the built-in scene is used when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the canvas width from the config
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the canvas height from the config
    #[arg(long)]
    pub height: Option<u32>,

    /// Override the number of mirror bounces
    #[arg(short, long)]
    pub depth: Option<u32>,

    #[arg(short, long, default_value = "render.png")]
    pub output: String,

    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub log_level: LogLevel,
}
