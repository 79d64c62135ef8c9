//! Configuration and CLI argument handling

use clap::Parser;

use crate::state::{FeedbackSettings, TimerConfig};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "custom-timer")]
#[command(about = "A work/break interval timer with an HTTP control surface")]
#[command(version)]
pub struct Config {
    /// Port to bind the control surface to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Work phase length in minutes
    #[arg(short, long, default_value = "25", value_parser = clap::value_parser!(u32).range(1..=60))]
    pub work: u32,

    /// Break phase length in minutes
    #[arg(short = 'b', long = "break", default_value = "5", value_parser = clap::value_parser!(u32).range(1..=20))]
    pub break_minutes: u32,

    /// Sound-theme event played at each phase transition
    #[arg(long, default_value = "complete")]
    pub sound_id: String,

    /// Never play sounds, whatever the sounds toggle says
    #[arg(long)]
    pub no_sound_output: bool,

    /// Start with the haptics toggle off
    #[arg(long)]
    pub no_haptics: bool,

    /// Start with the sounds toggle off
    #[arg(long)]
    pub no_sounds: bool,

    /// Do not keep the display awake while the timer runs
    #[arg(long)]
    pub no_idle_inhibit: bool,

    /// Do not draw the status line on stdout
    #[arg(long)]
    pub no_render: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Initial phase durations
    pub fn timer_config(&self) -> TimerConfig {
        TimerConfig::from_minutes(self.work, self.break_minutes)
    }

    /// Initial feedback toggles
    pub fn feedback_settings(&self) -> FeedbackSettings {
        FeedbackSettings::with(!self.no_haptics, !self.no_sounds)
    }
}
