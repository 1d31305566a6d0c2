use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kiln_engine::geometry::DEFAULT_CIRCLE_SEGMENTS;
use kiln_engine::time::{DEFAULT_TARGET_FPS, ReportCadence};
use kiln_engine::window::{PacingMode, RuntimeConfig};
use winit::dpi::LogicalSize;

/// Windowed graphics exercises on top of kiln-engine.
#[derive(Parser, Debug)]
#[command(name = "kiln-tasks", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub task: Task,

    /// Force vsync on, overriding the task's pacing
    #[clap(long, global = true, action, conflicts_with = "no_vsync")]
    pub vsync: bool,

    /// Disable vsync; tasks without a frame pacer run unthrottled
    #[clap(long, global = true, action)]
    pub no_vsync: bool,

    /// Window width in logical pixels
    #[clap(long, global = true, default_value_t = 800)]
    pub width: u32,

    /// Window height in logical pixels
    #[clap(long, global = true, default_value_t = 600)]
    pub height: u32,

    /// Window title (defaults to the task name)
    #[clap(long, global = true)]
    pub title: Option<String>,

    /// Log filter in env_logger syntax, e.g. "debug" or "kiln_engine=trace"
    #[clap(long, global = true, value_name = "FILTER")]
    pub log: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Task {
    /// Empty window cleared to a dark teal
    Window,

    /// Sleep-paced window that logs the achieved frame rate
    FrameRate {
        /// Target frames per second
        #[clap(long, default_value_t = DEFAULT_TARGET_FPS)]
        fps: f64,

        /// Report with fractional elapsed time instead of whole seconds
        #[clap(long, action)]
        continuous: bool,
    },

    /// Orange triangle
    Triangle,

    /// Orange triangle and rectangle on light blue
    Shapes,

    /// Orange circle outline
    Circle {
        /// Number of points on the outline
        #[clap(long, default_value_t = DEFAULT_CIRCLE_SEGMENTS as u32,
               value_parser = clap::value_parser!(u32).range(3..))]
        segments: u32,
    },

    /// Triangle moved by a model transform
    Transform {
        /// Rotate and pulse the scale over time
        #[clap(long, action)]
        animate: bool,

        /// Spin the triangle in perspective
        #[clap(long = "3d", action)]
        three_d: bool,
    },

    /// Triangle with per-vertex colors
    Colors,

    /// Textured triangle
    Texture {
        /// Image to sample; a missing file falls back to white
        #[clap(long, default_value = "texture.png")]
        path: PathBuf,
    },
}

impl Task {
    pub fn name(&self) -> &'static str {
        match self {
            Task::Window => "window",
            Task::FrameRate { .. } => "frame-rate",
            Task::Triangle => "triangle",
            Task::Shapes => "shapes",
            Task::Circle { .. } => "circle",
            Task::Transform { .. } => "transform",
            Task::Colors => "colors",
            Task::Texture { .. } => "texture",
        }
    }

    /// Frame-rate runs on the sleep pacer; everything else waits for vblank.
    pub fn default_pacing(&self) -> PacingMode {
        match self {
            Task::FrameRate { fps, continuous } => PacingMode::Sleep {
                target_fps: *fps,
                cadence: if *continuous {
                    ReportCadence::Continuous
                } else {
                    ReportCadence::WholeSeconds
                },
            },
            _ => PacingMode::Vsync,
        }
    }
}

impl Cli {
    pub fn pacing(&self) -> PacingMode {
        let default = self.task.default_pacing();
        if self.vsync {
            PacingMode::Vsync
        } else if self.no_vsync {
            match default {
                PacingMode::Vsync => PacingMode::Unlimited,
                other => other,
            }
        } else {
            default
        }
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        let title = self
            .title
            .clone()
            .unwrap_or_else(|| format!("kiln: {}", self.task.name()));

        RuntimeConfig {
            title,
            initial_size: LogicalSize::new(self.width as f64, self.height as f64),
            pacing: self.pacing(),
        }
    }
}
