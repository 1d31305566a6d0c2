use winit::dpi::LogicalSize;

use crate::time::{frame_duration_for, FramePacer, ReportCadence, SystemClock, DEFAULT_TARGET_FPS};

/// How the render loop's rate is limited.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum PacingMode {
    /// Presentation waits for vertical blank (swap interval 1).
    #[default]
    Vsync,

    /// No vsync; the loop sleeps out the rest of each frame budget and logs FPS.
    Sleep {
        target_fps: f64,
        cadence: ReportCadence,
    },

    /// No vsync and no sleeping.
    Unlimited,
}

impl PacingMode {
    /// Sleep pacing at 60 Hz with whole-second FPS reports.
    pub fn sleep_60() -> Self {
        PacingMode::Sleep {
            target_fps: DEFAULT_TARGET_FPS,
            cadence: ReportCadence::WholeSeconds,
        }
    }

    /// Surface present mode matching this pacing.
    pub fn present_mode(self) -> wgpu::PresentMode {
        match self {
            PacingMode::Vsync => wgpu::PresentMode::Fifo,
            PacingMode::Sleep { .. } | PacingMode::Unlimited => wgpu::PresentMode::AutoNoVsync,
        }
    }

    /// Builds the pacer driving the loop, if this mode uses one.
    pub fn pacer(self) -> Option<FramePacer<SystemClock>> {
        match self {
            PacingMode::Sleep { target_fps, cadence } => Some(
                FramePacer::with_clock(SystemClock, frame_duration_for(target_fps))
                    .with_cadence(cadence),
            ),
            PacingMode::Vsync | PacingMode::Unlimited => None,
        }
    }
}

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub pacing: PacingMode,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "kiln".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            pacing: PacingMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn vsync_has_no_pacer() {
        assert!(PacingMode::Vsync.pacer().is_none());
        assert_eq!(PacingMode::Vsync.present_mode(), wgpu::PresentMode::Fifo);
    }

    #[test]
    fn unlimited_disables_vsync_without_pacer() {
        assert!(PacingMode::Unlimited.pacer().is_none());
        assert_eq!(PacingMode::Unlimited.present_mode(), wgpu::PresentMode::AutoNoVsync);
    }

    #[test]
    fn sleep_mode_builds_configured_pacer() {
        let mode = PacingMode::Sleep {
            target_fps: 30.0,
            cadence: ReportCadence::Continuous,
        };
        let pacer = mode.pacer().expect("sleep mode should pace");
        assert_eq!(pacer.cadence(), ReportCadence::Continuous);
        let budget = pacer.target_frame_duration();
        assert!(budget > Duration::from_micros(33_333) && budget < Duration::from_micros(33_334));
        assert_eq!(mode.present_mode(), wgpu::PresentMode::AutoNoVsync);
    }

    #[test]
    fn default_config_matches_exercise_window() {
        let cfg = RuntimeConfig::default();
        assert_eq!(cfg.initial_size, LogicalSize::new(800.0, 600.0));
        assert_eq!(cfg.pacing, PacingMode::Vsync);
    }
}
