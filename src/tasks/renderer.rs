//! Terminal status line renderer

use std::{io::Write, sync::Arc};
use tracing::{debug, info};

use crate::{state::AppState, view::ClockView};

/// Width of the text progress bar
const BAR_WIDTH: usize = 20;

/// Background task that redraws the status line whenever the clock changes
pub async fn renderer_task(state: Arc<AppState>) {
    info!("Starting terminal renderer");

    let mut snapshots = state.subscribe_snapshots();
    let mut stdout = std::io::stdout();

    loop {
        let line = {
            let snapshot = snapshots.borrow_and_update();
            render_line(&ClockView::from_snapshot(&snapshot))
        };

        // Terminal gone is not fatal to the timer
        if write!(stdout, "\r\x1b[2K{}", line).and_then(|_| stdout.flush()).is_err() {
            debug!("Failed to write status line");
        }

        if snapshots.changed().await.is_err() {
            debug!("Snapshot channel closed, renderer exiting");
            break;
        }
    }
}

/// One-line rendering of the dial, labels and button
pub fn render_line(view: &ClockView) -> String {
    let filled = (view.progress * BAR_WIDTH as f64).round() as usize;
    let bar: String = "#".repeat(filled.min(BAR_WIDTH)) + &"-".repeat(BAR_WIDTH - filled.min(BAR_WIDTH));

    format!(
        "{:<5} {:>2} min [{}]  {} | {}{}  [{}]",
        view.phase_label,
        view.display_minutes,
        bar,
        view.work_label,
        view.break_label,
        if view.sliders_enabled { "" } else { " (locked)" },
        view.button_label,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ClockSnapshot, ClockState, FeedbackSettings, Phase, TimerConfig};

    #[test]
    fn renders_running_work_phase() {
        let snapshot = ClockSnapshot {
            clock: ClockState {
                remaining_seconds: 1470,
                phase: Phase::Work,
                is_running: true,
            },
            config: TimerConfig::from_minutes(25, 5),
            feedback: FeedbackSettings::new(),
        };

        let line = render_line(&ClockView::from_snapshot(&snapshot));
        assert_eq!(
            line,
            "WORK  25 min [##########----------]  Work: 25 min | Break: 5 min (locked)  [STOP]"
        );
    }
}
