//! Trace replay: feeds recorded gesture events through a [`CircleSlider`] and
//! reports every decision as a JSON line.
//!
//! Input is one JSON object per line, e.g.
//! `{"event": "move", "x": 210.0, "y": 300.5}`. Blank lines are skipped.

#[cfg(test)]
#[path = "replay_test.rs"]
mod replay_test;

use std::io::{BufRead, Write};

use circle_slider::{CircleSlider, GesturePhase, GestureResponder, MoveOutcome, Point};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CliError;

/// One recorded host gesture event.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum TraceEvent {
    Start { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    End { x: f64, y: f64 },
    Terminate,
}

impl TraceEvent {
    fn name(self) -> &'static str {
        match self {
            Self::Start { .. } => "start",
            Self::Move { .. } => "move",
            Self::End { .. } => "end",
            Self::Terminate => "terminate",
        }
    }
}

/// Per-event output line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayRecord {
    pub line: usize,
    pub event: &'static str,
    pub phase: &'static str,
    /// `accepted`, `declined` or `ignored` for moves; `claimed` for starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<&'static str>,
    /// Raw mapped angle, when the sample was mapped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<f64>,
    pub value: f64,
    /// Host keep-gesture answer at this sample.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wants_gesture: Option<bool>,
}

/// Totals written as the final output line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplaySummary {
    pub events: usize,
    pub accepted: usize,
    pub declined: usize,
    pub ignored: usize,
    pub value: f64,
    pub phase: &'static str,
    pub arc_path: String,
    pub thumb_x: f64,
    pub thumb_y: f64,
}

fn phase_name(phase: GesturePhase) -> &'static str {
    match phase {
        GesturePhase::Idle => "idle",
        GesturePhase::Dragging => "dragging",
        GesturePhase::NearSeam => "near_seam",
    }
}

/// Replay every event in `input` against `slider`, writing one record per
/// event and a trailing `{"summary": ...}` line to `out`. The slider's
/// observer slot is left untouched, so a caller's observer keeps receiving
/// every accepted value.
///
/// # Errors
///
/// Fails on the first unreadable or malformed line, or if `out` cannot be
/// written.
pub fn replay<R, W>(slider: &mut CircleSlider, input: R, out: &mut W) -> Result<ReplaySummary, CliError>
where
    R: BufRead,
    W: Write,
{
    let (mut events, mut accepted, mut declined, mut ignored) = (0, 0, 0, 0);

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event: TraceEvent =
            serde_json::from_str(&line).map_err(|source| CliError::TraceLine { line: line_no, source })?;
        events += 1;
        debug!(line = line_no, event = event.name(), "replaying");

        let mut record = ReplayRecord {
            line: line_no,
            event: event.name(),
            phase: "",
            outcome: None,
            raw: None,
            value: 0.0,
            wants_gesture: None,
        };

        match event {
            TraceEvent::Start { x, y } => {
                let claimed = slider.on_start(Point::new(x, y));
                record.outcome = claimed.then_some("claimed");
            }
            TraceEvent::Move { x, y } => {
                let sample = Point::new(x, y);
                record.wants_gesture = Some(slider.wants_gesture(sample));
                match slider.on_move(sample) {
                    MoveOutcome::Accepted { raw, value } => {
                        accepted += 1;
                        info!(line = line_no, angle = value, "value changed");
                        record.outcome = Some("accepted");
                        record.raw = Some(raw);
                    }
                    MoveOutcome::Declined { raw } => {
                        declined += 1;
                        record.outcome = Some("declined");
                        record.raw = Some(raw);
                    }
                    MoveOutcome::Ignored => {
                        ignored += 1;
                        record.outcome = Some("ignored");
                    }
                }
            }
            TraceEvent::End { x, y } => slider.on_end(Point::new(x, y)),
            TraceEvent::Terminate => slider.on_terminate(),
        }

        record.phase = phase_name(slider.phase());
        record.value = slider.value();
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
    }

    let layout = slider.layout();
    let thumb = slider.thumb_center();
    let summary = ReplaySummary {
        events,
        accepted,
        declined,
        ignored,
        value: slider.value(),
        phase: phase_name(slider.phase()),
        arc_path: layout.arc_path(),
        thumb_x: thumb.x,
        thumb_y: thumb.y,
    };
    serde_json::to_writer(&mut *out, &serde_json::json!({ "summary": &summary }))?;
    writeln!(out)?;
    Ok(summary)
}
