use std::fmt;

use crate::app::state::Phase;

const TITLE: &str = "🐱 Cat Video Generator";
const TAGLINE: &str = "Generate an adorable animated cat video instantly!";
const START_LABEL: &str = "🎬 Generate Cat Video";
const GENERATING_LABEL: &str = "🎬 Generating...";
const STOP_LABEL: &str = "⏹️ Stop";
const PLACEHOLDER: &str = "Click the button above to generate your cat video!";
const FOOTER: &str = "✨ Each video is uniquely animated with bouncing cats and sparkles! ✨";

/// A clickable control.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ControlView {
    /// Button text.
    pub label: String,
    /// Whether clicks are accepted.
    pub enabled: bool,
}

/// What occupies the stage area below the controls.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Stage {
    /// The drawing surface, shown while playing.
    Surface,
    /// Idle hint.
    Placeholder {
        /// Hint text.
        message: String,
    },
    /// Nothing (while generating).
    Empty,
}

/// Snapshot of the page for one animator state.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ViewModel {
    /// Heading.
    pub title: String,
    /// Line under the heading.
    pub tagline: String,
    /// Start control; disabled while generating or playing.
    pub start: ControlView,
    /// Stop control; present only while playing.
    pub stop: Option<ControlView>,
    /// Error banner after a failed generation.
    pub error_banner: Option<String>,
    /// Surface or placeholder.
    pub stage: Stage,
    /// Closing line.
    pub footer: String,
}

impl ViewModel {
    /// Derive the page from a phase and the current error banner.
    pub fn for_state(phase: Phase, error: Option<&str>) -> Self {
        let start = ControlView {
            label: match phase {
                Phase::Generating => GENERATING_LABEL,
                Phase::Idle | Phase::Playing => START_LABEL,
            }
            .to_owned(),
            enabled: phase == Phase::Idle,
        };
        let stop = (phase == Phase::Playing).then(|| ControlView {
            label: STOP_LABEL.to_owned(),
            enabled: true,
        });
        let stage = match phase {
            Phase::Playing => Stage::Surface,
            Phase::Generating => Stage::Empty,
            Phase::Idle => Stage::Placeholder {
                message: PLACEHOLDER.to_owned(),
            },
        };

        Self {
            title: TITLE.to_owned(),
            tagline: TAGLINE.to_owned(),
            start,
            stop,
            error_banner: error.map(str::to_owned),
            stage,
            footer: FOOTER.to_owned(),
        }
    }
}

impl fmt::Display for ViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.tagline)?;
        writeln!(f)?;
        let disabled = if self.start.enabled { "" } else { " (disabled)" };
        write!(f, "[{}]{disabled}", self.start.label)?;
        if let Some(stop) = &self.stop {
            write!(f, "  [{}]", stop.label)?;
        }
        writeln!(f)?;
        if let Some(err) = &self.error_banner {
            writeln!(f, "! {err}")?;
        }
        match &self.stage {
            Stage::Surface => writeln!(f, "<playing>")?,
            Stage::Placeholder { message } => writeln!(f, "🐱 {message}")?,
            Stage::Empty => {}
        }
        write!(f, "{}", self.footer)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/view.rs"]
mod tests;
