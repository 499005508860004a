use std::collections::HashMap;
use std::io::Write;

use trustscan_core::{HistoryRowView, NoticeSeverity, Tier, EMPTY_HISTORY_TEXT};
use trustscan_logging::scan_warn;

use super::constants::{self, *};
use super::{ControlId, Dashboard, UiCommand};

const HISTORY_URL_MAX_CHARS: usize = 40;

#[derive(Debug, Clone, Default)]
struct ControlState {
    text: String,
    visible: bool,
    enabled: bool,
    tier: Option<Tier>,
    safe: Option<bool>,
}

/// Text dashboard drawing a frame to `out` after every batch of updates.
pub struct TerminalDashboard<W: Write> {
    out: W,
    controls: HashMap<ControlId, ControlState>,
    history_placeholder: bool,
    history: Vec<HistoryRowView>,
}

impl<W: Write> TerminalDashboard<W> {
    pub fn new(out: W) -> Self {
        let controls = constants::ALL
            .iter()
            .map(|control| {
                let state = ControlState {
                    visible: *control != LOADER && *control != RESULT_BOX,
                    enabled: true,
                    ..ControlState::default()
                };
                (*control, state)
            })
            .collect();
        Self {
            out,
            controls,
            history_placeholder: true,
            history: Vec::new(),
        }
    }

    fn control_mut(&mut self, control: ControlId) -> &mut ControlState {
        self.controls.entry(control).or_default()
    }

    fn control(&self, control: ControlId) -> Option<&ControlState> {
        self.controls.get(&control)
    }

    fn write_out(&mut self, text: &str) {
        if let Err(err) = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
        {
            scan_warn!("Failed to write dashboard output: {}", err);
        }
    }

    pub(crate) fn frame(&self) -> String {
        let mut lines = Vec::new();

        let submit = self.control(SUBMIT_BUTTON);
        let enabled = submit.is_some_and(|state| state.enabled);
        let loading = self.control(LOADER).is_some_and(|state| state.visible);
        let label = if loading {
            "[ scanning... ]"
        } else if enabled {
            "[ Scan ]"
        } else {
            "[ ---- ]"
        };
        lines.push(format!("URL> {label}"));

        if self.control(RESULT_BOX).is_some_and(|state| state.visible) {
            let text = |control: ControlId| {
                self.control(control)
                    .map(|state| state.text.as_str())
                    .unwrap_or_default()
            };
            lines.push(format!("Result for {}", text(RESULT_URL)));
            lines.push(format!("  Trust score: {}", text(TRUST_SCORE)));
            for (control, label) in [
                (LEGITIMACY_SCORE, "Legitimacy"),
                (BRAND_SCORE, "Brand"),
                (SCAM_SCORE, "Scam pattern"),
                (REVIEW_SCORE, "Reviews"),
            ] {
                if let Some(state) = self.control(control).filter(|s| !s.text.is_empty()) {
                    lines.push(format!(
                        "  {label:<13}{}",
                        paint(&state.text, state.tier)
                    ));
                }
            }
            if let Some(state) = self.control(SAFETY_STATUS).filter(|s| !s.text.is_empty()) {
                let tier = state
                    .safe
                    .map(|safe| if safe { Tier::Good } else { Tier::Bad });
                lines.push(format!("  Status: {}", paint(&state.text, tier)));
            }
        }

        lines.push("Recent scans:".to_string());
        if self.history_placeholder {
            lines.push(format!("  {EMPTY_HISTORY_TEXT}"));
        }
        for row in &self.history {
            let tier = if row.is_safe { Tier::Good } else { Tier::Bad };
            lines.push(format!(
                "  {:<width$} {}",
                truncate_for_display(&row.url, HISTORY_URL_MAX_CHARS),
                paint(row.badge(), Some(tier)),
                width = HISTORY_URL_MAX_CHARS
            ));
        }

        let mut frame = lines.join("\n");
        frame.push('\n');
        frame
    }
}

impl<W: Write> Dashboard for TerminalDashboard<W> {
    fn has_control(&self, control: ControlId) -> bool {
        self.controls.contains_key(&control)
    }

    fn apply(&mut self, command: UiCommand) {
        match command {
            UiCommand::SetEnabled { control, enabled } => {
                self.control_mut(control).enabled = enabled;
            }
            UiCommand::SetVisible { control, visible } => {
                self.control_mut(control).visible = visible;
            }
            UiCommand::SetText { control, text } => self.control_mut(control).text = text,
            UiCommand::SetTier { control, tier } => self.control_mut(control).tier = Some(tier),
            UiCommand::SetBadge {
                control,
                text,
                safe,
            } => {
                let state = self.control_mut(control);
                state.text = text;
                state.safe = Some(safe);
            }
            UiCommand::PopulateHistory {
                placeholder, rows, ..
            } => {
                self.history_placeholder = placeholder;
                self.history = rows;
            }
            UiCommand::Alert { severity, message } => {
                let prefix = match severity {
                    NoticeSeverity::Fatal => "!! ",
                    NoticeSeverity::Error => "! ",
                };
                self.write_out(&format!("{prefix}{message}\n"));
            }
        }
    }

    fn present(&mut self) {
        let frame = self.frame();
        self.write_out(&frame);
    }
}

/// Shortens for display only; the underlying row keeps the full URL.
fn truncate_for_display(url: &str, max_chars: usize) -> String {
    if url.chars().count() <= max_chars {
        return url.to_string();
    }
    let mut out: String = url.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn paint(text: &str, tier: Option<Tier>) -> String {
    let code = match tier {
        Some(Tier::Good) => "32",
        Some(Tier::Warning) => "33",
        Some(Tier::Bad) => "31",
        None => return text.to_string(),
    };
    format!("\x1b[{code}m{text}\x1b[0m")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ui::apply_all;

    #[test]
    fn long_urls_are_truncated_with_ellipsis() {
        let url = "https://very-long-subdomain.example.com/path/to/page";
        let shown = truncate_for_display(url, 20);
        assert_eq!(shown.chars().count(), 20);
        assert!(shown.ends_with('…'));
        assert_eq!(truncate_for_display("a.com", 20), "a.com");
    }

    #[test]
    fn frame_shows_placeholder_until_history_populated() {
        let mut dashboard = TerminalDashboard::new(Vec::new());
        assert!(dashboard.frame().contains(EMPTY_HISTORY_TEXT));

        apply_all(
            &mut dashboard,
            vec![UiCommand::PopulateHistory {
                control: HISTORY_LIST,
                placeholder: false,
                rows: vec![HistoryRowView {
                    url: "a.com".to_string(),
                    is_safe: true,
                }],
            }],
        );
        let frame = dashboard.frame();
        assert!(!frame.contains(EMPTY_HISTORY_TEXT));
        assert!(frame.contains("a.com"));
        assert!(frame.contains("Trusted"));
    }

    #[test]
    fn alerts_are_written_immediately() {
        let mut dashboard = TerminalDashboard::new(Vec::new());
        dashboard.apply(UiCommand::Alert {
            severity: NoticeSeverity::Error,
            message: "Verification failed: boom".to_string(),
        });
        let written = String::from_utf8(dashboard.out.clone()).unwrap();
        assert_eq!(written, "! Verification failed: boom\n");
    }
}
