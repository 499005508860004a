use std::fmt;

use trustscan_core::{HistoryRowView, NoticeSeverity, Tier};
use trustscan_logging::scan_debug;

use super::constants;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId {
    id: u16,
    name: &'static str,
}

impl ControlId {
    pub const fn new(id: u16, name: &'static str) -> Self {
        Self { id, name }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}({})", self.name, self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    SetEnabled {
        control: ControlId,
        enabled: bool,
    },
    SetVisible {
        control: ControlId,
        visible: bool,
    },
    SetText {
        control: ControlId,
        text: String,
    },
    SetTier {
        control: ControlId,
        tier: Tier,
    },
    SetBadge {
        control: ControlId,
        text: String,
        safe: bool,
    },
    PopulateHistory {
        control: ControlId,
        placeholder: bool,
        rows: Vec<HistoryRowView>,
    },
    Alert {
        severity: NoticeSeverity,
        message: String,
    },
}

impl UiCommand {
    pub fn control(&self) -> Option<ControlId> {
        match self {
            UiCommand::SetEnabled { control, .. }
            | UiCommand::SetVisible { control, .. }
            | UiCommand::SetText { control, .. }
            | UiCommand::SetTier { control, .. }
            | UiCommand::SetBadge { control, .. }
            | UiCommand::PopulateHistory { control, .. } => Some(*control),
            UiCommand::Alert { .. } => None,
        }
    }
}

/// The UI surfaces the verification flow writes to, injected at startup.
pub trait Dashboard {
    fn has_control(&self, control: ControlId) -> bool;

    fn apply(&mut self, command: UiCommand);

    /// Called once after a batch of commands has been applied.
    fn present(&mut self) {}
}

/// Fails unless every required control is present.
pub fn validate(dashboard: &dyn Dashboard) -> anyhow::Result<()> {
    for control in constants::REQUIRED {
        anyhow::ensure!(
            dashboard.has_control(control),
            "dashboard is missing required control #{}",
            control.name()
        );
    }
    Ok(())
}

/// Applies commands in order, skipping those aimed at absent optional controls.
pub fn apply_all(dashboard: &mut dyn Dashboard, commands: Vec<UiCommand>) {
    for command in commands {
        if let Some(control) = command.control() {
            if !dashboard.has_control(control) {
                scan_debug!("Skipping update for absent control {:?}", control);
                continue;
            }
        }
        dashboard.apply(command);
    }
    dashboard.present();
}
