use trustscan_core::{DashboardView, Notice, SafetyStatus};

use super::constants::*;
use super::UiCommand;

#[allow(clippy::vec_init_then_push)]
pub fn render(view: &DashboardView) -> Vec<UiCommand> {
    let mut cmds = Vec::new();

    cmds.push(UiCommand::SetEnabled {
        control: SUBMIT_BUTTON,
        enabled: view.submit.enabled,
    });
    cmds.push(UiCommand::SetVisible {
        control: BUTTON_LABEL,
        visible: view.submit.label_visible,
    });
    cmds.push(UiCommand::SetVisible {
        control: LOADER,
        visible: view.submit.loader_visible,
    });
    cmds.push(UiCommand::SetVisible {
        control: RESULT_BOX,
        visible: view.result.visible,
    });

    if let Some(url) = &view.result.url {
        cmds.push(UiCommand::SetText {
            control: RESULT_URL,
            text: url.clone(),
        });
    }
    if let Some(score) = &view.result.trust_score {
        cmds.push(UiCommand::SetText {
            control: TRUST_SCORE,
            text: score.clone(),
        });
    }
    for metric in &view.result.metrics {
        let control = metric_control(metric.metric);
        cmds.push(UiCommand::SetText {
            control,
            text: metric.text.clone(),
        });
        cmds.push(UiCommand::SetTier {
            control,
            tier: metric.tier,
        });
    }
    if let Some(status) = view.result.status {
        cmds.push(UiCommand::SetBadge {
            control: SAFETY_STATUS,
            text: status.label().to_string(),
            safe: status == SafetyStatus::Trusted,
        });
    }

    cmds.push(UiCommand::PopulateHistory {
        control: HISTORY_LIST,
        placeholder: view.history.placeholder,
        rows: view.history.rows.clone(),
    });

    cmds
}

pub fn render_notice(notice: &Notice) -> UiCommand {
    UiCommand::Alert {
        severity: notice.severity,
        message: notice.message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trustscan_core::{
        HistoryRowView, HistoryView, Metric, MetricView, ResultPanelView, SafetyStatus,
        SubmitControlView, Tier,
    };

    #[test]
    fn loading_view_disables_submit_and_hides_result() {
        let view = DashboardView {
            submit: SubmitControlView {
                enabled: false,
                label_visible: false,
                loader_visible: true,
            },
            history: HistoryView {
                placeholder: true,
                rows: Vec::new(),
            },
            ..DashboardView::default()
        };

        let cmds = render(&view);
        assert_eq!(
            &cmds[..4],
            &[
                UiCommand::SetEnabled {
                    control: SUBMIT_BUTTON,
                    enabled: false
                },
                UiCommand::SetVisible {
                    control: BUTTON_LABEL,
                    visible: false
                },
                UiCommand::SetVisible {
                    control: LOADER,
                    visible: true
                },
                UiCommand::SetVisible {
                    control: RESULT_BOX,
                    visible: false
                },
            ]
        );
        assert!(!cmds.iter().any(|cmd| matches!(
            cmd,
            UiCommand::SetText { .. } | UiCommand::SetBadge { .. }
        )));
    }

    #[test]
    fn result_view_targets_metric_and_status_controls() {
        let view = DashboardView {
            result: ResultPanelView {
                visible: true,
                url: Some("a.com".to_string()),
                trust_score: Some("91".to_string()),
                metrics: vec![MetricView {
                    metric: Metric::Scam,
                    text: "35%".to_string(),
                    tier: Tier::Warning,
                }],
                status: Some(SafetyStatus::PotentialScam),
            },
            history: HistoryView {
                placeholder: false,
                rows: vec![HistoryRowView {
                    url: "a.com".to_string(),
                    is_safe: false,
                }],
            },
            ..DashboardView::default()
        };

        let cmds = render(&view);
        assert!(cmds.contains(&UiCommand::SetText {
            control: TRUST_SCORE,
            text: "91".to_string()
        }));
        assert!(cmds.contains(&UiCommand::SetTier {
            control: SCAM_SCORE,
            tier: Tier::Warning
        }));
        assert!(cmds.contains(&UiCommand::SetBadge {
            control: SAFETY_STATUS,
            text: "Potential Scam".to_string(),
            safe: false
        }));
        assert!(matches!(
            cmds.last(),
            Some(UiCommand::PopulateHistory { placeholder: false, rows, .. }) if rows.len() == 1
        ));
    }
}
