pub mod catalogue;

use derive_more::Display;
use heapless::Vec;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    #[display(fmt = "MEMO")]
    Memo,
    #[display(fmt = "CAUTION")]
    Caution,
    #[display(fmt = "WARNING")]
    Warning,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub id: u16,
    pub level: AlertLevel,
    pub text: &'static str,
    pub actions: &'static [&'static str],
    pub active: bool,
    pub latched: bool,
    pub acknowledged: bool,
}

impl Alert {
    pub fn shown(&self) -> bool {
        self.active || self.latched
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertEdge {
    pub became_active: bool,
    pub became_inactive: bool,
}

pub const MAX_ALERTS: usize = 96;

#[derive(Clone, Debug, Default)]
pub struct AlertManager {
    alerts: Vec<Alert, MAX_ALERTS>,
}

impl AlertManager {
    pub fn set(
        &mut self,
        id: u16,
        level: AlertLevel,
        text: &'static str,
        active: bool,
        latch: bool,
        actions: &'static [&'static str],
    ) -> AlertEdge {
        let index = match self.alerts.iter().position(|alert| alert.id == id) {
            Some(index) => index,
            None => {
                let alert = Alert {
                    id,
                    level,
                    text,
                    actions,
                    active: false,
                    latched: false,
                    acknowledged: false,
                };
                if self.alerts.push(alert).is_err() {
                    error!("Alert registry full, dropping alert {} {}", id, text);
                    return AlertEdge::default();
                }
                self.alerts.len() - 1
            }
        };

        let alert = &mut self.alerts[index];
        alert.level = level;
        alert.text = text;
        alert.actions = actions;

        let prev_shown = alert.shown();
        alert.active = active;
        if active && latch {
            alert.latched = true;
        }
        let now_shown = alert.shown();

        let edge = AlertEdge {
            became_active: !prev_shown && now_shown,
            became_inactive: prev_shown && !now_shown,
        };
        if edge.became_active {
            alert.acknowledged = false;
        }
        edge
    }

    pub fn clear_latched(&mut self, id: u16) {
        if let Some(alert) = self.alerts.iter_mut().find(|alert| alert.id == id) {
            alert.latched = false;
            if !alert.active {
                alert.acknowledged = false;
            }
        }
    }

    pub fn clear_all_latched(&mut self) {
        self.alerts.iter_mut().for_each(|alert| alert.latched = false);
    }

    pub fn acknowledge_all_visible(&mut self) {
        self.alerts.iter_mut().filter(|a| a.shown()).for_each(|alert| alert.acknowledged = true);
    }

    fn master(&self, level: AlertLevel) -> bool {
        self.alerts.iter().any(|a| a.level == level && a.shown() && !a.acknowledged)
    }

    pub fn master_warning_on(&self) -> bool {
        self.master(AlertLevel::Warning)
    }

    pub fn master_caution_on(&self) -> bool {
        !self.master_warning_on() && self.master(AlertLevel::Caution)
    }

    // Insertion order, not sorted by id
    pub fn shown(&self, level: AlertLevel) -> impl Iterator<Item = &Alert> + '_ {
        self.alerts.iter().filter(move |a| a.level == level && a.shown())
    }

    pub fn get(&self, id: u16) -> Option<&Alert> {
        self.alerts.iter().find(|alert| alert.id == id)
    }

    pub fn all(&self) -> &[Alert] {
        &self.alerts
    }
}
