//! Open/close lifecycle of section content, sequenced against camera arrival.

use crate::constants::{CLOSE_DURATION_SEC, REVEAL_DELAY_SEC};
use crate::timer::TimerQueue;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecyclePhase {
    Idle,
    Opening,
    AwaitingReveal,
    Open,
    Closing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneLifecycleState {
    pub hovered_section: usize,
    pub active_section: Option<usize>,
    pub camera_ready: bool,
    pub modal_visible: bool,
    pub modal_closing: bool,
}

impl SceneLifecycleState {
    pub fn phase(&self) -> LifecyclePhase {
        match self.active_section {
            None => LifecyclePhase::Idle,
            Some(_) if self.modal_closing => LifecyclePhase::Closing,
            Some(_) if self.modal_visible => LifecyclePhase::Open,
            Some(_) if self.camera_ready => LifecyclePhase::AwaitingReveal,
            Some(_) => LifecyclePhase::Opening,
        }
    }

    /// Section that drives the camera, particles and floor: the open one if
    /// any, otherwise whatever the menu is hovering.
    pub fn scene_section(&self) -> usize {
        self.active_section.unwrap_or(self.hovered_section)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LifecycleTimer {
    Reveal,
    FinishClose,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    Opening(usize),
    Redirected { from: usize, to: usize },
    CameraReady(usize),
    Revealed(usize),
    Closing(usize),
    Closed(usize),
}

pub struct SceneCoordinator {
    state: SceneLifecycleState,
    section_count: usize,
    timers: TimerQueue<LifecycleTimer>,
    epoch: u64,
}

impl SceneCoordinator {
    /// `section_count` is K: selectable sections are `1..=K`.
    pub fn new(section_count: usize) -> Self {
        Self {
            state: SceneLifecycleState {
                hovered_section: 0,
                active_section: None,
                camera_ready: false,
                modal_visible: false,
                modal_closing: false,
            },
            section_count,
            timers: TimerQueue::default(),
            epoch: 0,
        }
    }

    pub fn state(&self) -> &SceneLifecycleState {
        &self.state
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.state.phase()
    }

    pub fn scene_section(&self) -> usize {
        self.state.scene_section()
    }

    pub fn section_active(&self) -> bool {
        self.state.active_section.is_some()
    }

    /// Count of opens and redirects so far. Arrival bookkeeping keys on it.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn hover(&mut self, section: usize) {
        self.state.hovered_section = if section <= self.section_count {
            section
        } else {
            log::warn!("[lifecycle] hover {} out of range, using 0", section);
            0
        };
    }

    /// Single ingress for every "open this section" trigger.
    pub fn select(&mut self, section: usize) -> Option<LifecycleEvent> {
        if section == 0 || section > self.section_count {
            log::warn!("[lifecycle] ignoring select of section {}", section);
            return None;
        }
        match self.state.active_section {
            None => {
                self.state.active_section = Some(section);
                self.epoch += 1;
                log::info!("[lifecycle] opening section {}", section);
                Some(LifecycleEvent::Opening(section))
            }
            Some(current) if current == section => {
                if self.state.modal_closing {
                    None
                } else {
                    Some(self.begin_close(current))
                }
            }
            Some(current) => {
                self.timers.clear();
                self.state.active_section = Some(section);
                self.state.camera_ready = false;
                self.state.modal_visible = false;
                self.state.modal_closing = false;
                self.epoch += 1;
                log::info!("[lifecycle] redirect {} -> {}", current, section);
                Some(LifecycleEvent::Redirected {
                    from: current,
                    to: section,
                })
            }
        }
    }

    pub fn close(&mut self) -> Option<LifecycleEvent> {
        let current = self.state.active_section?;
        match self.phase() {
            LifecyclePhase::Open => Some(self.begin_close(current)),
            LifecyclePhase::Opening | LifecyclePhase::AwaitingReveal => {
                // Nothing is visibly open yet, so skip the closing animation.
                self.reset_to_idle();
                log::info!("[lifecycle] cancelled opening of section {}", current);
                Some(LifecycleEvent::Closed(current))
            }
            LifecyclePhase::Closing | LifecyclePhase::Idle => None,
        }
    }

    /// Camera rig arrival report; stale reports for another section are dropped.
    pub fn camera_arrived(&mut self, section: usize) -> Option<LifecycleEvent> {
        if self.phase() != LifecyclePhase::Opening || self.state.active_section != Some(section) {
            return None;
        }
        self.state.camera_ready = true;
        self.timers.schedule_after(REVEAL_DELAY_SEC, LifecycleTimer::Reveal);
        Some(LifecycleEvent::CameraReady(section))
    }

    /// Advance the timer clock; fired timers only flip state for the next frame.
    pub fn advance(&mut self, dt_sec: f32) -> SmallVec<[LifecycleEvent; 2]> {
        let mut events = SmallVec::new();
        for timer in self.timers.advance(dt_sec) {
            let Some(section) = self.state.active_section else {
                continue;
            };
            match timer {
                LifecycleTimer::Reveal if self.phase() == LifecyclePhase::AwaitingReveal => {
                    self.state.modal_visible = true;
                    log::debug!("[lifecycle] revealed section {}", section);
                    events.push(LifecycleEvent::Revealed(section));
                }
                LifecycleTimer::FinishClose if self.state.modal_closing => {
                    self.reset_to_idle();
                    log::debug!("[lifecycle] closed section {}", section);
                    events.push(LifecycleEvent::Closed(section));
                }
                _ => {}
            }
        }
        events
    }

    fn begin_close(&mut self, section: usize) -> LifecycleEvent {
        self.timers.clear();
        self.state.modal_closing = true;
        self.timers
            .schedule_after(CLOSE_DURATION_SEC, LifecycleTimer::FinishClose);
        log::info!("[lifecycle] closing section {}", section);
        LifecycleEvent::Closing(section)
    }

    fn reset_to_idle(&mut self) {
        self.timers.clear();
        self.state.active_section = None;
        self.state.camera_ready = false;
        self.state.modal_visible = false;
        self.state.modal_closing = false;
    }
}
