/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and flocking statistics to be displayed in the UI.
 */

use std::time::Duration;

use crate::flock::TickSummary;

// Debug information to display
#[derive(Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks: u64,
    pub last_summary: TickSummary,
}

impl DebugInfo {
    pub fn record_tick(&mut self, summary: TickSummary) {
        self.ticks += 1;
        self.last_summary = summary;
    }
}
