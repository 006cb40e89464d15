use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::debug;
use verdant_core::config::{SENSOR_MAX, SENSOR_MIN, WEATHER_CONDITIONS};
use verdant_protocol::{Envelope, PayloadKind};

use crate::app::AppState;

/// Spawn the two simulated-reading loops. They run until process exit.
pub fn spawn(state: Arc<AppState>) {
    let weather_secs = state.config.emitters.weather_interval_secs;
    let sensor_secs = state.config.emitters.sensor_interval_secs;
    tokio::spawn(weather_loop(Arc::clone(&state), weather_secs));
    tokio::spawn(sensor_loop(state, sensor_secs));
}

/// Every tick, broadcast one simulated forecast. Broadcast is a walk of
/// channel pushes and never blocks on a peer, so ticks cannot starve;
/// Skip drops any ticks missed under load instead of bursting.
async fn weather_loop(state: Arc<AppState>, interval_secs: u64) {
    let mut tick = tokio::time::interval(Duration::from_secs(interval_secs));
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tick.tick().await; // consume the immediate first tick

    loop {
        tick.tick().await;
        let condition = weather_condition();
        debug!(%condition, "emitting simulated weather");
        state
            .broadcaster
            .broadcast(&Envelope::new(PayloadKind::Weather, condition).to_json());
    }
}

/// Every tick, broadcast one simulated humidity reading.
async fn sensor_loop(state: Arc<AppState>, interval_secs: u64) {
    let mut tick = tokio::time::interval(Duration::from_secs(interval_secs));
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tick.tick().await;

    loop {
        tick.tick().await;
        let reading = sensor_reading();
        debug!(%reading, "emitting simulated sensor reading");
        state
            .broadcaster
            .broadcast(&Envelope::new(PayloadKind::Sensor, reading).to_json());
    }
}

/// Uniform pick from the three simulated conditions.
fn weather_condition() -> &'static str {
    WEATHER_CONDITIONS[rand::random_range(0..WEATHER_CONDITIONS.len())]
}

/// Simulated humidity percentage in [SENSOR_MIN, SENSOR_MAX).
fn sensor_reading() -> String {
    rand::random_range(SENSOR_MIN..SENSOR_MAX).to_string()
}
