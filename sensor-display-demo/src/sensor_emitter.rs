// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Simulated accelerometer publishing on an [`EventHub`].

use crate::config::EmitterConfig;
use sensor_display::{CancellationToken, ChannelEvent, EventHub, SensorSample};
use tokio::time::sleep;

/// Sine-wave sensor with uniform noise.
///
/// `x` and `y` trace a circle of radius `amplitude`, `z` oscillates at half the speed.
pub struct SensorEmitter {
    config: EmitterConfig,
    rng: fastrand::Rng,
    tick: u64,
}

impl SensorEmitter {
    pub fn new(config: EmitterConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
        Self {
            config,
            rng,
            tick: 0,
        }
    }

    /// Next simulated reading.
    pub fn next_sample(&mut self) -> SensorSample {
        let t = self.tick as f64 * 0.1;
        self.tick += 1;

        let amplitude = self.config.amplitude;
        SensorSample::new(
            amplitude * t.sin() + self.noise(),
            amplitude * t.cos() + self.noise(),
            amplitude * (t / 2.0).sin() + self.noise(),
        )
    }

    /// Emits a sample on `event` every interval until cancelled or the hub closes.
    ///
    /// Returns the number of emitted events.
    pub async fn run(
        mut self,
        hub: EventHub,
        event: String,
        cancel_token: CancellationToken,
    ) -> u64 {
        let interval = self.config.interval();
        let mut emitted = 0;
        tracing::info!(%event, interval_ms = self.config.interval_ms, "sensor emitter started");

        loop {
            tokio::select! {
                () = cancel_token.cancelled() => break,
                () = sleep(interval) => {
                    let sample = self.next_sample();
                    if let Err(error) = hub.send(ChannelEvent::new(event.as_str(), sample.to_payload())) {
                        tracing::warn!(%error, "sensor emitter stopping");
                        break;
                    }
                    emitted += 1;
                }
            }
        }

        tracing::info!(%event, emitted, "sensor emitter stopped");
        emitted
    }

    fn noise(&mut self) -> f64 {
        (self.rng.f64() - 0.5) * 2.0 * self.config.noise
    }
}
