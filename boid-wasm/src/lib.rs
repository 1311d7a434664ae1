use boid_core::{BoidConfig, Bounds, Flock};
use boid_shared::FrameSnapshot;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

/// Floats per boid in [`BoidSimulation::snapshot`]: x, y, vx, vy.
pub const SNAPSHOT_STRIDE: usize = 4;

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Simulation handle driven from a `requestAnimationFrame` loop.
///
/// Call `tick(performance.now())` once per frame, then read `snapshot()`
/// to draw. The page owns the canvas; nothing here touches the DOM.
#[wasm_bindgen]
pub struct BoidSimulation {
    flock: Flock,
    last_tick_ms: f64,
}

#[wasm_bindgen]
impl BoidSimulation {
    /// `seed` makes the run reproducible; pass `undefined` for a random one.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: f32,
        height: f32,
        boid_count: usize,
        seed: Option<u64>,
    ) -> Result<BoidSimulation, JsValue> {
        console_log!("Initializing boid simulation with {} boids", boid_count);

        let bounds = Bounds::new(width, height).map_err(js_error)?;
        let config = BoidConfig::default();
        let flock = match seed {
            Some(seed) => Flock::from_seed(boid_count, bounds, config, seed),
            None => Flock::from_entropy(boid_count, bounds, config),
        }
        .map_err(js_error)?;

        Ok(BoidSimulation {
            flock,
            last_tick_ms: 0.0,
        })
    }

    pub fn tick(&mut self, now: f64) {
        let was_active = self.flock.cluster_active();
        self.flock.tick(now);
        self.last_tick_ms = now;
        if self.flock.cluster_active() != was_active {
            console_log!(
                "Cluster pulse {}",
                if was_active { "ended" } else { "started" }
            );
        }
    }

    /// Flat `[x, y, vx, vy, ...]` copy of the population after the last tick.
    pub fn snapshot(&self) -> js_sys::Float32Array {
        let flat = flatten(self.flock.snapshot().iter().map(|b| {
            [b.position.x, b.position.y, b.velocity.x, b.velocity.y]
        }));
        js_sys::Float32Array::from(flat.as_slice())
    }

    /// Same as `snapshot`, as a structured object.
    #[wasm_bindgen(js_name = snapshotObject)]
    pub fn snapshot_object(&self) -> Result<JsValue, JsValue> {
        let frame = self.frame_snapshot();
        let json = serde_json::to_string(&frame).map_err(js_error)?;
        js_sys::JSON::parse(&json)
    }

    /// Flat `[i, j, ...]` index pairs to join with connection lines.
    /// Pairs that are only close across a world edge are left out.
    #[wasm_bindgen(js_name = connectionPairs)]
    pub fn connection_pairs(&self, radius: f32) -> js_sys::Uint32Array {
        let flat: Vec<u32> = self
            .flock
            .connection_pairs(radius)
            .flat_map(|(i, j)| [i as u32, j as u32])
            .collect();
        js_sys::Uint32Array::from(flat.as_slice())
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.flock.set_bounds(width, height).map_err(js_error)?;
        console_log!("Resized to {}x{}", width, height);
        Ok(())
    }

    #[wasm_bindgen(js_name = triggerCluster)]
    pub fn trigger_cluster(&mut self, now: f64) {
        self.flock.trigger_cluster(now);
    }

    #[wasm_bindgen(js_name = clusterActive)]
    pub fn cluster_active(&self) -> bool {
        self.flock.cluster_active()
    }

    pub fn boid_count(&self) -> usize {
        self.flock.len()
    }

    pub fn set_separation_weight(&mut self, weight: f32) -> Result<(), JsValue> {
        self.update_config(|c| c.separation_weight = weight)
    }

    pub fn set_alignment_weight(&mut self, weight: f32) -> Result<(), JsValue> {
        self.update_config(|c| c.alignment_weight = weight)
    }

    pub fn set_cohesion_weight(&mut self, weight: f32) -> Result<(), JsValue> {
        self.update_config(|c| c.cohesion_weight = weight)
    }

    pub fn set_speed_range(&mut self, min: f32, max: f32) -> Result<(), JsValue> {
        self.update_config(|c| {
            c.min_speed = min;
            c.max_speed = max;
        })
    }
}

impl BoidSimulation {
    fn update_config(&mut self, edit: impl FnOnce(&mut BoidConfig)) -> Result<(), JsValue> {
        let mut config = *self.flock.config();
        edit(&mut config);
        self.flock.set_config(config).map_err(js_error)
    }

    pub fn frame_snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::new(
            self.flock.ticks(),
            self.last_tick_ms,
            self.flock.cluster_active(),
            self.flock.snapshot(),
        )
    }
}

fn flatten(rows: impl Iterator<Item = [f32; SNAPSHOT_STRIDE]>) -> Vec<f32> {
    rows.flatten().collect()
}
