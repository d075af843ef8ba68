//! Ordered System Pipeline
//!
//! A scene's simulation is a list of small systems, each mutating the scene
//! world once per tick. Systems are kept sorted by an explicit `order` so the
//! tick sequence (input, pause, movement, collision, rules, ...) is stated
//! in one place rather than implied by registration order.

use crate::core::EventQueue;

/// Per-tick data handed to every system
#[derive(Debug)]
pub struct TickCtx<'a> {
    /// Seconds simulated by this tick (already time-scaled)
    pub dt: f32,
    /// Index of this tick since engine start
    pub tick: u64,
    /// Event queue for system-to-scene communication
    pub events: &'a mut EventQueue,
}

/// A simulation step run once per fixed tick against the scene world `W`
pub trait System<W> {
    /// System name for debugging/logging
    fn name(&self) -> &'static str;

    /// Position in the pipeline; lower runs first
    fn order(&self) -> i32 {
        0
    }

    /// Whether this system should run for the current world state
    fn enabled(&self, _world: &W) -> bool {
        true
    }

    /// Execute one tick
    fn step(&mut self, world: &mut W, ctx: &mut TickCtx<'_>);
}

/// An ordered collection of systems for a scene world
pub struct SystemPipeline<W> {
    systems: Vec<Box<dyn System<W>>>,
}

impl<W> SystemPipeline<W> {
    /// Create an empty pipeline
    #[must_use]
    pub fn new() -> Self {
        Self {
            systems: Vec::new(),
        }
    }

    /// Insert a system, keeping the pipeline sorted by ascending order.
    ///
    /// Ties keep insertion order.
    pub fn add(&mut self, system: Box<dyn System<W>>) {
        let order = system.order();
        let index = self
            .systems
            .partition_point(|s| s.order() <= order);
        self.systems.insert(index, system);
        log::debug!("pipeline: added system '{}' at order {}", self.systems[index].name(), order);
    }

    /// Run every enabled system once, in order
    pub fn run(&mut self, world: &mut W, ctx: &mut TickCtx<'_>) {
        for system in &mut self.systems {
            if system.enabled(world) {
                system.step(world, ctx);
            }
        }
    }

    /// Number of registered systems
    #[must_use]
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Whether the pipeline has no systems
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// System names in execution order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.systems.iter().map(|s| s.name())
    }
}

impl<W> Default for SystemPipeline<W> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestWorld {
        log: Vec<&'static str>,
        gate: bool,
    }

    struct Recorder {
        name: &'static str,
        order: i32,
    }

    impl System<TestWorld> for Recorder {
        fn name(&self) -> &'static str {
            self.name
        }

        fn order(&self) -> i32 {
            self.order
        }

        fn step(&mut self, world: &mut TestWorld, _ctx: &mut TickCtx<'_>) {
            world.log.push(self.name);
        }
    }

    struct Gated;

    impl System<TestWorld> for Gated {
        fn name(&self) -> &'static str {
            "gated"
        }

        fn enabled(&self, world: &TestWorld) -> bool {
            world.gate
        }

        fn step(&mut self, world: &mut TestWorld, _ctx: &mut TickCtx<'_>) {
            world.log.push("gated");
        }
    }

    fn run_once(pipeline: &mut SystemPipeline<TestWorld>, world: &mut TestWorld) {
        let mut events = EventQueue::new();
        let mut ctx = TickCtx {
            dt: 1.0 / 60.0,
            tick: 0,
            events: &mut events,
        };
        pipeline.run(world, &mut ctx);
    }

    #[test]
    fn test_pipeline_runs_in_order() {
        let mut pipeline = SystemPipeline::new();
        pipeline.add(Box::new(Recorder {
            name: "rules",
            order: 50,
        }));
        pipeline.add(Box::new(Recorder {
            name: "input",
            order: 10,
        }));
        pipeline.add(Box::new(Recorder {
            name: "movement",
            order: 20,
        }));

        let mut world = TestWorld {
            log: Vec::new(),
            gate: false,
        };
        run_once(&mut pipeline, &mut world);

        assert_eq!(world.log, vec!["input", "movement", "rules"]);
    }

    #[test]
    fn test_pipeline_skips_disabled() {
        let mut pipeline = SystemPipeline::new();
        pipeline.add(Box::new(Gated));
        pipeline.add(Box::new(Recorder {
            name: "always",
            order: 1,
        }));

        let mut world = TestWorld {
            log: Vec::new(),
            gate: false,
        };
        run_once(&mut pipeline, &mut world);
        assert_eq!(world.log, vec!["always"]);

        world.gate = true;
        world.log.clear();
        run_once(&mut pipeline, &mut world);
        assert_eq!(world.log, vec!["gated", "always"]);
    }

    #[test]
    fn test_equal_orders_keep_insertion_order() {
        let mut pipeline = SystemPipeline::new();
        pipeline.add(Box::new(Recorder {
            name: "first",
            order: 10,
        }));
        pipeline.add(Box::new(Recorder {
            name: "second",
            order: 10,
        }));

        let mut world = TestWorld {
            log: Vec::new(),
            gate: false,
        };
        run_once(&mut pipeline, &mut world);
        assert_eq!(world.log, vec!["first", "second"]);
    }
}
