use std::fmt::{Display, Formatter};
use std::time::Duration;

use rivercross::{BoatLoad, Configuration, Solution};

const MIN_SPEED: f32 = 0.5;
const MAX_SPEED: f32 = 10.0;
const SPEED_STEP: f32 = 0.5;

/// Where the playback is in its life.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    CollectingInput,
    Animating { step: usize },
    Solved,
    Unsolvable,
}

/// One step shown to the user.
pub struct Frame {
    pub index: usize,
    pub configuration: Configuration,
    // who rowed over to get here; nobody for the first step
    pub in_transit: Option<BoatLoad>,
}

impl Display for Frame {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Step {}: {}", self.index, self.configuration)?;
        if let Some(load) = self.in_transit {
            write!(f, "  <- rowed {load}")?;
        }
        Ok(())
    }
}

/// Steps through a [`Solution`] one configuration at a time.
pub struct Playback {
    phase: Phase,
    solution: Solution,
    speed: f32,
}

impl Playback {
    /// A playback waiting for a solution, stepping `speed` times per second.
    ///
    /// `speed` is clamped to `0.5..=10.0` and rounded to a multiple of 0.5.
    pub fn new(speed: f32) -> Self {
        let speed = match speed.is_nan() {
            true => 1.0,
            false => ((speed / SPEED_STEP).round() * SPEED_STEP).clamp(MIN_SPEED, MAX_SPEED),
        };

        Self {
            phase: Phase::CollectingInput,
            solution: Solution::default(),
            speed,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// How long each step stays on screen.
    pub fn step_delay(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.speed)
    }

    /// Hand over the result of a search. Ignored unless input is still being collected.
    pub fn submit(&mut self, solution: Solution) {
        if self.phase != Phase::CollectingInput {
            return;
        }

        self.phase = match solution.found() {
            true => Phase::Animating { step: 0 },
            false => Phase::Unsolvable,
        };
        self.solution = solution;
    }

    /// Produce the current step and move on to the next, finishing once the goal has been shown.
    ///
    /// Returns `None` when not animating.
    pub fn advance(&mut self) -> Option<Frame> {
        let Phase::Animating { step } = self.phase else {
            return None;
        };

        let path = self.solution.path();
        let configuration = *path.get(step)?;
        let in_transit = step.checked_sub(1)
            .and_then(|previous| path.get(previous))
            .and_then(|previous| BoatLoad::between(previous, &configuration));

        self.phase = match step + 1 < path.len() {
            true => Phase::Animating { step: step + 1 },
            false => Phase::Solved,
        };

        Some(Frame { index: step, configuration, in_transit })
    }
}
