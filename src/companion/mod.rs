pub mod cycle;
pub mod expression;

pub use cycle::{CycleEvent, CycleTimer};
pub use expression::Expression;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// How often the thought bubble prompt appears.
pub const ATTENTION_PERIOD: Duration = Duration::from_secs(7);
/// How long the bubble stays up once shown.
pub const ATTENTION_HOLD: Duration = Duration::from_secs(5);
/// How often the robot changes expression.
pub const EXPRESSION_PERIOD: Duration = Duration::from_secs(4);
/// How long a drawn expression lasts before snapping back to neutral.
pub const EXPRESSION_HOLD: Duration = Duration::from_millis(500);

/// Animation state machine for the floating robot widget.
///
/// Two independent cycles share the widget: the attention cycle toggles the
/// thought bubble, the expression cycle flashes a randomly drawn face. Both
/// are advanced from the tick event and freeze at [`Companion::stop`] - a
/// tick that arrives after teardown changes nothing.
#[derive(Debug)]
pub struct Companion {
    started_at: Option<Instant>,
    attention_cycle: CycleTimer,
    expression_cycle: CycleTimer,
    attention_visible: bool,
    expression: Expression,
    rng: StdRng,
}

impl Companion {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic variant for tests.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            started_at: None,
            attention_cycle: CycleTimer::new(ATTENTION_PERIOD, ATTENTION_HOLD),
            expression_cycle: CycleTimer::new(EXPRESSION_PERIOD, EXPRESSION_HOLD),
            attention_visible: false,
            expression: Expression::Neutral,
            rng,
        }
    }

    /// Begins the idle animation from scratch: bubble hidden, neutral face,
    /// timers at zero. Calling `start` while already running is a no-op, so a
    /// cycle can never end up double-registered.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_some() {
            return;
        }
        self.attention_cycle = CycleTimer::new(ATTENTION_PERIOD, ATTENTION_HOLD);
        self.expression_cycle = CycleTimer::new(EXPRESSION_PERIOD, EXPRESSION_HOLD);
        self.attention_visible = false;
        self.expression = Expression::Neutral;
        self.started_at = Some(now);
    }

    /// Tears both cycles down, pending one-shots included. The last rendered
    /// values freeze in place; later ticks are no-ops.
    pub fn stop(&mut self) {
        self.started_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Catches both cycles up to `now`, replaying any firings and reverts
    /// that fell due since the last tick. Returns true when either observable
    /// value actually changed, which is what drives a redraw.
    pub fn advance(&mut self, now: Instant) -> bool {
        let Some(epoch) = self.started_at else {
            return false;
        };
        let elapsed = now.saturating_duration_since(epoch);

        let was_visible = self.attention_visible;
        let was_expression = self.expression;

        let visible = &mut self.attention_visible;
        self.attention_cycle.advance(elapsed, |event| match event {
            CycleEvent::Fired => *visible = true,
            CycleEvent::Reverted => *visible = false,
        });

        let rng = &mut self.rng;
        let expression = &mut self.expression;
        self.expression_cycle.advance(elapsed, |event| match event {
            CycleEvent::Fired => *expression = Expression::random(rng),
            CycleEvent::Reverted => *expression = Expression::Neutral,
        });

        self.attention_visible != was_visible || self.expression != was_expression
    }

    /// Whether the "Tap me when you're ready!" bubble is showing.
    pub fn attention_visible(&self) -> bool {
        self.attention_visible
    }

    /// The face currently on the robot.
    pub fn expression(&self) -> Expression {
        self.expression
    }
}

impl Default for Companion {
    fn default() -> Self {
        Self::new()
    }
}
