pub mod animation;
pub mod chart;
pub mod easing;
pub mod element;
pub mod error;
pub mod event;
pub mod history;
pub mod outcome;
pub mod source;
pub mod state;
pub mod stats;
pub mod widget;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{Result, RvError};
pub use event::{Action, Message, SectionId};
pub use outcome::{DiceOutcome, Outcome, SpinnerOutcome};
pub use source::{FixedSource, RandomSource, ThreadRngSource};
pub use state::SurfaceState;
pub use widget::{Ports, Simulator};
