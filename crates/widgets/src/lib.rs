pub mod card;
pub mod challenge;
pub mod dice;
pub mod lesson;
pub mod nav;
pub mod spinner;

pub use challenge::ChallengeSet;
pub use dice::DiceSimulator;
pub use nav::Navigator;
pub use spinner::SpinnerSimulator;
