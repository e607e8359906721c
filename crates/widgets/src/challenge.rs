use crate::card::card;
use iced::{
    widget::{button, column, text},
    Element,
};
use randvar_core::Message;
use randvar_theme::{button_style, ButtonKind, Theme};
use tracing::{debug, warn};

pub const REVEAL: &str = "Reveal Answer";
pub const HIDE: &str = "Hide Answer";

/// A question with an answer that starts hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenge {
    pub question: &'static str,
    pub answer:   &'static str,
}

pub const CHALLENGES: [Challenge; 3] = [
    Challenge {
        question: "Two fair coins are tossed and X counts the heads. \
                   What is the sample space, and what values can X take?",
        answer:   "S = {HH, HT, TH, TT}. X maps HH to 2, HT and TH to 1, and TT to 0, \
                   so X takes the values {0, 1, 2} with P(X = 1) = 1/2.",
    },
    Challenge {
        question: "Is the time until the next bus arrives a discrete or a continuous \
                   random variable?",
        answer:   "Continuous. It can take any value in an interval, so P(T = t) = 0 for \
                   every single t and probabilities come from areas under a density.",
    },
    Challenge {
        question: "A fair die is rolled. What is E[X], and why can no single roll ever \
                   show it?",
        answer:   "E[X] = (1 + 2 + 3 + 4 + 5 + 6) / 6 = 3.5. The expected value is a \
                   long-run average, not an outcome; the dice simulator's average drifts \
                   towards it as rolls accumulate.",
    },
];

/// Reveal state for every challenge card; each toggle is independent.
#[derive(Debug, Clone)]
pub struct ChallengeSet {
    items:    &'static [Challenge],
    revealed: Vec<bool>,
}

impl Default for ChallengeSet {
    fn default() -> Self {
        Self::new(&CHALLENGES)
    }
}

impl ChallengeSet {
    pub fn new(items: &'static [Challenge]) -> Self {
        Self { items, revealed: vec![false; items.len()] }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Flip one answer's visibility, returning the new state.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let Some(slot) = self.revealed.get_mut(index) else {
            warn!(index, "challenge: no such question");
            return None;
        };
        *slot = !*slot;
        debug!(index, revealed = *slot, "challenge: toggled");
        Some(*slot)
    }

    pub fn button_label(&self, index: usize) -> &'static str {
        if self.is_revealed(index) { HIDE } else { REVEAL }
    }

    pub fn view<'a>(&'a self, theme: &'a Theme, alpha: f32) -> Element<'a, Message> {
        let mut cards = column![].spacing(theme.gap as f32);

        for (index, item) in self.items.iter().enumerate() {
            let mut body = column![
                text(format!("Challenge {}", index + 1))
                    .size(theme.heading_size(4))
                    .color(theme.warm.to_iced()),
                text(item.question).size(theme.font_size),
                button(text(self.button_label(index)).size(theme.font_size * 0.9))
                    .on_press(Message::ToggleAnswer(index))
                    .padding([6, 14])
                    .style(button_style(theme, ButtonKind::Secondary, theme.warm)),
            ]
            .spacing(theme.gap as f32);

            if self.is_revealed(index) {
                body = body.push(
                    text(item.answer)
                        .size(theme.font_size * 0.95)
                        .color(theme.muted.to_iced()),
                );
            }

            cards = cards.push(card(body, theme, alpha));
        }

        cards.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_start_hidden() {
        let set = ChallengeSet::default();
        assert_eq!(set.len(), CHALLENGES.len());
        for i in 0..set.len() {
            assert!(!set.is_revealed(i));
            assert_eq!(set.button_label(i), REVEAL);
        }
    }

    #[test]
    fn toggle_flips_label_both_ways() {
        let mut set = ChallengeSet::default();
        assert_eq!(set.toggle(0), Some(true));
        assert_eq!(set.button_label(0), HIDE);
        assert_eq!(set.toggle(0), Some(false));
        assert_eq!(set.button_label(0), REVEAL);
    }

    #[test]
    fn toggles_are_independent() {
        let mut set = ChallengeSet::default();
        set.toggle(1);
        assert!(!set.is_revealed(0));
        assert!(set.is_revealed(1));
        assert!(!set.is_revealed(2));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut set = ChallengeSet::default();
        assert_eq!(set.toggle(99), None);
        assert!(!set.is_revealed(99));
        assert_eq!(set.button_label(99), REVEAL);
    }
}
