//! Static lesson text and the page layout it is laid out in.
//!
//! Every section is drawn at a fixed height so the navigator can compute
//! section extents without measuring widgets.

use crate::card::card;
use iced::{
    widget::{column, container, row, text},
    Element, Length,
};
use randvar_core::{Message, SectionId};
use randvar_theme::Theme;

/// Vertical space between sections.
pub const SECTION_GAP: f32 = 48.0;

/// A titled paragraph shown on its own card.
#[derive(Debug, Clone, Copy)]
pub struct Block {
    pub heading: &'static str,
    pub body:    &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub id:     SectionId,
    pub title:  &'static str,
    pub lead:   &'static str,
    pub height: f32,
    pub blocks: &'static [Block],
}

pub const SECTIONS: [Section; 7] = [
    Section {
        id:     SectionId::Home,
        title:  "Random Variables & Sample Spaces",
        lead:   "An interactive introduction to the language of chance: what can happen, \
                 and how we attach numbers to it.",
        height: 360.0,
        blocks: &[Block {
            heading: "Why random variables?",
            body:    "Outcomes such as \"heads\" or \"the third card is a queen\" are hard to \
                      compute with. A random variable turns every outcome into a number, and \
                      numbers can be added, averaged and plotted.",
        }],
    },
    Section {
        id:     SectionId::SampleSpace,
        title:  "Sample Spaces",
        lead:   "The sample space S is the set of every possible outcome of an experiment.",
        height: 520.0,
        blocks: &[
            Block {
                heading: "Finite sample spaces",
                body:    "Rolling one die gives S = {1, 2, 3, 4, 5, 6}. Tossing two coins \
                          gives S = {HH, HT, TH, TT}. Each outcome can be listed.",
            },
            Block {
                heading: "Events",
                body:    "An event is a subset of S. \"The roll is even\" is the event \
                          {2, 4, 6}, and with equally likely outcomes its probability is 3/6.",
            },
        ],
    },
    Section {
        id:     SectionId::RandomVariables,
        title:  "Random Variables",
        lead:   "A random variable X is a function from the sample space to the real numbers.",
        height: 520.0,
        blocks: &[
            Block {
                heading: "Outcomes to numbers",
                body:    "For two coin tosses let X be the number of heads: X(HH) = 2, \
                          X(HT) = X(TH) = 1 and X(TT) = 0. Several outcomes may share a value.",
            },
            Block {
                heading: "Distributions",
                body:    "The distribution of X records how probability spreads over its \
                          values. Here P(X = 0) = 1/4, P(X = 1) = 1/2 and P(X = 2) = 1/4.",
            },
        ],
    },
    Section {
        id:     SectionId::Discrete,
        title:  "Discrete Random Variables",
        lead:   "A discrete random variable takes countably many values, each with a \
                 probability of its own.",
        height: 520.0,
        blocks: &[
            Block {
                heading: "Probability mass function",
                body:    "p(x) = P(X = x) for every value x. The masses are non-negative and \
                          sum to 1. A fair die has p(x) = 1/6 for x in 1..6.",
            },
            Block {
                heading: "Expected value",
                body:    "E[X] is the probability-weighted sum of the values. For a fair die \
                          E[X] = 3.5, which no roll can show but many rolls average towards.",
            },
        ],
    },
    Section {
        id:     SectionId::Continuous,
        title:  "Continuous Random Variables",
        lead:   "A continuous random variable ranges over an interval; single points carry \
                 no probability.",
        height: 520.0,
        blocks: &[
            Block {
                heading: "Probability density",
                body:    "Probabilities are areas under a density f. For Y uniform on [0, 1), \
                          f(y) = 1 and P(a <= Y < b) = b - a.",
            },
            Block {
                heading: "Expected value",
                body:    "E[Y] is the integral of y f(y). For the uniform spinner E[Y] = 0.5, \
                          the value its running average settles near.",
            },
        ],
    },
    Section {
        id:     SectionId::Simulators,
        title:  "Try It Yourself",
        lead:   "Sample a random variable by hand, or a hundred times at once, and watch the \
                 empirical distribution take shape.",
        height: 860.0,
        blocks: &[],
    },
    Section {
        id:     SectionId::Challenges,
        title:  "Challenges",
        lead:   "Test your understanding, then reveal the answers.",
        height: 900.0,
        blocks: &[],
    },
];

/// `(id, height)` for every section, top to bottom.
pub fn heights() -> Vec<(SectionId, f32)> {
    SECTIONS.iter().map(|s| (s.id, s.height)).collect()
}

/// Section title and lead paragraph.
pub fn header<'a>(section: &'a Section, theme: &'a Theme) -> Element<'a, Message> {
    let size = if section.id == SectionId::Home { theme.heading_size(1) } else { theme.heading_size(2) };

    column![
        text(section.title).size(size).color(theme.foreground.to_iced()),
        text(section.lead).size(theme.font_size * 1.1).color(theme.muted.to_iced()),
    ]
    .spacing(theme.gap as f32 / 2.0)
    .into()
}

/// A text-only section: header followed by one card per block.
pub fn view<'a>(section: &'a Section, theme: &'a Theme, alpha: f32) -> Element<'a, Message> {
    let cards = section.blocks.iter().fold(row![].spacing(theme.gap as f32), |cards, block| {
        cards.push(card(
            column![
                text(block.heading)
                    .size(theme.heading_size(4))
                    .color(theme.accent.to_iced()),
                text(block.body).size(theme.font_size),
            ]
            .spacing(theme.gap as f32 / 2.0),
            theme,
            alpha,
        ))
    });

    frame(column![header(section, theme), cards].spacing(theme.gap as f32 * 2.0), section)
}

/// Pin `content` to its section's height.
pub fn frame<'a>(content: impl Into<Element<'a, Message>>, section: &Section) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(section.height))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_follow_id_order() {
        for (i, id) in SectionId::ALL.iter().enumerate() {
            assert_eq!(SECTIONS[i].id, *id);
        }
    }

    #[test]
    fn heights_are_positive() {
        assert!(heights().iter().all(|&(_, h)| h > 0.0));
    }
}
