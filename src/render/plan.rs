//! Card renderer: items in, render operations out
//!
//! Rendering never touches a display directly. It produces a
//! [`RenderPlan`], which a [`Surface`](super::Surface) then applies.
//! Every plan begins with [`RenderOp::Clear`], so applying a plan always
//! replaces whatever was shown before.

use crate::catalog::Item;
use crate::config::Messages;

/// Picture of a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    pub src: String,
    /// Alternate text, always the item name
    pub alt: String,
}

/// Where a card link opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// A new browsing context (tab, window, external browser)
    NewContext,
}

/// Outbound link of a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    pub href: String,
    pub label: String,
    pub target: LinkTarget,
}

/// One rendered item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub image: CardImage,
    pub heading: String,
    /// Inline markup, passed through untouched
    pub specifications: String,
    pub history: String,
    pub link: CardLink,
}

impl Card {
    pub fn from_item(item: &Item, link_label: &str) -> Self {
        Self {
            image: CardImage {
                src: item.image.clone(),
                alt: item.name.clone(),
            },
            heading: item.name.clone(),
            specifications: item.specifications.clone(),
            history: item.history.clone(),
            link: CardLink {
                href: item.link.clone(),
                label: link_label.to_string(),
                target: LinkTarget::NewContext,
            },
        }
    }
}

/// Why a placeholder is shown instead of cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    NoResults,
    LoadFailed,
}

/// Static message shown in place of cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub kind: PlaceholderKind,
    pub message: String,
}

/// A single step applied to the card container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    Clear,
    AppendCard(Card),
    ShowPlaceholder(Placeholder),
}

/// Ordered description of a full container render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    ops: Vec<RenderOp>,
}

impl RenderPlan {
    pub fn into_ops(self) -> Vec<RenderOp> {
        self.ops
    }

    /// Number of cards this plan appends
    pub fn card_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, RenderOp::AppendCard(_)))
            .count()
    }
}

/// Plan one card per item, in order, or the "no results" placeholder.
pub fn plan_cards<'a, I>(items: I, messages: &Messages) -> RenderPlan
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut ops = vec![RenderOp::Clear];
    ops.extend(
        items
            .into_iter()
            .map(|item| RenderOp::AppendCard(Card::from_item(item, &messages.link_label))),
    );

    if ops.len() == 1 {
        ops.push(RenderOp::ShowPlaceholder(Placeholder {
            kind: PlaceholderKind::NoResults,
            message: messages.no_results.clone(),
        }));
    }

    RenderPlan { ops }
}

/// Plan the fixed load-failure message
pub fn plan_load_failure(messages: &Messages) -> RenderPlan {
    RenderPlan {
        ops: vec![
            RenderOp::Clear,
            RenderOp::ShowPlaceholder(Placeholder {
                kind: PlaceholderKind::LoadFailed,
                message: messages.load_failed.clone(),
            }),
        ],
    }
}
