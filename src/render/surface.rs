use super::plan::{Card, Placeholder, RenderOp, RenderPlan};

/// Something a [`RenderPlan`] can be applied to
pub trait Surface {
    /// Drop every card and placeholder currently shown
    fn clear(&mut self);

    /// Append one card after the existing ones
    fn append_card(&mut self, card: Card);

    /// Show a placeholder; replaces the container content
    fn show_placeholder(&mut self, placeholder: Placeholder);

    /// Apply every operation of `plan`, in order
    fn apply(&mut self, plan: RenderPlan) {
        for op in plan.into_ops() {
            match op {
                RenderOp::Clear => self.clear(),
                RenderOp::AppendCard(card) => self.append_card(card),
                RenderOp::ShowPlaceholder(placeholder) => self.show_placeholder(placeholder),
            }
        }
    }
}

/// In-memory card container
///
/// Holds exactly what a display would show: either cards or a single
/// placeholder. Front-ends draw from it; tests inspect it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    cards: Vec<Card>,
    placeholder: Option<Placeholder>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        self.placeholder.as_ref()
    }

}

impl Surface for Container {
    fn clear(&mut self) {
        self.cards.clear();
        self.placeholder = None;
    }

    fn append_card(&mut self, card: Card) {
        self.placeholder = None;
        self.cards.push(card);
    }

    fn show_placeholder(&mut self, placeholder: Placeholder) {
        self.cards.clear();
        self.placeholder = Some(placeholder);
    }
}
