//! Card rendering
//!
//! - `plan.rs`: items to render operations (pure).
//! - `surface.rs`: the `Surface` seam and the in-memory `Container`.
//! - `html.rs`: static HTML adapter.
//! - `text.rs`: plain-text adapter for terminals.

pub mod html;
mod plan;
mod surface;
pub mod text;

pub use plan::{
    plan_cards, plan_load_failure, Card, CardImage, CardLink, LinkTarget, Placeholder,
    PlaceholderKind, RenderOp, RenderPlan,
};
pub use surface::{Container, Surface};
