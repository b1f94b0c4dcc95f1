//! Hover card re-exports, so component imports stay in one place.

pub use dioxus_primitives::hover_card::{HoverCard, HoverCardContent, HoverCardTrigger};
