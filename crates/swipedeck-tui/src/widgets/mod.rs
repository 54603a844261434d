mod deck;
mod glow;
mod nav;
mod popup;
mod status_bar;

pub use deck::{card_rect, glyph_symbol, wrap_text, DeckWidget};
pub use glow::{gradient_alpha, GlowWidget};
pub use nav::NavWidget;
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;
