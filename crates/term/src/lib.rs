//! Terminal presentation layer.
//!
//! - [`fb`]: styled-cell framebuffer (pure)
//! - [`game_view`]: maps round snapshots + fall positions into a framebuffer (pure)
//! - [`renderer`]: flushes a framebuffer to a real terminal via crossterm

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, FrameBuffer, Tint};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
