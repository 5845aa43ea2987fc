//! TUI pane rendering modules
//!
//! Each pane module exports a stateless `render_*` function. Scroll offsets
//! live in [`App`](crate::ui::App) and are clamped here at draw time.
//!
//! # Pane Modules
//!
//! - [`transcript`]: every submitted line with its echo or error
//! - [`input`]: the line being edited
//! - [`tokens`]: token table of the latest evaluation
//! - [`trace`]: reduction snapshots of the latest evaluation
//! - [`status`]: status bar with keybindings and session counters

pub mod input;
pub mod status;
pub mod tokens;
pub mod trace;
pub mod transcript;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

// Re-export render functions for convenience
pub use input::render_input_pane;
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;
pub use trace::render_trace_pane;
pub use transcript::render_transcript_pane;

fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp a scroll offset so the last page stays full. `usize::MAX` pins the
/// view to the bottom.
fn clamp_scroll(scroll_offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }
}
