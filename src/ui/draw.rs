//! Top-level drawing coordinator.
//!
//! Two steps per frame:
//!
//! 1. **View Model Computation**: `AppState` → `UIViewModel`
//! 2. **Component Rendering**: the view model is printed by the components
//!    using the palette and the surface's color tokens

use crate::app::AppState;
use crate::ui::components::{self, Frame};

/// Draws the plugin UI to stdout.
///
/// Paints the full `rows` × `cols` area, so no separate clear is needed.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let frame = Frame::new(&state.theme, viewmodel.tokens, cols);

    components::render_screen(&viewmodel, &frame, rows);
}
