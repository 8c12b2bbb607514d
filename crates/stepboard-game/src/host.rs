//! Commands sent from the session to the host grid.

use stepboard_core::Bitboard;

/// The host grid that renders the board.
///
/// The session never draws anything itself; it tells the host when to
/// change highlights and when to wipe its squares.
pub trait BoardHost {
    /// Remove every highlight.
    fn clear_highlights(&mut self);

    /// Highlight the given destination squares.
    fn highlight(&mut self, squares: Bitboard);

    /// Destroy every piece the host is displaying.
    fn reset_squares(&mut self);
}

/// A host that ignores every command.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl BoardHost for NullHost {
    fn clear_highlights(&mut self) {}

    fn highlight(&mut self, _squares: Bitboard) {}

    fn reset_squares(&mut self) {}
}

impl<H: BoardHost + ?Sized> BoardHost for &mut H {
    fn clear_highlights(&mut self) {
        (**self).clear_highlights();
    }

    fn highlight(&mut self, squares: Bitboard) {
        (**self).highlight(squares);
    }

    fn reset_squares(&mut self) {
        (**self).reset_squares();
    }
}
