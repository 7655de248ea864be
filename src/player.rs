use crate::pile::Pile;
use crate::state::BoardSnapshot;

/// Interface for anything that answers manual-mode prompts. `None` means the
/// player has stopped playing.
pub trait Player {
    /// Pile to place the card in hand on.
    fn choose_placement(&mut self, state: &BoardSnapshot) -> Option<Pile>;

    /// Pile to reveal the next card from.
    fn choose_reveal(&mut self, state: &BoardSnapshot) -> Option<Pile>;
}
