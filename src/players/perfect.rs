use crate::pile::Pile;
use crate::player::Player;
use crate::state::BoardSnapshot;

/// Always picks the pile the rules require.
#[derive(Clone, Copy, Debug, Default)]
pub struct PerfectPlayer;

impl Player for PerfectPlayer {
    fn choose_placement(&mut self, state: &BoardSnapshot) -> Option<Pile> {
        state.current_card.map(Pile::destination)
    }

    fn choose_reveal(&mut self, state: &BoardSnapshot) -> Option<Pile> {
        state.pending_reveal
    }
}
