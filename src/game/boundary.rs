//! Presentation boundary.
//!
//! The engine never draws anything itself. It tells a [`Presenter`] what
//! happened and carries on; every call is fire-and-forget. A front end
//! implements the calls it cares about and leaves the rest as no-ops.

use crate::game::door::PrizeKind;
use crate::game::simulation::Strategy;
use std::fmt;

/// Status line shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    PickDoor,
    KeepOrSwitch,
    Win,
    Lose,
}

impl Message {
    pub fn text(self) -> &'static str {
        match self {
            Self::PickDoor => "Pick one of the three doors",
            Self::KeepOrSwitch => "Do you want to keep your choice or change it?",
            Self::Win => "You WIN! Tap any door to play again",
            Self::Lose => "Nice Try! Tap any door to play again",
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Outbound notifications from the engine.
///
/// Door renders are only sent in play mode. Messages and progress reports are
/// sent in both modes.
pub trait Presenter {
    /// The player's pick is locked in.
    fn render_door_locked(&mut self, _index: usize) {}

    /// Show what is behind one door.
    fn render_door_prize(&mut self, _index: usize, _prize: PrizeKind) {}

    /// Show what is behind every door, in index order.
    fn render_all_doors(&mut self, _prizes: &[PrizeKind]) {}

    fn clear_door_display(&mut self, _index: usize) {}

    fn display_message(&mut self, _message: Message) {}

    /// Called once at the end of every batch run.
    fn report_progress(&mut self, _strategy: Strategy, _win_percent: u32, _lose_percent: u32) {}

    /// Forget previously reported batch results.
    fn reset_progress(&mut self) {}
}

/// Presenter that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn render_door_locked(&mut self, index: usize) {
        (**self).render_door_locked(index);
    }

    fn render_door_prize(&mut self, index: usize, prize: PrizeKind) {
        (**self).render_door_prize(index, prize);
    }

    fn render_all_doors(&mut self, prizes: &[PrizeKind]) {
        (**self).render_all_doors(prizes);
    }

    fn clear_door_display(&mut self, index: usize) {
        (**self).clear_door_display(index);
    }

    fn display_message(&mut self, message: Message) {
        (**self).display_message(message);
    }

    fn report_progress(&mut self, strategy: Strategy, win_percent: u32, lose_percent: u32) {
        (**self).report_progress(strategy, win_percent, lose_percent);
    }

    fn reset_progress(&mut self) {
        (**self).reset_progress();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_texts_are_fixed() {
        assert_eq!(Message::PickDoor.to_string(), "Pick one of the three doors");
        assert_eq!(
            Message::KeepOrSwitch.to_string(),
            "Do you want to keep your choice or change it?"
        );
        assert_eq!(Message::Win.to_string(), "You WIN! Tap any door to play again");
        assert_eq!(
            Message::Lose.to_string(),
            "Nice Try! Tap any door to play again"
        );
    }

    #[derive(Default)]
    struct Counting {
        calls: usize,
    }

    impl Presenter for Counting {
        fn display_message(&mut self, _message: Message) {
            self.calls += 1;
        }
    }

    fn notify<P: Presenter>(mut presenter: P) {
        presenter.display_message(Message::Win);
        presenter.render_door_locked(0);
    }

    #[test]
    fn mutable_reference_forwards_calls() {
        let mut counting = Counting::default();

        notify(&mut counting);
        notify(&mut counting);

        assert_eq!(counting.calls, 2);
    }
}
