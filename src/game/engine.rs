//! The game engine: doors, turn order, host reveal, outcomes and batch runs.

use crate::config::GameConfig;
use crate::core::{State, StateHistory};
use crate::error::GameError;
use crate::fsm::{Dispatch, StateMachine};
use crate::game::boundary::{Message, NullPresenter, Presenter};
use crate::game::door::{Door, PrizeKind};
use crate::game::rng::TrialRng;
use crate::game::simulation::{Outcome, SimulationReport, SimulationResult, Strategy};
use crate::game::state::{GameState, Mode, PRESS};

/// What a call to [`GameEngine::select_door`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// First pick locked in; the host opened `revealed`.
    Locked { door: usize, revealed: Option<usize> },
    /// Final pick made; the trial is over.
    Finished { door: usize, outcome: Outcome },
    /// The previous trial was over; a new one has started.
    Restarted,
    /// The door could not be chosen in this phase. Nothing changed.
    Ignored,
}

/// Runs Monty Hall trials one tap at a time, or in batches.
///
/// The engine owns its doors, counters, RNG and presenter. Phase changes go
/// through a [`StateMachine`] over [`GameState`]; the engine decides what a
/// door tap means in each phase.
pub struct GameEngine<P: Presenter = NullPresenter> {
    doors: Vec<Door>,
    machine: StateMachine<GameState>,
    rng: TrialRng,
    results: SimulationResult,
    mode: Mode,
    presenter: P,
}

impl GameEngine<NullPresenter> {
    /// Engine without a front end, for batch runs and tests.
    pub fn headless(config: GameConfig) -> Result<Self, GameError> {
        Self::new(config, NullPresenter)
    }
}

impl<P: Presenter> GameEngine<P> {
    /// Validate `config`, build the game machine and start the first trial.
    pub fn new(config: GameConfig, presenter: P) -> Result<Self, GameError> {
        let config = config.check()?;
        let machine = GameState::machine()?;
        let rng = match config.seed {
            Some(seed) => TrialRng::new(seed),
            None => TrialRng::from_entropy(),
        };
        log::debug!(
            "new game: {} doors, seed {}, {} mode",
            config.door_count,
            rng.seed(),
            config.mode
        );

        let mut engine = Self {
            doors: vec![Door::default(); config.door_count],
            machine,
            rng,
            results: SimulationResult::default(),
            mode: config.mode,
            presenter,
        };
        engine.init_trial();
        Ok(engine)
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    pub fn state(&self) -> GameState {
        *self.machine.current_state()
    }

    /// Phase changes of the current trial.
    pub fn history(&self) -> &StateHistory<GameState> {
        self.machine.history()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn results(&self) -> SimulationResult {
        self.results
    }

    /// Seed the engine's RNG was created with.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Start a new trial with the prize behind a random door.
    ///
    /// Returns the prize door's index.
    pub fn init_trial(&mut self) -> usize {
        let prize = self.rng.pick_door(self.doors.len());
        self.place_prize(prize);
        prize
    }

    /// Start a new trial with the prize behind `prize`.
    pub fn init_trial_with_prize(&mut self, prize: usize) -> Result<(), GameError> {
        self.check_index(prize)?;
        self.place_prize(prize);
        Ok(())
    }

    fn place_prize(&mut self, prize: usize) {
        let render = self.mode.renders_doors();
        for (index, door) in self.doors.iter_mut().enumerate() {
            door.reset();
            if render {
                self.presenter.clear_door_display(index);
            }
        }
        self.presenter.display_message(Message::PickDoor);
        self.machine.reset();
        self.doors[prize].prize = PrizeKind::Prize;
        log::debug!("prize placed behind door {}", prize);
    }

    /// Handle a tap on door `index`.
    ///
    /// - `UserSelection`: lock the door in and let the host open a decoy.
    ///   Tapping an already selected door is ignored.
    /// - `HostReveal`: the tap is the final pick (same door to keep, another
    ///   closed door to switch). Tapping the opened decoy is ignored.
    /// - `RevealWin`: any tap starts the next trial.
    pub fn select_door(&mut self, index: usize) -> Result<Selection, GameError> {
        self.check_index(index)?;

        match self.state() {
            GameState::UserSelection => {
                if self.doors[index].selected {
                    return Ok(Selection::Ignored);
                }
                self.press()?;
                self.doors[index].selected = true;
                if self.mode.renders_doors() {
                    self.presenter.render_door_locked(index);
                }
                let revealed = self.host_reveal();
                Ok(Selection::Locked {
                    door: index,
                    revealed,
                })
            }
            GameState::HostReveal => {
                if self.doors[index].revealed {
                    return Ok(Selection::Ignored);
                }
                self.press()?;
                let outcome = self.compute_outcome(index);
                Ok(Selection::Finished {
                    door: index,
                    outcome,
                })
            }
            GameState::RevealWin => {
                self.press()?;
                self.init_trial();
                Ok(Selection::Restarted)
            }
        }
    }

    /// Change between play and simulate. Always starts a fresh trial.
    pub fn switch_mode(&mut self, mode: Mode) {
        log::debug!("switching to {} mode", mode);
        self.mode = mode;
        self.presenter.reset_progress();
        self.init_trial();
    }

    /// Play `trials` complete trials with `strategy` and report the win rate.
    ///
    /// Counters are reset first. Door renders are suppressed for the duration
    /// of the batch; the previous mode is restored afterwards.
    pub fn run_batch(
        &mut self,
        trials: u64,
        strategy: Strategy,
    ) -> Result<SimulationReport, GameError> {
        if trials == 0 {
            return Err(GameError::EmptyBatch);
        }

        let previous = self.mode;
        self.mode = Mode::Simulate;
        self.results.reset();
        let outcome = self.run_trials(trials, strategy);
        self.mode = previous;
        outcome?;

        let report = SimulationReport::new(strategy, trials, self.results);
        self.presenter
            .report_progress(strategy, report.win_percent, report.lose_percent);
        log::info!("{}", report);
        Ok(report)
    }

    fn run_trials(&mut self, trials: u64, strategy: Strategy) -> Result<(), GameError> {
        for _ in 0..trials {
            self.init_trial();

            let first = self.rng.pick_door(self.doors.len());
            self.select_door(first)?;

            let last = match strategy {
                Strategy::Keep => first,
                Strategy::Switch => self
                    .doors
                    .iter()
                    .position(|door| !door.selected)
                    .ok_or(GameError::NoSwitchTarget)?,
            };
            self.select_door(last)?;
        }
        Ok(())
    }

    /// Open the first door in index order that is neither selected nor the
    /// prize. With three or more doors there is always one.
    fn host_reveal(&mut self) -> Option<usize> {
        let Some(index) = self
            .doors
            .iter()
            .position(|door| !door.selected && !door.is_prize())
        else {
            log::warn!("host found no door to reveal");
            return None;
        };

        let door = &mut self.doors[index];
        door.selected = true;
        door.revealed = true;
        if self.mode.renders_doors() {
            self.presenter.render_door_prize(index, door.prize);
        }
        self.presenter.display_message(Message::KeepOrSwitch);
        log::debug!("host revealed door {}", index);
        Some(index)
    }

    fn compute_outcome(&mut self, index: usize) -> Outcome {
        let outcome = if self.doors[index].is_prize() {
            Outcome::Win
        } else {
            Outcome::Lose
        };
        self.results.record(outcome);

        if self.mode.renders_doors() {
            let prizes: Vec<PrizeKind> = self.doors.iter().map(|door| door.prize).collect();
            self.presenter.render_all_doors(&prizes);
        }
        self.presenter.display_message(match outcome {
            Outcome::Win => Message::Win,
            Outcome::Lose => Message::Lose,
        });
        log::debug!("final pick {}: {:?}", index, outcome);
        outcome
    }

    fn press(&mut self) -> Result<(), GameError> {
        match self.machine.dispatch(PRESS) {
            Dispatch::Transitioned { .. } => Ok(()),
            Dispatch::Ignored { state, .. } => {
                log::error!("wrong game state: '{}' has no '{}' transition", state, PRESS);
                Err(GameError::WrongGameState { state })
            }
        }
    }

    fn check_index(&self, index: usize) -> Result<(), GameError> {
        if index < self.doors.len() {
            Ok(())
        } else {
            Err(GameError::DoorOutOfRange {
                index,
                door_count: self.doors.len(),
            })
        }
    }
}

impl<P: Presenter> std::fmt::Debug for GameEngine<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("doors", &self.doors)
            .field("state", &self.state().name())
            .field("mode", &self.mode)
            .field("results", &self.results)
            .field("seed", &self.rng.seed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> GameEngine {
        GameEngine::headless(GameConfig::new().with_seed(1)).unwrap()
    }

    fn prize_count(engine: &GameEngine) -> usize {
        engine.doors().iter().filter(|door| door.is_prize()).count()
    }

    #[test]
    fn new_engine_is_ready_for_first_pick() {
        let engine = engine();

        assert_eq!(engine.state(), GameState::UserSelection);
        assert_eq!(engine.door_count(), 3);
        assert_eq!(prize_count(&engine), 1);
        assert!(engine.doors().iter().all(|d| !d.selected && !d.revealed));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = GameEngine::headless(GameConfig::new().with_doors(1));
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn init_trial_places_exactly_one_prize() {
        let mut engine = engine();

        for _ in 0..50 {
            let prize = engine.init_trial();
            assert_eq!(prize_count(&engine), 1);
            assert!(engine.doors()[prize].is_prize());
        }
    }

    #[test]
    fn host_reveal_skips_prize_and_player_door() {
        let mut engine = engine();
        engine.init_trial_with_prize(0).unwrap();
        engine.doors[1].selected = true;

        assert_eq!(engine.host_reveal(), Some(2));
        assert!(engine.doors[2].revealed);
        assert!(engine.doors[2].selected);
    }

    #[test]
    fn host_reveal_takes_first_eligible_door() {
        let mut engine = GameEngine::headless(GameConfig::new().with_doors(5).with_seed(3)).unwrap();
        engine.init_trial_with_prize(4).unwrap();
        engine.doors[0].selected = true;

        assert_eq!(engine.host_reveal(), Some(1));
    }

    #[test]
    fn compute_outcome_counts_wins_and_losses() {
        let mut engine = engine();
        engine.init_trial_with_prize(2).unwrap();

        assert_eq!(engine.compute_outcome(2), Outcome::Win);
        assert_eq!(engine.compute_outcome(0), Outcome::Lose);
        assert_eq!(
            engine.results(),
            SimulationResult { wins: 1, losses: 1 }
        );
    }

    #[test]
    fn selected_door_is_ignored_during_user_selection() {
        let mut engine = engine();
        engine.init_trial_with_prize(1).unwrap();
        engine.doors[0].selected = true;

        assert_eq!(engine.select_door(0).unwrap(), Selection::Ignored);
        assert_eq!(engine.state(), GameState::UserSelection);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn same_door_twice_is_lock_then_keep() {
        let mut engine = engine();
        engine.init_trial_with_prize(1).unwrap();

        assert_eq!(
            engine.select_door(0).unwrap(),
            Selection::Locked {
                door: 0,
                revealed: Some(2)
            }
        );
        assert_eq!(
            engine.select_door(0).unwrap(),
            Selection::Finished {
                door: 0,
                outcome: Outcome::Lose
            }
        );
        assert_eq!(engine.state(), GameState::RevealWin);
    }

    #[test]
    fn revealed_door_cannot_be_the_final_pick() {
        let mut engine = engine();
        engine.init_trial_with_prize(1).unwrap();
        engine.select_door(0).unwrap();

        assert_eq!(engine.select_door(2).unwrap(), Selection::Ignored);
        assert_eq!(engine.state(), GameState::HostReveal);
    }

    #[test]
    fn any_tap_after_outcome_restarts() {
        let mut engine = engine();
        engine.init_trial_with_prize(1).unwrap();
        engine.select_door(0).unwrap();
        engine.select_door(0).unwrap();
        assert_eq!(engine.state(), GameState::RevealWin);

        assert_eq!(engine.select_door(2).unwrap(), Selection::Restarted);
        assert_eq!(engine.state(), GameState::UserSelection);
        assert_eq!(prize_count(&engine), 1);
        assert!(engine.doors().iter().all(|d| !d.selected));
    }

    #[test]
    fn out_of_range_door_is_an_error() {
        let mut engine = engine();

        assert_eq!(
            engine.select_door(3),
            Err(GameError::DoorOutOfRange {
                index: 3,
                door_count: 3
            })
        );
        assert!(engine.init_trial_with_prize(7).is_err());
    }

    #[test]
    fn machine_without_press_reports_wrong_state() {
        let mut engine = engine();
        engine.machine = StateMachine::new(GameState::UserSelection);

        assert_eq!(
            engine.select_door(0),
            Err(GameError::WrongGameState {
                state: "UserSelection".to_string()
            })
        );
    }

    #[test]
    fn refused_press_leaves_the_doors_untouched() {
        let mut engine = engine();
        engine.machine = StateMachine::new(GameState::UserSelection);

        assert!(engine.select_door(0).is_err());
        assert!(engine.doors().iter().all(|door| !door.selected && !door.revealed));
        assert_eq!(engine.state(), GameState::UserSelection);
    }

    #[test]
    fn empty_batch_is_rejected() {
        let mut engine = engine();
        assert_eq!(engine.run_batch(0, Strategy::Keep), Err(GameError::EmptyBatch));
    }

    #[test]
    fn batch_restores_previous_mode() {
        let mut engine = engine();
        engine.run_batch(10, Strategy::Switch).unwrap();

        assert_eq!(engine.mode(), Mode::Play);
    }

    #[test]
    fn switch_mode_starts_a_fresh_trial() {
        let mut engine = engine();
        engine.select_door(0).unwrap();

        engine.switch_mode(Mode::Simulate);

        assert_eq!(engine.mode(), Mode::Simulate);
        assert_eq!(engine.state(), GameState::UserSelection);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn same_seed_same_batch() {
        let mut a = engine();
        let mut b = engine();

        assert_eq!(
            a.run_batch(200, Strategy::Keep).unwrap(),
            b.run_batch(200, Strategy::Keep).unwrap()
        );
    }
}
