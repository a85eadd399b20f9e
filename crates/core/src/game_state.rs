//! Game state module - the turn-taking state machine
//!
//! Owns the single mutable aggregate of the game and advances it once per
//! logical tick. Within one tick the ordering is fixed: timer decrement,
//! state dispatch, player input, machine playback. Everything else in the
//! core (generator, matcher) is a pure function this module calls.

use arrayvec::ArrayVec;

use crate::matcher::{evaluate, Verdict};
use crate::rng::{next_symbol, SimpleRng};
use crate::types::{
    AudioCue, MoveState, Symbol, TickInput, BEGIN_TICKS, LEVEL_UP_TICKS, MISS_TICKS,
    SHOW_PRESSED_TICKS, SPACE_TICKS, START_LIVES,
};

/// Signals produced by one [`GameState::advance`] call.
///
/// Consumed-event style: the caller reads them once and the machine keeps no
/// record. `recorded` and `trace_cleared` feed an optional debug overlay;
/// the core itself stores no input history.
#[derive(Debug, Clone, Default)]
pub struct TickEvents {
    /// Audio triggers fired this tick.
    pub cues: ArrayVec<AudioCue, 2>,
    /// Player entry accepted this tick (observer hook).
    pub recorded: Option<Symbol>,
    /// The entered-history display should be discarded (observer hook).
    pub trace_cleared: bool,
    /// Session shutdown requested from the fail screen.
    pub quit: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Symbols to be replayed, in order. Never empty.
    sequence: Vec<Symbol>,
    lives: u8,
    /// False while the machine replays the sequence, true while awaiting input.
    players_turn: bool,
    /// True while the "Level Up!" banner should show.
    level_up: bool,
    move_state: MoveState,
    /// Countdown driving state-exit conditions; a timer transition may only
    /// fire at zero.
    timer: u32,
    /// Cursor into `sequence`: next slot to show during playback, next slot
    /// expected during input.
    index: usize,
    /// Last symbol shown or entered (the highlight during `ShowPressed`).
    shown: Option<Symbol>,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let first = rng.next_symbol();
        Self {
            sequence: vec![first],
            lives: START_LIVES,
            players_turn: false,
            level_up: false,
            move_state: MoveState::Begin,
            timer: BEGIN_TICKS,
            index: 0,
            shown: None,
            rng,
        }
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn players_turn(&self) -> bool {
        self.players_turn
    }

    pub fn level_up(&self) -> bool {
        self.level_up
    }

    pub fn move_state(&self) -> MoveState {
        self.move_state
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn sequence(&self) -> &[Symbol] {
        &self.sequence
    }

    /// The highlighted symbol, valid only during `ShowPressed`.
    pub fn highlighted(&self) -> Option<Symbol> {
        if self.move_state == MoveState::ShowPressed {
            self.shown
        } else {
            None
        }
    }

    /// Advance the machine by one logical tick.
    ///
    /// `input` is this tick's sampled external input. Returns the discrete
    /// signals fired during the tick.
    pub fn advance(&mut self, input: &TickInput) -> TickEvents {
        let mut events = TickEvents::default();

        debug_assert!(
            self.index <= self.sequence.len() && !self.sequence.is_empty(),
            "cursor {} out of range for sequence length {}",
            self.index,
            self.sequence.len()
        );

        if self.timer > 0 {
            self.timer -= 1;
        }

        match self.move_state {
            MoveState::Begin => {
                if self.timer == BEGIN_TICKS - 1 {
                    events.cues.push(AudioCue::Begin);
                }
                if self.timer == 0 {
                    self.move_state = MoveState::Waiting;
                }
            }
            MoveState::ShowPressed => {
                if self.timer == 0 {
                    self.timer = SPACE_TICKS;
                    if self.index == self.sequence.len() {
                        // Full sequence shown or entered: the turn flips.
                        self.players_turn = !self.players_turn;
                        events.trace_cleared = true;
                        if !self.players_turn {
                            // Back to the machine: grow the sequence and hold
                            // the longer level-up pause before replaying.
                            let next = next_symbol(&mut self.rng, &self.sequence);
                            self.sequence.push(next);
                            self.timer = LEVEL_UP_TICKS;
                        }
                        self.index = 0;
                    }
                    self.move_state = MoveState::Space;
                }
            }
            MoveState::Space => {
                self.level_up = false;
                self.resume_when_timer_expires();
            }
            MoveState::Miss => {
                self.resume_when_timer_expires();
            }
            // Input-driven or reserved states: no timer transition.
            MoveState::Fail | MoveState::Waiting | MoveState::ChangeSide => {}
        }

        if self.players_turn {
            match self.move_state {
                MoveState::Fail => {
                    if input.restart {
                        self.restart();
                        events.trace_cleared = true;
                        return events;
                    }
                    if input.quit {
                        events.quit = true;
                        return events;
                    }
                }
                MoveState::Waiting => {
                    if let Some(pressed) = input.pressed() {
                        events.recorded = Some(pressed);
                        match evaluate(&self.sequence, self.index, pressed) {
                            Verdict::Mismatch => self.apply_mismatch(&mut events),
                            Verdict::Match => self.apply_match(pressed, &mut events),
                        }
                    }
                }
                _ => {}
            }
        } else if self.move_state == MoveState::Waiting {
            self.play_next_symbol(&mut events);
        }

        events
    }

    /// Shared `Space`/`Miss` exit: return to `Waiting` once the pause is over.
    fn resume_when_timer_expires(&mut self) {
        if self.timer == 0 {
            self.move_state = MoveState::Waiting;
        }
    }

    /// Machine playback: show the next sequence symbol.
    fn play_next_symbol(&mut self, events: &mut TickEvents) {
        debug_assert!(
            self.index < self.sequence.len(),
            "playback cursor {} past sequence length {}",
            self.index,
            self.sequence.len()
        );
        let symbol = self.sequence[self.index];
        self.shown = Some(symbol);
        events.cues.push(AudioCue::Correct(symbol));
        self.move_state = MoveState::ShowPressed;
        self.timer = SHOW_PRESSED_TICKS;
        self.index += 1;
    }

    /// Wrong symbol: shed the newest sequence entry, cost a life, and either
    /// fail out or replay after the miss banner.
    fn apply_mismatch(&mut self, events: &mut TickEvents) {
        if self.sequence.len() > 1 {
            self.sequence.pop();
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            events.cues.push(AudioCue::Fail);
            self.move_state = MoveState::Fail;
        } else {
            events.cues.push(AudioCue::Miss);
            self.move_state = MoveState::Miss;
            self.timer = MISS_TICKS;
            self.players_turn = false;
        }
        self.index = 0;
        events.trace_cleared = true;
    }

    /// Correct symbol: advance the cursor, flash it back, and flag the level
    /// up when the whole sequence has been reproduced.
    fn apply_match(&mut self, pressed: Symbol, events: &mut TickEvents) {
        self.index += 1;
        self.shown = Some(pressed);
        self.move_state = MoveState::ShowPressed;
        self.timer = SHOW_PRESSED_TICKS;
        if self.index == self.sequence.len() {
            events.cues.push(AudioCue::Succeed);
            self.level_up = true;
        } else {
            events.cues.push(AudioCue::Correct(pressed));
        }
    }

    /// Reset to the initial shape with a fresh one-symbol sequence.
    ///
    /// Only reachable from `Fail`. Resumes in `Waiting` on the machine's turn
    /// so playback restarts on the next tick.
    fn restart(&mut self) {
        self.sequence.clear();
        self.sequence.push(self.rng.next_symbol());
        self.lives = START_LIVES;
        self.players_turn = false;
        self.level_up = false;
        self.move_state = MoveState::Waiting;
        self.timer = 0;
        self.index = 0;
        self.shown = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
