use serde::Serialize;
use strum_macros::Display;
use tracing::{debug, info};

use super::models::{GamePhase, Participant, SessionSummary, SessionTally, Shot};
use crate::clock::{ClockSignal, RoundDuration, SessionClock};
use crate::scoring::resolve_shot;

/// Why a requested transition was swallowed.
///
/// These are expected steady-state conditions (a disabled button, a stray click), not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Ignored {
    WrongPhase,
    IncompleteParticipant,
    InvalidDuration,
    InvalidCoordinates,
}

/// Result of feeding one clock pulse into the session
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Not in an active round; the pulse changed nothing
    Idle,
    Counting { remaining: u32 },
    /// The round ended on this pulse. Returned exactly once per round.
    Finished(SessionSummary),
}

/// The game state machine.
///
/// Registration -> Setup -> Active -> Result, with `reset_to_registration` reachable from
/// anywhere. The session owns the tally and the countdown; it never touches the network or
/// the display list. All mutation goes through `&mut self`, so whoever owns it decides the
/// single order in which fire events and clock pulses apply.
#[derive(Debug, Clone)]
pub struct GameSession {
    phase: GamePhase,
    draft: Participant,
    participant: Option<Participant>,
    duration: RoundDuration,
    clock: SessionClock,
    tally: SessionTally,
    round: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Registration,
            draft: Participant::default(),
            participant: None,
            duration: RoundDuration::default(),
            clock: SessionClock::default(),
            tally: SessionTally::default(),
            round: 0,
        }
    }

    /// Stores the submitted fields as the draft and moves to Setup if they are all filled in.
    ///
    /// An incomplete draft is kept so the form can show what was typed.
    pub fn register_participant(&mut self, fields: Participant) -> Result<(), Ignored> {
        self.require_phase(GamePhase::Registration)?;

        self.draft = fields;
        if !self.draft.is_complete() {
            debug!("Registration incomplete, staying in registration");
            return Err(Ignored::IncompleteParticipant);
        }

        info!(
            first_name = %self.draft.first_name,
            last_name = %self.draft.last_name,
            group = %self.draft.group,
            "Participant registered"
        );
        self.participant = Some(self.draft.clone());
        self.phase = GamePhase::Setup;
        Ok(())
    }

    pub fn select_duration(&mut self, seconds: u32) -> Result<(), Ignored> {
        self.require_phase(GamePhase::Setup)?;

        let duration = RoundDuration::try_from(seconds).map_err(|e| {
            debug!(error = %e, "Duration rejected");
            Ignored::InvalidDuration
        })?;
        self.duration = duration;
        Ok(())
    }

    /// Setup -> Active
    pub fn start_game(&mut self) -> Result<(), Ignored> {
        match self.phase {
            GamePhase::Setup => {}
            // Still registering means the participant was never completed
            GamePhase::Registration => return Err(Ignored::IncompleteParticipant),
            GamePhase::Active | GamePhase::Result => return Err(self.wrong_phase()),
        }

        self.begin_round();
        Ok(())
    }

    /// Result -> Active with the same participant and duration
    pub fn play_again(&mut self) -> Result<(), Ignored> {
        self.require_phase(GamePhase::Result)?;
        self.begin_round();
        Ok(())
    }

    /// Any state -> Registration, discarding the participant and all tallies
    pub fn reset_to_registration(&mut self) {
        self.clock.cancel();
        self.phase = GamePhase::Registration;
        self.draft = Participant::default();
        self.participant = None;
        self.tally = SessionTally::default();
        self.round += 1;
        info!(round = self.round, "Session reset to registration");
    }

    /// Scores a click at `(x, y)` percent of the target box. Only counts while Active.
    pub fn fire_at(&mut self, x: f64, y: f64, timestamp: i64) -> Result<Shot, Ignored> {
        self.require_phase(GamePhase::Active)?;
        if !x.is_finite() || !y.is_finite() {
            return Err(Ignored::InvalidCoordinates);
        }

        let resolution = resolve_shot(x, y);
        let shot = Shot::new(x, y, resolution, timestamp);
        self.tally.record(&shot);

        debug!(
            round = self.round,
            points = shot.points,
            is_miss = shot.is_miss,
            distance = resolution.distance,
            "Shot resolved"
        );
        Ok(shot)
    }

    /// Advances the countdown by one second
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != GamePhase::Active {
            return TickOutcome::Idle;
        }

        match self.clock.tick() {
            ClockSignal::Ignored => TickOutcome::Idle,
            ClockSignal::Tick { remaining } => TickOutcome::Counting { remaining },
            ClockSignal::Expired => {
                self.phase = GamePhase::Result;
                let summary = self.summary();
                info!(
                    round = summary.round,
                    score = summary.tally.score(),
                    total_shots = summary.tally.total_shots(),
                    misses = summary.tally.misses(),
                    accuracy = summary.accuracy(),
                    "Round finished"
                );
                TickOutcome::Finished(summary)
            }
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    pub fn draft(&self) -> &Participant {
        &self.draft
    }

    pub fn participant(&self) -> Option<&Participant> {
        self.participant.as_ref()
    }

    pub fn duration(&self) -> RoundDuration {
        self.duration
    }

    pub fn clock(&self) -> &SessionClock {
        &self.clock
    }

    pub fn tally(&self) -> &SessionTally {
        &self.tally
    }

    /// Changes every time a new round starts or the session is reset
    pub fn round(&self) -> u64 {
        self.round
    }

    fn begin_round(&mut self) {
        self.tally = SessionTally::default();
        self.round += 1;
        self.clock.start(self.duration);
        self.phase = GamePhase::Active;
        info!(
            round = self.round,
            duration_secs = self.duration.seconds(),
            "Round started"
        );
    }

    fn summary(&self) -> SessionSummary {
        SessionSummary {
            round: self.round,
            participant: self.participant.clone().unwrap_or_default(),
            tally: self.tally,
            duration: self.duration,
        }
    }

    fn require_phase(&self, expected: GamePhase) -> Result<(), Ignored> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(self.wrong_phase())
        }
    }

    fn wrong_phase(&self) -> Ignored {
        debug!(phase = %self.phase, "Input ignored in current phase");
        Ignored::WrongPhase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn alice() -> Participant {
        Participant::new("Alice", "Smith", "2-B")
    }

    fn session_in_setup() -> GameSession {
        let mut session = GameSession::new();
        session.register_participant(alice()).unwrap();
        session
    }

    fn active_session(seconds: u32) -> GameSession {
        let mut session = session_in_setup();
        session.select_duration(seconds).unwrap();
        session.start_game().unwrap();
        session
    }

    fn run_out_clock(session: &mut GameSession) -> SessionSummary {
        loop {
            match session.tick() {
                TickOutcome::Finished(summary) => return summary,
                TickOutcome::Counting { .. } => continue,
                TickOutcome::Idle => panic!("clock stopped before expiry"),
            }
        }
    }

    #[test]
    fn test_new_session_starts_in_registration() {
        let session = GameSession::new();
        assert_eq!(session.phase(), GamePhase::Registration);
        assert_eq!(session.duration().seconds(), 6);
        assert!(session.participant().is_none());
    }

    #[rstest]
    #[case(Participant::new("", "", ""))]
    #[case(Participant::new("Alice", "", "2-B"))]
    #[case(Participant::new("Alice", "Smith", ""))]
    fn test_incomplete_registration_is_rejected(#[case] fields: Participant) {
        let mut session = GameSession::new();

        assert_eq!(
            session.register_participant(fields.clone()),
            Err(Ignored::IncompleteParticipant)
        );
        assert_eq!(session.phase(), GamePhase::Registration);
        assert_eq!(session.draft(), &fields);

        assert_eq!(session.start_game(), Err(Ignored::IncompleteParticipant));
        assert_eq!(session.phase(), GamePhase::Registration);
    }

    #[test]
    fn test_complete_registration_moves_to_setup() {
        let session = session_in_setup();
        assert_eq!(session.phase(), GamePhase::Setup);
        assert_eq!(session.participant(), Some(&alice()));
    }

    fn session_in_phase(phase: GamePhase) -> GameSession {
        match phase {
            GamePhase::Registration => GameSession::new(),
            GamePhase::Setup => session_in_setup(),
            GamePhase::Active => active_session(4),
            GamePhase::Result => {
                let mut session = active_session(4);
                run_out_clock(&mut session);
                session
            }
        }
    }

    #[rstest]
    #[case(GamePhase::Setup)]
    #[case(GamePhase::Active)]
    #[case(GamePhase::Result)]
    fn test_participant_is_fixed_after_registration(#[case] phase: GamePhase) {
        let mut session = session_in_phase(phase);
        let bob = Participant::new("Bob", "Jones", "3-C");

        assert_eq!(session.register_participant(bob), Err(Ignored::WrongPhase));
        assert_eq!(session.phase(), phase);
        assert_eq!(session.participant(), Some(&alice()));
        assert_eq!(session.draft(), &alice());
    }

    #[rstest]
    #[case(4)]
    #[case(6)]
    #[case(10)]
    #[case(12)]
    fn test_select_allowed_duration(#[case] seconds: u32) {
        let mut session = session_in_setup();
        assert_eq!(session.select_duration(seconds), Ok(()));
        assert_eq!(session.duration().seconds(), seconds);
    }

    #[rstest]
    #[case(0)]
    #[case(5)]
    #[case(30)]
    fn test_select_invalid_duration_keeps_previous(#[case] seconds: u32) {
        let mut session = session_in_setup();
        session.select_duration(10).unwrap();
        assert_eq!(session.select_duration(seconds), Err(Ignored::InvalidDuration));
        assert_eq!(session.duration().seconds(), 10);
    }

    #[test]
    fn test_select_duration_outside_setup_is_ignored() {
        let mut session = GameSession::new();
        assert_eq!(session.select_duration(4), Err(Ignored::WrongPhase));

        let mut session = active_session(6);
        assert_eq!(session.select_duration(4), Err(Ignored::WrongPhase));
        assert_eq!(session.duration().seconds(), 6);
    }

    #[test]
    fn test_start_game_enters_active_with_fresh_clock() {
        let session = active_session(10);
        assert_eq!(session.phase(), GamePhase::Active);
        assert_eq!(session.clock().remaining(), 10);
        assert!(session.clock().is_running());
        assert_eq!(session.tally(), &SessionTally::default());
    }

    #[test]
    fn test_scenario_three_shots() {
        let mut session = active_session(6);

        // Distances 5, 20 and 45 along the x axis
        let shots: Vec<Shot> = [55.0, 70.0, 95.0]
            .iter()
            .map(|x| session.fire_at(*x, 50.0, 0).unwrap())
            .collect();
        assert_eq!(
            shots.iter().map(|s| s.points).collect::<Vec<_>>(),
            vec![100, 60, 0]
        );

        let summary = run_out_clock(&mut session);
        assert_eq!(summary.tally.score(), 160);
        assert_eq!(summary.tally.total_shots(), 3);
        assert_eq!(summary.tally.misses(), 1);
        assert_eq!(summary.hits(), 2);
        assert_eq!(summary.accuracy(), 67);
        assert_eq!(summary.duration.seconds(), 6);
        assert_eq!(summary.participant, alice());
        assert_eq!(session.phase(), GamePhase::Result);
    }

    #[test]
    fn test_fire_outside_active_never_changes_tally() {
        let mut session = GameSession::new();
        let before = *session.tally();
        assert_eq!(session.fire_at(50.0, 50.0, 0), Err(Ignored::WrongPhase));
        assert_eq!(session.tally(), &before);

        let mut session = session_in_setup();
        assert_eq!(session.fire_at(50.0, 50.0, 0), Err(Ignored::WrongPhase));
        assert_eq!(session.tally(), &before);

        let mut session = active_session(4);
        session.fire_at(50.0, 50.0, 0).unwrap();
        run_out_clock(&mut session);
        let frozen = *session.tally();
        assert_eq!(session.fire_at(50.0, 50.0, 0), Err(Ignored::WrongPhase));
        assert_eq!(session.tally(), &frozen);
    }

    #[test]
    fn test_non_finite_coordinates_are_ignored() {
        let mut session = active_session(6);
        assert_eq!(
            session.fire_at(f64::NAN, 50.0, 0),
            Err(Ignored::InvalidCoordinates)
        );
        assert_eq!(
            session.fire_at(50.0, f64::NEG_INFINITY, 0),
            Err(Ignored::InvalidCoordinates)
        );
        assert_eq!(session.tally().total_shots(), 0);
    }

    #[test]
    fn test_expiry_happens_exactly_once() {
        let mut session = active_session(4);
        let mut finished = 0;
        for _ in 0..10 {
            if let TickOutcome::Finished(_) = session.tick() {
                finished += 1;
            }
        }
        assert_eq!(finished, 1);
        assert_eq!(session.clock().remaining(), 0);
        assert_eq!(session.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_tick_outside_active_is_idle() {
        let mut session = GameSession::new();
        assert_eq!(session.tick(), TickOutcome::Idle);

        let mut session = session_in_setup();
        assert_eq!(session.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_counting_reports_remaining() {
        let mut session = active_session(4);
        assert_eq!(session.tick(), TickOutcome::Counting { remaining: 3 });
        assert_eq!(session.tick(), TickOutcome::Counting { remaining: 2 });
    }

    #[test]
    fn test_accuracy_is_stable_on_frozen_result() {
        let mut session = active_session(4);
        session.fire_at(50.0, 50.0, 0).unwrap();
        session.fire_at(0.0, 0.0, 0).unwrap();
        run_out_clock(&mut session);

        let first = session.tally().accuracy();
        let second = session.tally().accuracy();
        assert_eq!(first, 50);
        assert_eq!(first, second);
    }

    #[test]
    fn test_finish_with_no_shots_has_zero_accuracy() {
        let mut session = active_session(4);
        let summary = run_out_clock(&mut session);
        assert_eq!(summary.tally.total_shots(), 0);
        assert_eq!(summary.accuracy(), 0);
    }

    #[test]
    fn test_play_again_keeps_participant_and_duration() {
        let mut session = active_session(10);
        session.fire_at(50.0, 50.0, 0).unwrap();
        let first = run_out_clock(&mut session);

        assert_eq!(session.play_again(), Ok(()));
        assert_eq!(session.phase(), GamePhase::Active);
        assert_eq!(session.participant(), Some(&alice()));
        assert_eq!(session.duration().seconds(), 10);
        assert_eq!(session.clock().remaining(), 10);
        assert_eq!(session.tally(), &SessionTally::default());
        assert!(session.round() > first.round);
    }

    #[test]
    fn test_play_again_only_from_result() {
        let mut session = session_in_setup();
        assert_eq!(session.play_again(), Err(Ignored::WrongPhase));

        let mut session = active_session(6);
        assert_eq!(session.play_again(), Err(Ignored::WrongPhase));
        assert_eq!(session.start_game(), Err(Ignored::WrongPhase));
    }

    #[test]
    fn test_change_participant_from_result_discards_everything() {
        let mut session = active_session(4);
        session.fire_at(50.0, 50.0, 0).unwrap();
        run_out_clock(&mut session);

        session.reset_to_registration();
        assert_eq!(session.phase(), GamePhase::Registration);
        assert!(session.participant().is_none());
        assert_eq!(session.draft(), &Participant::default());
        assert_eq!(session.tally(), &SessionTally::default());
    }

    #[test]
    fn test_reset_during_active_cancels_clock() {
        let mut session = active_session(4);
        session.tick();
        let round = session.round();

        session.reset_to_registration();
        assert!(!session.clock().is_running());
        assert!(session.round() > round);
        for _ in 0..5 {
            assert_eq!(session.tick(), TickOutcome::Idle);
        }
    }
}
