//! The night/day state machine and game loop.
//!
//! A game owns its roster and the cached faction counts, and drives
//! both through alternating night and day phases until one faction is
//! eliminated. All player interaction flows through the injected ports;
//! the engine itself never reads a terminal.

use tracing::{debug, info};

use crate::core::rng::GameRng;
use crate::core::role::{Faction, Role};
use crate::core::roster::Roster;
use crate::core::state::{GameState, Phase};
use crate::engine::assign::assign_roles;
use crate::engine::choice::choose_player;
use crate::engine::vote::run_vote;
use crate::engine::win;
use crate::error::{ConfigError, GameError};
use crate::ports::{InputPort, OutputPort};

/// Builder for a game: the cast plus an optional shuffle seed.
pub struct GameBuilder {
    names: Vec<String>,
    seed: Option<u64>,
}

impl GameBuilder {
    /// Start from an ordered list of distinct player names.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            seed: None,
        }
    }

    /// Pin the role-shuffle seed. Defaults to an entropy seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Assign roles and build the game.
    pub fn build(self) -> Result<Game, ConfigError> {
        let mut rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Game::new(self.names, &mut rng)
    }
}

/// A single-session game, from role assignment to winner announcement.
#[derive(Debug)]
pub struct Game {
    roster: Roster,
    state: GameState,
}

impl Game {
    /// Assign roles with `rng` and derive the starting state.
    pub fn new(names: Vec<String>, rng: &mut GameRng) -> Result<Self, ConfigError> {
        let roster = assign_roles(names, rng)?;
        let state = GameState::from_roster(&roster);
        info!(
            players = roster.len(),
            mafia = state.living_mafia(),
            seed = rng.seed(),
            "game assembled"
        );
        Ok(Self { roster, state })
    }

    /// Build a game over an already-assigned roster.
    ///
    /// The counts are derived from the roster as given, so a scripted
    /// scenario can start from any fixed cast.
    #[must_use]
    pub fn from_roster(roster: Roster) -> Self {
        let state = GameState::from_roster(&roster);
        Self { roster, state }
    }

    /// The roster, in turn order.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Current phase and faction counts.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run the game to completion and return the winning faction.
    ///
    /// Announces the mafia count and the roster, then alternates night
    /// and day phases, checking the win condition before each.
    pub fn play(
        &mut self,
        input: &mut dyn InputPort,
        output: &mut dyn OutputPort,
    ) -> Result<Faction, GameError> {
        output.announce(&format!("Number of mafia: {}", self.state.living_mafia()));
        output.announce("Player list:");
        for player in self.roster.iter() {
            output.announce(&format!("{}: {}", player.id().index(), player.name()));
        }

        loop {
            if win::is_terminal(&self.state).is_some() {
                break;
            }
            self.night(input, output)?;

            if win::is_terminal(&self.state).is_some() {
                break;
            }
            self.day(input, output)?;
        }

        self.state.phase = Phase::Terminal;
        let winner = if self.state.living_mafia() > 0 {
            Faction::Mafia
        } else {
            Faction::Town
        };
        info!(?winner, "game over");
        output.announce(&format!("{} won!", winner));
        Ok(winner)
    }

    /// Run one night: mafia kill vs. doctor save, plus the detective's
    /// reveal.
    ///
    /// `play` drives this; it is public so a caller can step phases
    /// individually.
    pub fn night(
        &mut self,
        input: &mut dyn InputPort,
        output: &mut dyn OutputPort,
    ) -> Result<(), GameError> {
        self.state.phase = Phase::Night;
        output.announce("\nNight phase:");

        // The kill step is void without a living mafia member, but all
        // three choices are still requested.
        let mafia_present = self.roster.first_living(Role::Mafia).is_some();

        let kill_target = choose_player(
            &self.roster,
            input,
            output,
            "The mafia choose whom to kill: ",
            None,
        )?;
        let save_target = choose_player(
            &self.roster,
            input,
            output,
            "The doctor chooses whom to heal: ",
            None,
        )?;
        self.investigate(input, output)?;

        if mafia_present && kill_target != save_target {
            self.roster.kill(kill_target);
            // The victim always comes off the town tally, whatever their
            // actual role.
            self.state.record_town_death();
            let victim = self.roster.player(kill_target);
            debug!(victim = victim.name(), role = %victim.role(), "night kill");
            output.announce(&format!("{} was killed by the mafia.", victim.name()));
        } else {
            output.announce("The doctor saved the player.");
        }
        Ok(())
    }

    /// The detective's check: a pure reveal, no state change.
    fn investigate(
        &mut self,
        input: &mut dyn InputPort,
        output: &mut dyn OutputPort,
    ) -> Result<(), GameError> {
        let checked = choose_player(
            &self.roster,
            input,
            output,
            "The detective chooses whom to investigate: ",
            None,
        )?;
        let player = self.roster.player(checked);
        let verdict = if player.role().is_mafia() {
            "mafia"
        } else {
            "not mafia"
        };
        output.announce(&format!("{} - {}.", player.name(), verdict));
        Ok(())
    }

    /// Run one day: every living player votes and the plurality target
    /// hangs.
    pub fn day(
        &mut self,
        input: &mut dyn InputPort,
        output: &mut dyn OutputPort,
    ) -> Result<(), GameError> {
        self.state.phase = Phase::Day;
        output.announce("\nDay phase:");

        let lynched = run_vote(&self.roster, input, output)?;
        self.roster.kill(lynched);

        let player = self.roster.player(lynched);
        debug!(lynched = player.name(), role = %player.role(), "day lynch");
        if player.role().is_mafia() {
            self.state.record_mafia_death();
            output.announce(&format!("{} was lynched. They were mafia!", player.name()));
            if self.state.living_mafia() > 0 {
                output.announce(&format!(
                    "Mafia remaining: {}. The next night begins.",
                    self.state.living_mafia()
                ));
            }
        } else {
            self.state.record_town_death();
            output.announce(&format!(
                "{} was lynched. They were a civilian.",
                player.name()
            ));
        }
        Ok(())
    }
}
