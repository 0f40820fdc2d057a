//! Game mode and difficulty selection.

/// Game mode - who is the opponent?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Human vs the minimax AI.
    #[default]
    VsAi,
    /// Two humans alternate turns on the same terminal.
    PassAndPlay,
}

impl GameMode {
    /// Returns the display name.
    pub fn label(self) -> &'static str {
        match self {
            GameMode::VsAi => "Single player",
            GameMode::PassAndPlay => "Pass & play",
        }
    }

    /// Toggles between the two modes.
    pub fn toggle(self) -> Self {
        match self {
            GameMode::VsAi => GameMode::PassAndPlay,
            GameMode::PassAndPlay => GameMode::VsAi,
        }
    }
}

/// AI difficulty presets, expressed as noise probability.
///
/// Noise is the chance per move that the AI ignores the search
/// and plays uniformly among the legal squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Never deviates from optimal play.
    Perfect,
    /// Deviates 20% of the time.
    #[default]
    Classic,
    /// Deviates half the time.
    Casual,
}

impl Difficulty {
    /// Returns the noise probability for this preset.
    pub fn noise(self) -> f64 {
        match self {
            Difficulty::Perfect => 0.0,
            Difficulty::Classic => 0.2,
            Difficulty::Casual => 0.5,
        }
    }

    /// Returns the display name.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Perfect => "Perfect",
            Difficulty::Classic => "Classic",
            Difficulty::Casual => "Casual",
        }
    }

    /// Cycles to the next preset.
    pub fn cycle(self) -> Self {
        match self {
            Difficulty::Perfect => Difficulty::Classic,
            Difficulty::Classic => Difficulty::Casual,
            Difficulty::Casual => Difficulty::Perfect,
        }
    }
}

/// Options for one match, settled before the first round.
#[derive(Debug, Clone, Copy)]
pub struct MatchOptions {
    /// Who the opponent is.
    pub mode: GameMode,
    /// AI noise probability in [0, 1]. Ignored in pass-and-play.
    pub noise: f64,
    /// Number of rounds in the match.
    pub rounds: u32,
    /// Whether the AI holds X in the first round. Ignored in pass-and-play.
    pub ai_first: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            noise: Difficulty::default().noise(),
            rounds: 1,
            ai_first: false,
        }
    }
}
