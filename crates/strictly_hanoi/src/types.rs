//! Core domain types for Towers of Hanoi.

use super::error::ConfigError;
use super::invariants::{HanoiInvariants, InvariantSet, describe};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Largest supported disk count. `solve` emits `2^n - 1` moves.
pub const MAX_DISKS: u8 = 20;

/// A disk, identified by its size (1 = smallest).
pub type Disk = u8;

/// One of the three poles.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Pole {
    /// Pole 0, where every game starts.
    #[display("left")]
    Left,
    /// Pole 1, the auxiliary pole of the canonical solution.
    #[display("middle")]
    Middle,
    /// Pole 2, the default target.
    #[display("right")]
    Right,
}

impl Pole {
    /// All poles in index order.
    pub const ALL: [Pole; 3] = [Pole::Left, Pole::Middle, Pole::Right];

    /// Index of this pole (0-2).
    pub fn index(self) -> usize {
        match self {
            Pole::Left => 0,
            Pole::Middle => 1,
            Pole::Right => 2,
        }
    }

    /// Pole for an index, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The pole that is neither `a` nor `b`.
    ///
    /// Only meaningful for distinct poles; equal inputs yield an arbitrary
    /// pole other than the input.
    pub fn spare(a: Pole, b: Pole) -> Pole {
        Pole::iter()
            .find(|pole| *pole != a && *pole != b)
            .unwrap_or(Pole::Left)
    }
}

/// Three poles holding disks `1..=disk_count`, each exactly once.
///
/// Within a pole, sizes strictly decrease from bottom to top. Boards can only
/// be built through [`Board::new`] or the validating [`Board::from_poles`],
/// and only changed through a legal move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    /// Poles in index order, bottom of stack first.
    pub(crate) poles: [Vec<Disk>; 3],
    /// Total number of disks.
    pub(crate) disk_count: u8,
}

impl Board {
    /// Creates the canonical start board: all disks on the left pole.
    #[instrument]
    pub fn new(disk_count: u8) -> Result<Self, ConfigError> {
        check_disk_count(disk_count)?;
        Ok(Self {
            poles: [(1..=disk_count).rev().collect(), Vec::new(), Vec::new()],
            disk_count,
        })
    }

    /// Builds a board from untrusted pole contents (bottom of stack first).
    ///
    /// Rejects anything that is not a valid position; input is never repaired.
    #[instrument(skip(poles))]
    pub fn from_poles(poles: Vec<Vec<Disk>>, disk_count: u8) -> Result<Self, ConfigError> {
        check_disk_count(disk_count)?;

        let poles: [Vec<Disk>; 3] = poles.try_into().map_err(|poles: Vec<Vec<Disk>>| {
            ConfigError::new(format!("Expected 3 poles, got {}", poles.len()))
        })?;

        let board = Self { poles, disk_count };
        HanoiInvariants::check_all(&board).map_err(|violations| {
            let descriptions = describe(&violations);
            debug!(%descriptions, "Rejected malformed board");
            ConfigError::new(format!("Malformed board: {}", descriptions))
        })?;

        Ok(board)
    }

    /// Total number of disks.
    pub fn disk_count(&self) -> u8 {
        self.disk_count
    }

    /// Contents of a pole, bottom first.
    pub fn pole(&self, pole: Pole) -> &[Disk] {
        &self.poles[pole.index()]
    }

    /// All poles in index order.
    pub fn poles(&self) -> &[Vec<Disk>; 3] {
        &self.poles
    }

    /// Top disk of a pole, or `None` if empty.
    pub fn top(&self, pole: Pole) -> Option<Disk> {
        self.pole(pole).last().copied()
    }

    /// Checks whether a pole holds no disks.
    pub fn is_empty(&self, pole: Pole) -> bool {
        self.pole(pole).is_empty()
    }

    /// Pole currently holding `disk`.
    pub fn location(&self, disk: Disk) -> Option<Pole> {
        Pole::ALL
            .into_iter()
            .find(|&pole| self.pole(pole).contains(&disk))
    }

    /// Wire representation: `[[3, 2, 1], [], []]`.
    pub fn to_vecs(&self) -> Vec<Vec<Disk>> {
        self.poles.to_vec()
    }

    /// Moves the top disk without any legality check.
    pub(crate) fn transfer(&mut self, from: Pole, to: Pole) -> Option<Disk> {
        let disk = self.poles[from.index()].pop()?;
        self.poles[to.index()].push(disk);
        Some(disk)
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let width = self.disk_count.to_string().len() + 4;
        let height = self.poles.iter().map(Vec::len).max().unwrap_or(0);
        let mut result = String::new();

        for level in (0..height).rev() {
            for pole in &self.poles {
                let cell = match pole.get(level) {
                    Some(disk) => disk.to_string(),
                    None => "|".to_string(),
                };
                result.push_str(&format!("{:^width$}", cell));
            }
            result.push('\n');
        }
        result.push_str(&"=".repeat(width * 3));
        result.push('\n');
        for pole in Pole::ALL {
            result.push_str(&format!("{:^width$}", pole.index()));
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[track_caller]
fn check_disk_count(disk_count: u8) -> Result<(), ConfigError> {
    if disk_count < 1 || disk_count > MAX_DISKS {
        return Err(ConfigError::new(format!(
            "Disk count {} out of range (must be 1-{})",
            disk_count, MAX_DISKS
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_stacks_left_pole() {
        let board = Board::new(3).unwrap();
        assert_eq!(board.pole(Pole::Left), &[3, 2, 1]);
        assert!(board.is_empty(Pole::Middle));
        assert!(board.is_empty(Pole::Right));
        assert_eq!(board.top(Pole::Left), Some(1));
        assert_eq!(board.top(Pole::Right), None);
    }

    #[test]
    fn test_new_board_rejects_out_of_range() {
        assert!(Board::new(0).is_err());
        assert!(Board::new(MAX_DISKS + 1).is_err());
        assert!(Board::new(MAX_DISKS).is_ok());
    }

    #[test]
    fn test_from_poles_accepts_valid_board() {
        let board = Board::from_poles(vec![vec![3], vec![2, 1], vec![]], 3).unwrap();
        assert_eq!(board.location(1), Some(Pole::Middle));
        assert_eq!(board.location(3), Some(Pole::Left));
        assert_eq!(board.location(4), None);
    }

    #[test]
    fn test_from_poles_rejects_wrong_pole_count() {
        let err = Board::from_poles(vec![vec![2, 1], vec![]], 2).unwrap_err();
        assert!(err.message.contains("Expected 3 poles"));
    }

    #[test]
    fn test_from_poles_rejects_inverted_stack() {
        let err = Board::from_poles(vec![vec![1, 2, 3], vec![], vec![]], 3).unwrap_err();
        assert!(err.message.contains("Malformed board"));
    }

    #[test]
    fn test_from_poles_rejects_duplicates_and_omissions() {
        assert!(Board::from_poles(vec![vec![3, 1], vec![1], vec![]], 3).is_err());
        assert!(Board::from_poles(vec![vec![3, 2], vec![], vec![]], 3).is_err());
        assert!(Board::from_poles(vec![vec![4, 2, 1], vec![], vec![]], 3).is_err());
    }

    #[test]
    fn test_spare_pole() {
        assert_eq!(Pole::spare(Pole::Left, Pole::Right), Pole::Middle);
        assert_eq!(Pole::spare(Pole::Middle, Pole::Left), Pole::Right);
        assert_eq!(Pole::spare(Pole::Right, Pole::Middle), Pole::Left);
    }

    #[test]
    fn test_display_shows_every_disk() {
        let board = Board::new(3).unwrap();
        let text = board.display();
        for disk in ["1", "2", "3"] {
            assert!(text.contains(disk));
        }
        assert_eq!(text.lines().count(), 5);
    }
}
