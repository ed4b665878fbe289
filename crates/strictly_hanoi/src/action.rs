//! First-class move type for Towers of Hanoi.
//!
//! A move is the player's intent: take the top disk of one pole and put it
//! on another. It can be validated independently of execution.

use super::error::MoveError;
use super::types::Pole;
use serde::Serialize;

/// A disk transfer from one pole's top to another's.
///
/// Source and destination always differ. Moves from the wire go through
/// [`Move::from_indices`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    from: Pole,
    to: Pole,
}

impl Move {
    /// Creates a move between two distinct poles.
    pub fn new(from: Pole, to: Pole) -> Result<Self, MoveError> {
        if from == to {
            return Err(MoveError::SamePole(from));
        }
        Ok(Self { from, to })
    }

    /// Creates a move from wire indices (0-2).
    pub fn from_indices(from: usize, to: usize) -> Result<Self, MoveError> {
        let from_pole = Pole::from_index(from).ok_or(MoveError::UnknownPole(from))?;
        let to_pole = Pole::from_index(to).ok_or(MoveError::UnknownPole(to))?;
        Self::new(from_pole, to_pole)
    }

    /// Source pole.
    pub fn from(&self) -> Pole {
        self.from
    }

    /// Destination pole.
    pub fn to(&self) -> Pole {
        self.to
    }

    /// The move that carries the same disk back.
    pub fn inverse(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// Wire representation `[from, to]`.
    pub fn to_indices(&self) -> [usize; 2] {
        [self.from.index(), self.to.index()]
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from.index(), self.to.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_pole_rejected() {
        assert_eq!(
            Move::new(Pole::Middle, Pole::Middle),
            Err(MoveError::SamePole(Pole::Middle))
        );
    }

    #[test]
    fn test_from_indices() {
        let mv = Move::from_indices(0, 2).unwrap();
        assert_eq!(mv.from(), Pole::Left);
        assert_eq!(mv.to(), Pole::Right);
        assert_eq!(mv.to_indices(), [0, 2]);
        assert_eq!(Move::from_indices(3, 0), Err(MoveError::UnknownPole(3)));
        assert_eq!(Move::from_indices(1, 1), Err(MoveError::SamePole(Pole::Middle)));
    }

    #[test]
    fn test_inverse_swaps_poles() {
        let mv = Move::new(Pole::Left, Pole::Middle).unwrap();
        assert_eq!(mv.inverse(), Move::new(Pole::Middle, Pole::Left).unwrap());
        assert_eq!(mv.to_string(), "0 -> 1");
    }

    #[test]
    fn test_serializes_pole_names() {
        let mv = Move::new(Pole::Left, Pole::Right).unwrap();
        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(json, r#"{"from":"left","to":"right"}"#);
    }
}
