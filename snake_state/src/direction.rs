#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Maps a chat command to a direction. Exact, case-sensitive match.
    pub fn from_command(command: &str) -> Option<Self> {
        match command {
            "up" => Some(Self::Up),
            "right" => Some(Self::Right),
            "down" => Some(Self::Down),
            "left" => Some(Self::Left),
            _ => None,
        }
    }

    /// Moves a flat grid index one cell. The caller guarantees `index` is
    /// off the border, so the result stays in range.
    pub fn step(self, index: usize, width: usize) -> usize {
        match self {
            Self::Up => index - width,
            Self::Right => index + 1,
            Self::Down => index + width,
            Self::Left => index - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_exact() {
        assert_eq!(Direction::from_command("up"), Some(Direction::Up));
        assert_eq!(Direction::from_command("right"), Some(Direction::Right));
        assert_eq!(Direction::from_command("down"), Some(Direction::Down));
        assert_eq!(Direction::from_command("left"), Some(Direction::Left));
        assert_eq!(Direction::from_command("Up"), None);
        assert_eq!(Direction::from_command(" up"), None);
        assert_eq!(Direction::from_command("go left"), None);
    }

    #[test]
    fn vertical_steps_cross_a_full_row() {
        assert_eq!(Direction::Up.step(264, 23), 241);
        assert_eq!(Direction::Down.step(264, 23), 287);
        assert_eq!(Direction::Left.step(264, 23), 263);
        assert_eq!(Direction::Right.step(264, 23), 265);
    }
}
