//! Grid scroll directions.
//!
//! The horizontal axis (left/right) and the vertical axis (up/down) scroll
//! independently, and each axis has at most one active direction.

use core::fmt;
use core::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl ScrollDirection {
    pub const ALL: [ScrollDirection; 4] = [
        ScrollDirection::Up,
        ScrollDirection::Down,
        ScrollDirection::Left,
        ScrollDirection::Right,
    ];

    pub fn axis(self) -> Axis {
        match self {
            ScrollDirection::Up | ScrollDirection::Down => Axis::Vertical,
            ScrollDirection::Left | ScrollDirection::Right => Axis::Horizontal,
        }
    }

    pub fn opposite(self) -> ScrollDirection {
        match self {
            ScrollDirection::Up => ScrollDirection::Down,
            ScrollDirection::Down => ScrollDirection::Up,
            ScrollDirection::Left => ScrollDirection::Right,
            ScrollDirection::Right => ScrollDirection::Left,
        }
    }

    /// Name used in the persisted settings.
    pub fn name(self) -> &'static str {
        match self {
            ScrollDirection::Up => "UP",
            ScrollDirection::Down => "DOWN",
            ScrollDirection::Left => "LEFT",
            ScrollDirection::Right => "RIGHT",
        }
    }

    fn bit(self) -> u8 {
        match self {
            ScrollDirection::Up => 0b0001,
            ScrollDirection::Down => 0b0010,
            ScrollDirection::Left => 0b0100,
            ScrollDirection::Right => 0b1000,
        }
    }
}

impl fmt::Display for ScrollDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scroll direction {:?}", self.0)
    }
}

impl std::error::Error for UnknownDirection {}

impl FromStr for ScrollDirection {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScrollDirection::ALL
            .into_iter()
            .find(|direction| direction.name() == s)
            .ok_or_else(|| UnknownDirection(s.to_string()))
    }
}

/// The set of active scroll directions, at most one per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveDirections {
    bits: u8,
}

impl ActiveDirections {
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    /// Rebuild from [`ActiveDirections::bits`]. Unknown bits are dropped and
    /// an axis with both directions set keeps neither.
    pub fn from_bits(bits: u8) -> Self {
        let mut directions = Self::none();
        for direction in ScrollDirection::ALL {
            if bits & direction.bit() != 0 && bits & direction.opposite().bit() == 0 {
                directions.bits |= direction.bit();
            }
        }
        directions
    }

    pub fn bits(self) -> u8 {
        self.bits
    }

    pub fn contains(self, direction: ScrollDirection) -> bool {
        self.bits & direction.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Turn `direction` on, clearing its opposite on the same axis.
    pub fn activate(&mut self, direction: ScrollDirection) {
        self.bits &= !direction.opposite().bit();
        self.bits |= direction.bit();
    }

    pub fn deactivate(&mut self, direction: ScrollDirection) {
        self.bits &= !direction.bit();
    }

    /// Settings screen behaviour: an active direction is switched off,
    /// otherwise it replaces whatever was active on its axis.
    pub fn toggle(&mut self, direction: ScrollDirection) {
        if self.contains(direction) {
            self.deactivate(direction);
        } else {
            self.activate(direction);
        }
    }

    pub fn on_axis(self, axis: Axis) -> Option<ScrollDirection> {
        self.iter().find(|direction| direction.axis() == axis)
    }

    pub fn iter(self) -> impl Iterator<Item = ScrollDirection> {
        ScrollDirection::ALL
            .into_iter()
            .filter(move |direction| self.contains(*direction))
    }

    /// Shift applied to vertical lines along the x axis.
    pub fn shift_x(self, offset: i32) -> i32 {
        match self.on_axis(Axis::Horizontal) {
            Some(ScrollDirection::Right) => offset,
            Some(ScrollDirection::Left) => -offset,
            _ => 0,
        }
    }

    /// Shift applied to horizontal lines along the y axis.
    pub fn shift_y(self, offset: i32) -> i32 {
        match self.on_axis(Axis::Vertical) {
            Some(ScrollDirection::Down) => offset,
            Some(ScrollDirection::Up) => -offset,
            _ => 0,
        }
    }
}

impl FromIterator<ScrollDirection> for ActiveDirections {
    /// Later directions win over earlier ones on the same axis.
    fn from_iter<I: IntoIterator<Item = ScrollDirection>>(iter: I) -> Self {
        let mut directions = Self::none();
        for direction in iter {
            directions.activate(direction);
        }
        directions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ScrollDirection::*;

    #[test]
    fn toggling_an_active_direction_turns_the_axis_off() {
        for direction in ScrollDirection::ALL {
            let mut directions = ActiveDirections::none();
            directions.toggle(direction);
            assert!(directions.contains(direction));

            directions.toggle(direction);
            assert_eq!(directions.on_axis(direction.axis()), None);
        }
    }

    #[test]
    fn toggling_replaces_the_opposite_direction() {
        for direction in ScrollDirection::ALL {
            let mut directions = ActiveDirections::none();
            directions.toggle(direction.opposite());
            directions.toggle(direction);

            assert!(directions.contains(direction));
            assert!(!directions.contains(direction.opposite()));
        }
    }

    #[test]
    fn axes_are_independent() {
        let mut directions = ActiveDirections::none();
        directions.toggle(Up);
        directions.toggle(Right);
        assert_eq!(directions.iter().collect::<Vec<_>>(), vec![Up, Right]);

        directions.toggle(Down);
        assert_eq!(directions.on_axis(Axis::Vertical), Some(Down));
        assert_eq!(directions.on_axis(Axis::Horizontal), Some(Right));

        directions.toggle(Right);
        assert_eq!(directions.iter().collect::<Vec<_>>(), vec![Down]);
    }

    #[test]
    fn shifts_follow_the_active_axis() {
        let up: ActiveDirections = [Up].into_iter().collect();
        assert_eq!(up.shift_y(5), -5);
        assert_eq!(up.shift_x(5), 0);

        let down_left: ActiveDirections = [Down, Left].into_iter().collect();
        assert_eq!(down_left.shift_y(3), 3);
        assert_eq!(down_left.shift_x(3), -3);

        assert_eq!(ActiveDirections::none().shift_x(7), 0);
        assert_eq!(ActiveDirections::none().shift_y(7), 0);
    }

    #[test]
    fn later_directions_win_when_collecting() {
        let directions: ActiveDirections = [Left, Up, Right].into_iter().collect();
        assert_eq!(directions.iter().collect::<Vec<_>>(), vec![Up, Right]);
    }

    #[test]
    fn bits_drop_conflicting_axes() {
        let directions: ActiveDirections = [Up, Left].into_iter().collect();
        assert_eq!(ActiveDirections::from_bits(directions.bits()), directions);

        let both_vertical = ActiveDirections::from_bits(0b0011 | 0b1000);
        assert_eq!(both_vertical.iter().collect::<Vec<_>>(), vec![Right]);
    }

    #[test]
    fn names_parse_back() {
        for direction in ScrollDirection::ALL {
            assert_eq!(direction.name().parse::<ScrollDirection>(), Ok(direction));
        }
        assert_eq!(
            "SIDEWAYS".parse::<ScrollDirection>(),
            Err(UnknownDirection("SIDEWAYS".into()))
        );
    }
}
