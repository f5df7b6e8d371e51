use strum::{Display, VariantArray};

/// The bank of the river a boat is moored at.
///
/// Variants are declared in crossing order, so [`Left`](Side::Left) sorts before [`Right`](Side::Right).
#[derive(Copy, Clone, Debug, Default, Display, VariantArray, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Side {
    /// The starting bank.
    #[default]
    Left,
    /// The bank everyone must reach.
    Right,
}

impl Side {
    /// The bank across the river from `self`.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use super::Side;

    #[test]
    fn opposite_is_involution() {
        for side in Side::VARIANTS {
            assert_ne!(side.opposite(), *side);
            assert_eq!(side.opposite().opposite(), *side);
        }
        assert_eq!(Side::Left.to_string(), "Left");
        assert!(Side::Left < Side::Right);
    }
}
