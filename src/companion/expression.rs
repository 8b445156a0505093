use rand::Rng;

/// The companion robot's face. The renderer maps each variant to its own
/// pair of eyes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expression {
    #[default]
    Neutral,
    Wink,
    Averted,
}

impl Expression {
    pub const ALL: [Expression; 3] = [Expression::Neutral, Expression::Wink, Expression::Averted];

    /// Uniform draw over all three variants. Repeats on consecutive draws are
    /// expected and fine.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_covers_every_variant() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 3];
        for _ in 0..200 {
            match Expression::random(&mut rng) {
                Expression::Neutral => seen[0] = true,
                Expression::Wink => seen[1] = true,
                Expression::Averted => seen[2] = true,
            }
        }
        assert_eq!(seen, [true, true, true]);
    }
}
