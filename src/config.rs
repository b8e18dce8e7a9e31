use crate::magic::SparseRandom;
use crate::slider::Slider;

/// Where magic numbers come from when tables are built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MagicSource {
    /// Replay the slider's constants, one candidate per square
    #[default]
    Precomputed,
    /// Search with sparse random candidates. Square `sq` is seeded with `seed + sq`, so a
    /// given seed produces the same magics whether squares are searched serially or in
    /// parallel. `None` seeds every square from the operating system.
    Regenerate { seed: Option<u64> },
}

impl MagicSource {
    /// Candidate stream for one square of `slider`
    pub fn candidates(&self, slider: &Slider, sq: u8) -> Box<dyn Iterator<Item = u64>> {
        match *self {
            MagicSource::Precomputed => Box::new(std::iter::once(slider.magics[sq as usize])),
            MagicSource::Regenerate { seed: Some(seed) } => {
                Box::new(SparseRandom::seeded(seed.wrapping_add(sq as u64)))
            }
            MagicSource::Regenerate { seed: None } => Box::new(SparseRandom::new()),
        }
    }
}

/// Options for building attack tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildConfig {
    pub source: MagicSource,
    /// Search squares on the rayon thread pool
    pub parallel: bool,
}

impl BuildConfig {
    pub fn regenerate(seed: Option<u64>) -> Self {
        BuildConfig {
            source: MagicSource::Regenerate { seed },
            parallel: false,
        }
    }

    pub fn parallel(self, parallel: bool) -> Self {
        BuildConfig { parallel, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_precomputed_serial() {
        let config = BuildConfig::default();
        assert_eq!(config.source, MagicSource::Precomputed);
        assert!(!config.parallel);
    }

    #[test]
    fn test_precomputed_yields_the_slider_constant_once() {
        let candidates: Vec<u64> = MagicSource::Precomputed.candidates(&Slider::ROOK, 5).collect();
        assert_eq!(candidates, vec![Slider::ROOK.magics[5]]);
    }

    #[test]
    fn test_seeded_candidates_differ_per_square() {
        let source = MagicSource::Regenerate { seed: Some(1) };
        let a: Vec<u64> = source.candidates(&Slider::BISHOP, 0).take(4).collect();
        let b: Vec<u64> = source.candidates(&Slider::BISHOP, 1).take(4).collect();
        let again: Vec<u64> = source.candidates(&Slider::BISHOP, 0).take(4).collect();
        assert_ne!(a, b);
        assert_eq!(a, again);
    }
}
