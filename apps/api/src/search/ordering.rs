use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Presentation order for search results.
///
/// The engine never shuffles; callers arrange the record set once (at load, or
/// per session with a seed) and filtering preserves whatever order it gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultOrder {
    #[default]
    Identity,
    /// Fisher–Yates shuffle. A seed makes the order reproducible.
    Shuffled { seed: Option<u64> },
}

impl ResultOrder {
    /// Parses `identity` / `shuffled` (case-insensitive).
    pub fn parse(kind: &str, seed: Option<u64>) -> Option<Self> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "identity" | "none" => Some(ResultOrder::Identity),
            "shuffled" | "shuffle" | "random" => Some(ResultOrder::Shuffled { seed }),
            _ => None,
        }
    }

    pub fn arrange<T>(&self, items: &mut [T]) {
        match self {
            ResultOrder::Identity => {}
            ResultOrder::Shuffled { seed: Some(seed) } => {
                items.shuffle(&mut StdRng::seed_from_u64(*seed));
            }
            ResultOrder::Shuffled { seed: None } => {
                items.shuffle(&mut rand::thread_rng());
            }
        }
    }
}
