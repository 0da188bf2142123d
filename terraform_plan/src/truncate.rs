use crate::config::TruncateStrategy;

/// A collection capped for output size, with its untruncated length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounded<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub truncated: bool,
}

impl<T> Bounded<T> {
    /// Cap `items` at `max` entries. Sort before calling so the kept prefix is stable.
    pub fn new(mut items: Vec<T>, max: usize, strategy: TruncateStrategy) -> Self {
        let total = items.len();
        let truncated = total > max;
        if truncated {
            match strategy {
                TruncateStrategy::DropTail => items.truncate(max),
                TruncateStrategy::SummaryOnly => items.clear(),
            }
        }
        Bounded {
            items,
            total,
            truncated,
        }
    }

    pub fn shown(&self) -> usize {
        self.items.len()
    }

    /// Advisory message for a truncated collection, `None` otherwise.
    pub fn warning(&self, name: &str) -> Option<String> {
        self.truncated.then(|| {
            format!(
                "{} truncated: showing {} of {}",
                name,
                self.shown(),
                self.total
            )
        })
    }
}
