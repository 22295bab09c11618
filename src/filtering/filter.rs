//! Filtering trait.
use crate::speech::{Dataset, Speech};

/// immutable, pure filter (2 successive equal inputs -> 2 equal outputs)
pub trait Filter<T>: Default {
    fn detect(&self, item: T) -> bool;
}

/// Keep the speeches of `dataset` that `filter` detects, in order.
pub fn apply<F>(filter: &F, dataset: Dataset) -> Dataset
where
    F: for<'a> Filter<&'a Speech>,
{
    dataset.into_iter().filter(|s| filter.detect(s)).collect()
}

#[cfg(test)]
mod tests {
    use crate::speech::{Dataset, Speech};

    use super::{apply, Filter};

    #[derive(Default)]
    struct EvenId;

    impl Filter<&Speech> for EvenId {
        fn detect(&self, s: &Speech) -> bool {
            s.id.parse::<u32>().map(|i| i % 2 == 0).unwrap_or(false)
        }
    }

    #[test]
    fn apply_keeps_order() {
        let d: Dataset = (0..6)
            .map(|i| Speech::new(i.to_string(), "2001-01-01".into(), 23, "x".into()))
            .collect();
        let kept = apply(&EvenId, d);
        let ids: Vec<&str> = kept.speeches().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "2", "4"]);
    }
}
