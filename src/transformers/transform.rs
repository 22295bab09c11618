//! Transform trait.
use crate::speech::Dataset;

pub trait Transform {
    /// Takes ownership of [Dataset] and returns the transformed one.
    fn transform_own(&self, dataset: Dataset) -> Dataset;
}

/// Transformer enables transform chaining, adding multiple transforms and
/// applying them in insertion order in one step.
#[derive(Default)]
pub struct Transformer(Vec<Box<dyn Transform + Sync>>);

impl Transformer {
    pub fn add(&mut self, transform: Box<dyn Transform + Sync>) -> &mut Transformer {
        self.0.push(transform);
        self
    }
}

impl Transform for Transformer {
    fn transform_own(&self, dataset: Dataset) -> Dataset {
        self.0
            .iter()
            .fold(dataset, |dataset, transform| transform.transform_own(dataset))
    }
}
