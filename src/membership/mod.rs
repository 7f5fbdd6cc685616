mod association;
mod evaluator;

pub use association::{ClientAssociation, associate};
pub use evaluator::locate;
