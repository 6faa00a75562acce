// Section enhancement: static per-section templates behind a swappable trait.

pub mod enhancer;
pub mod handlers;
pub mod sections;
