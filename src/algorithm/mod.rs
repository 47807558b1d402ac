/// Tiles classified by whether they can still be split
pub mod collection;
/// Oriented sizes and the set of taken dimensions
pub mod dimensions;
/// Generation driver and run configuration
pub mod executor;
/// Split enumeration and random selection
pub mod split;
