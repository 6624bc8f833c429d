pub mod encoder;
pub mod recommender;
pub mod roster;
