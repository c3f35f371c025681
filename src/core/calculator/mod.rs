pub mod grouping;
pub mod notes;
pub mod pairing;
pub mod summary;
pub mod wage;
