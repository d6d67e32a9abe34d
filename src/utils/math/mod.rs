pub mod term_vector;

pub use term_vector::TermVector;
