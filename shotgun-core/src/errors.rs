use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FragmentError {
    #[error("Invalid sequence: symbol {symbol:?} at position {position} is not one of G, C, A, T")]
    InvalidSequence { symbol: char, position: usize },
}
