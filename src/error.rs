use crate::element::Element;

use thiserror::Error;

/// Ways a construction or an application can fail.
///
/// Every variant is a precondition violation detected at construction or call time.
/// Nothing here is recovered from locally: an invalid construction must not silently produce
/// a wrong model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Factors of a product (or two models being compared) disagree on the arity of `symbol`,
    /// or one of them lacks it.
    #[error("signature mismatch on symbol `{symbol}`")]
    SignatureMismatch { symbol: String },

    /// A tuple of the wrong length was added to a relation or an operation.
    #[error("`{symbol}` has arity {expected}, got a tuple of arity {found}")]
    Arity {
        symbol: String,
        expected: usize,
        found: usize,
    },

    /// An empty row was added to an operation, so there is no result to split off.
    #[error("`{symbol}` needs a row with a result, got an empty row")]
    EmptyRow { symbol: String },

    /// An operation was applied outside its domain.
    #[error("`{symbol}` is undefined at {args:?}")]
    UndefinedApplication { symbol: String, args: Vec<Element> },

    #[error("unknown operation symbol `{0}`")]
    UnknownOperation(String),

    #[error("unknown relation symbol `{0}`")]
    UnknownRelation(String),

    /// A relation tuple, operation entry or subuniverse mentions an element outside the
    /// universe it should live in.
    #[error("`{symbol}` mentions {element:?}, which is outside the universe")]
    OutsideUniverse { symbol: String, element: Element },

    #[error("a product needs at least one factor")]
    EmptyProduct,

    #[error("factor index {index} out of range for a product of {factors} factors")]
    FactorIndex { index: usize, factors: usize },

    /// The universe of a would-be subdirect product does not project onto every factor.
    #[error("universe is not a subdirect product of its factors")]
    NotSubdirect,

    /// Quotients are only defined for models without relations.
    #[error("cannot take the quotient of a model with relations")]
    RelationalQuotient,

    /// An operation result is not related to any representative of the quotient.
    #[error("no representative is congruent to {element:?}")]
    MissingRepresentative { element: Element },

    #[error("free variable `{0}` has no value")]
    FreeVariable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
