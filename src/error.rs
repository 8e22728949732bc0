use thiserror::Error;

use crate::core::{ParamField, WeatherCondition};

pub type TuningResult<T> = Result<T, TuningError>;

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("cannot sign off {condition}: not all checkpoints reviewed")]
    ReviewIncomplete { condition: WeatherCondition },

    #[error("value kind does not match field {field:?}")]
    FieldKind { field: ParamField },

    #[error("unknown weather condition tag: {0}")]
    UnknownCondition(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
