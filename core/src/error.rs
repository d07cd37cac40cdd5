use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Unknown regime '{input}': expected 'weekday' or 'saturday'")]
    UnknownRegime { input: String },
}

pub type PlanResult<T> = Result<T, PlanError>;
