use qs_core::QsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] QsError),

    #[error("arrival of {client} at {time} found no agent to dispatch to")]
    NoAgents {
        client: qs_core::ClientId,
        time:   qs_core::SimTime,
    },
}

pub type SimResult<T> = Result<T, SimError>;
