use ulid::Ulid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    InvalidEmail(String),
    InvalidStay(&'static str),
    UnknownRoom(String),
    UnknownCustomer(String),
    Conflict(Ulid),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidEmail(email) => write!(f, "invalid email: {email}"),
            EngineError::InvalidStay(msg) => write!(f, "invalid stay: {msg}"),
            EngineError::UnknownRoom(number) => write!(f, "no such room: {number}"),
            EngineError::UnknownCustomer(email) => write!(f, "no such customer: {email}"),
            EngineError::Conflict(id) => write!(f, "conflict with reservation: {id}"),
        }
    }
}

impl std::error::Error for EngineError {}
