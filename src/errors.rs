use std::fmt;

use crate::recipe::Resource;

#[derive(Debug, PartialEq, Eq)]
pub enum CoffeeMachineError {
    NotEnough(Resource),
    InvalidSelector(String),
    InvalidNumber(String),
    NegativeFillAmount(String),
    ConfigReaderError(String),
    LockError,
    IoError,
}

impl fmt::Display for CoffeeMachineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoffeeMachineError::NotEnough(resource) => {
                write!(f, "Sorry, not enough {}!", resource)
            }
            CoffeeMachineError::InvalidSelector(selector) => {
                write!(f, "Invalid selection: {}", selector)
            }
            CoffeeMachineError::InvalidNumber(token) => {
                write!(f, "Invalid number: {}", token)
            }
            CoffeeMachineError::NegativeFillAmount(amount) => {
                write!(f, "Cannot add a negative amount: {}", amount)
            }
            CoffeeMachineError::ConfigReaderError(reason) => {
                write!(f, "Error reading the machine configuration: {}", reason)
            }
            CoffeeMachineError::LockError => write!(f, "Error while taking the machine lock"),
            CoffeeMachineError::IoError => write!(f, "Error while talking to the operator"),
        }
    }
}

impl std::error::Error for CoffeeMachineError {}

impl<T> From<std::sync::PoisonError<T>> for CoffeeMachineError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        CoffeeMachineError::LockError
    }
}

impl From<std::io::Error> for CoffeeMachineError {
    fn from(_: std::io::Error) -> Self {
        CoffeeMachineError::IoError
    }
}
