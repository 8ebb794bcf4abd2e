use crate::common::structs::custom_error::CustomError;
use std::error::Error;
use std::fmt;
use std::fmt::Formatter;

impl CustomError {
    pub fn new(msg: &str) -> CustomError {
        CustomError { message: msg.to_string() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CustomError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CustomError {}
