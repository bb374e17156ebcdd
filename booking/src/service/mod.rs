pub mod booking;
pub mod validator;
