pub mod config;
pub mod form;
pub mod password_gen;
pub mod testpass;
