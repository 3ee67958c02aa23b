//! Textbook RSA: key generation, message encoding and raw modular
//! exponentiation, with a small text key format and a command line front end.
//!
//! No padding scheme is applied. Do not use this for real data.

pub mod cli;
pub mod rsa;
pub mod util;
