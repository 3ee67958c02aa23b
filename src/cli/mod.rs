// Command line interface

pub mod app;
