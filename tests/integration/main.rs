//! Integration tests for termseq

mod config_test;
mod helpers;
mod writer_test;
