//! Integration tests for the InternHub portal.

mod helpers;

mod auth_test;
mod gate_test;
mod portal_test;
mod storage_test;
