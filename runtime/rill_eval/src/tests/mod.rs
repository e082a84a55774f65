//! Test modules relocated from implementation files.
//!
//! Inline test modules that would dominate their implementation file live
//! here instead; small suites stay next to the code they cover.
