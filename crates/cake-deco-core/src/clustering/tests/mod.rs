//! Tests for the clustering module.

mod helpers;

mod edge_cases;
