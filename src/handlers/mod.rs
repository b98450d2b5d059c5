//! HTTP handlers

pub mod detections;
pub mod health;
pub mod index;
pub mod ingest;
