//! Outbound adapters: the storage-facing side of the model.

pub mod persistence;
