//! Qiita adapter
//!
//! Implementation of the Qiita:Team items client.

pub mod client;

pub use client::QiitaClientImpl;
