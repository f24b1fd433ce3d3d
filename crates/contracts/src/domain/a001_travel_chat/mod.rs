//! Travel chat: messages, wire DTOs and the transcript export format.

pub mod aggregate;
pub mod dto;
pub mod error;
pub mod transcript;
