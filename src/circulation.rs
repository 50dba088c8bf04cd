pub mod domain;
pub mod dto;
pub mod history;
pub mod queue;
