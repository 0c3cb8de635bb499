// src/services/mod.rs
pub mod chatbot;
pub mod classifier;
pub mod llm;
