//! Cross-cutting helpers

pub mod testing;
