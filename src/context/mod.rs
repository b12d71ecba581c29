//! Context module - school knowledge base and keyword retrieval
//!
//! - [`KnowledgeStore`]: immutable document collection, built once at startup
//! - [`Retriever`]: substring matching and ranking with the address boost
//! - [`school_kb`]: the built-in Buds School documents

pub mod knowledge_store;
pub mod retriever;
pub mod school_kb;

pub use knowledge_store::{KnowledgeError, KnowledgeStore};
pub use retriever::{search_terms, Retriever, LOCATION_TERMS};
pub use school_kb::ADDRESS_DOCUMENT_ID;
