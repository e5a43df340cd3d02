//! Remote service clients
//!
//! Two external services back the smarter commands: an entity-extraction
//! endpoint for page summaries and a question-answering endpoint for
//! generic queries. Both are behind trait seams so the executor can be
//! tested without a network.

mod answers;
mod entities;

pub use answers::{AnswerService, HttpAnswerService};
pub use entities::{EntityExtractor, HttpEntityExtractor};
