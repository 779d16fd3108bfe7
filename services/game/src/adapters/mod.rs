pub mod kv;
pub mod openai;

pub use kv::PgKvStore;
pub use openai::OpenAiProvider;
