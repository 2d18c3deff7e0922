pub mod camera;
pub mod kv;
pub mod llm;
