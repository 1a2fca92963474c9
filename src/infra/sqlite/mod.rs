pub mod kv;
pub mod schema;
