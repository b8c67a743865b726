// Session shutdown: durable transcript first, best-effort analysis after.

pub mod handlers;
pub mod pipeline;
pub mod store;
