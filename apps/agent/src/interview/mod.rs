// Interview setup: room context from the backend and interviewer instructions.

pub mod handlers;
pub mod instructions;
pub mod prompts;
pub mod room_data;
