pub mod agent;
pub mod fallback;
pub mod system_prompt;
pub mod types;

pub use agent::{ConsultantAgent, DEFAULT_TEMPERATURE};
pub use types::{Advice, AdviceStatus, MemberContext};
