pub mod company_handlers;
pub mod forum_handlers;
pub mod student_handlers;
pub mod system_handlers;

pub use company_handlers::*;
pub use forum_handlers::*;
pub use student_handlers::*;
pub use system_handlers::*;
