pub use blog_post::*;
pub use lesson::*;
pub use robot::*;
pub use support_ticket::*;

mod blog_post;
mod lesson;
mod robot;
mod support_ticket;
