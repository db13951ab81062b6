//! Reusable UI components for the RobotTrader frontend

mod alert;
mod button;
mod footer;
mod guard;
mod input;
mod language_toggle;
mod nav;
mod step_card;

pub use alert::{Alert, AlertVariant, Notice, NoticeAlert};
pub use button::{Button, ButtonVariant, LinkButton};
pub use footer::Footer;
pub use guard::{Guarded, Loading, Replace};
pub use input::{SelectInput, TextArea, TextInput};
pub use language_toggle::LanguageToggle;
pub use nav::Nav;
pub use step_card::StepCard;
