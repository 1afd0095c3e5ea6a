//! Page widget state
//!
//! DOM-independent state behind the page glue. The web crate owns the
//! elements and listeners; these types decide what to change.

mod banner;
mod contact;
mod cursor;
mod nav;
mod reveal;
mod throttle;
mod typewriter;

pub use banner::{welcome_banner, BannerLine};
pub use contact::{Acknowledgement, ContactForm, Submission, CONTACT_ACK_MESSAGE};
pub use cursor::{CursorGlow, HOVER_SELECTORS};
pub use nav::NavState;
pub use reveal::{RevealStyle, SkillBar, REVEAL_SELECTORS};
pub use throttle::ScrollThrottle;
pub use typewriter::Typewriter;
