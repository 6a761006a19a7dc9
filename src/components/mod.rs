mod anchor_link;
mod contact_form;
mod footer;
mod magnetic;
mod progress_bar;
mod theme_toggle;
mod tilt_card;
mod typing;

pub use anchor_link::AnchorLink;
pub use contact_form::ContactForm;
pub use footer::Footer;
pub use magnetic::MagneticButton;
pub use progress_bar::ProgressBar;
pub use theme_toggle::ThemeToggle;
pub use tilt_card::TiltCard;
pub use typing::Typing;
