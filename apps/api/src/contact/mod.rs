// Contact form: validation, notification formatting, and delivery via Pushover.

pub mod handlers;
pub mod models;
pub mod notifier;
