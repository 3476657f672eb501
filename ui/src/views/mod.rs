mod gratitude;
mod home;

pub use gratitude::Gratitude;
pub use home::Home;
