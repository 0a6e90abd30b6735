pub mod state;
pub mod timer;

pub use state::LoadingState;
pub use timer::SplashTimer;
