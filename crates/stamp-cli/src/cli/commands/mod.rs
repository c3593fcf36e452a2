mod card;
mod points;
mod resolve;

pub use card::run_card;
pub use points::run_points;
pub use resolve::run_resolve;
