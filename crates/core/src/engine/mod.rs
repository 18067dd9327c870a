mod cache;
mod fold_state;
mod projector;
mod renderer;
mod session;

pub use cache::{CacheKey, RangeCache};
pub use fold_state::FoldState;
pub use projector::{decode_id, project};
pub use renderer::Renderer;
pub use session::{FoldingEngine, Invalidation};
