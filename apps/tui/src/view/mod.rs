// View-synchronization core: interaction state machine, pie layout, and the
// view model every surface renders from.

pub mod lock;
pub mod pie;
pub mod sync;

pub use lock::{FilterState, Lock, Refresh, ViewEvent};
pub use sync::{build_view_model, LegendRow, Slice, ViewModel};
