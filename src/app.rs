// Split into smaller pieces to keep each `.rs` readable.
// These includes are concatenated in order, so the module behavior is unchanged.

include!("app/00_state.rs");
include!("app/10_impl_core.rs");
include!("app/20_impl_browser_view.rs");
include!("app/30_app_impl.rs");
include!("app/40_free.rs");
