// Components - pieces drawn around or on top of the page
//
// - Nav bar: name and numbered section shortcuts
// - Logs panel: tail of the tracing buffer
// - Scrollbar: page position
// - Toast: transient notices (copy results, form status)

pub mod logs_panel;
pub mod nav_bar;
pub mod scrollbar;
pub mod toast;

pub use toast::Toast;
