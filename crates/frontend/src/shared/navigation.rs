/// Navigate the browser to `path` by setting `location.href`.
///
/// The one DOM navigation a successful login performs. If no window is
/// available the failure is logged and nothing else happens.
pub fn redirect_to(path: &str) {
    let Some(window) = web_sys::window() else {
        log::error!("cannot redirect to {}: no window", path);
        return;
    };
    if let Err(e) = window.location().set_href(path) {
        log::error!("failed to redirect to {}: {:?}", path, e);
    }
}
