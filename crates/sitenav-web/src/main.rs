//! WASM entry point for the navigation controller

fn main() {
    console_error_panic_hook::set_once();
    sitenav_web::init_logging();

    if let Err(e) = sitenav_web::mount_once() {
        if e.is_fatal() {
            tracing::warn!("Navigation controller not mounted: {}", e);
        } else {
            tracing::debug!("Navigation controller not mounted: {}", e);
        }
    }
}
