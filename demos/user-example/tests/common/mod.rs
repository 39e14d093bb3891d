use rstest::fixture;
use tracing::debug;

mod tag;
pub use self::tag::UserTag;

mod test_app;
pub use self::test_app::*;

/// Installs the test subscriber, ignoring the error when another test already did.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[fixture]
pub fn app() -> TestApp {
    init_tracing();
    let app = TestApp::start();
    debug!("user application ready");

    app
}
