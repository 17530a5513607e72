pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // the watchdog adds its own timestamps.
        .without_time()
        // stdout is reserved for the function result.
        .with_writer(std::io::stderr)
        .init();
}
