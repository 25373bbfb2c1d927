use std::io::Write;

use tempfile::NamedTempFile;

/// Writes the `contents` into a temporary `.toml` file, which is removed
/// when the returned handle is dropped.
#[allow(dead_code)]
pub fn make_batch_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("should be able to create a temporary file");

    file.write_all(contents.as_bytes())
        .expect("should be able to write the batch file");

    file
}

#[allow(dead_code)]
pub fn debug_setup() {
    std::env::set_var("RUST_BACKTRACE", "1");
    std::env::set_var("RUST_APP_LOG", "trace");
    color_backtrace::install();
    let _ = pretty_env_logger::try_init_custom_env("RUST_APP_LOG");
}
